//! Desktop background

use tracing::debug;

use crate::wm::display::{DisplayError, DisplayServer};

/// Paint the root window in a solid `color`
pub fn set_background<D: DisplayServer>(display: &D, color: u32) -> Result<(), DisplayError> {
    debug!("Setting root background to #{:06x}", color);
    display.set_background(display.root(), color)
}
