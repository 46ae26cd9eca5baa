//! Placement Module
//!
//! New frames are centered on the screen.

use crate::shared::Rect;

/// Frame rectangle for a client of `client_width` x `client_height`.
///
/// The frame is as wide as the client and one title bar taller; its origin
/// centers the client size on the screen. Clients larger than the screen
/// get a negative origin.
pub fn center_frame(
    screen_width: u16,
    screen_height: u16,
    client_width: u32,
    client_height: u32,
    title_bar_height: u16,
) -> Rect {
    let x = (i32::from(screen_width) - client_width as i32) / 2;
    let y = (i32::from(screen_height) - client_height as i32) / 2;
    Rect::new(x, y, client_width, client_height + u32::from(title_bar_height))
}
