//! Window decorations (title bar, close button) for plainwm

use x11rb::protocol::xproto::Window;

use crate::config::{DecorationConfig, WindowColors};
use crate::shared::Rect;
use crate::wm::display::{DisplayError, DisplayServer};

/// Close button square for a frame `frame_width` pixels wide
pub fn close_button_rect(frame_width: u32, config: &DecorationConfig) -> Rect {
    let size = i32::from(config.close_size);
    let x = frame_width as i32 - size - i32::from(config.close_padding);
    let y = (i32::from(config.title_bar_height) - size) / 2;
    Rect::new(x, y, u32::from(config.close_size), u32::from(config.close_size))
}

/// What a press at frame-relative (`x`, `y`) lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePart {
    CloseButton,
    TitleBar,
    ClientArea,
}

impl FramePart {
    pub fn hit_test(frame_width: u32, x: i32, y: i32, config: &DecorationConfig) -> Self {
        if close_button_rect(frame_width, config).contains(x, y) {
            Self::CloseButton
        } else if y < i32::from(config.title_bar_height) {
            Self::TitleBar
        } else {
            Self::ClientArea
        }
    }
}

/// Paint the title bar of `frame`: title text and the close glyph.
///
/// Stateless; the close button position follows the frame's current width.
pub fn draw_decoration<D: DisplayServer>(
    display: &D,
    frame: Window,
    title: &str,
    config: &DecorationConfig,
    colors: &WindowColors,
) -> Result<(), DisplayError> {
    let geometry = display.geometry(frame)?;

    display.clear_area(frame, Rect::new(0, 0, 0, u32::from(config.title_bar_height)))?;
    display.draw_text(frame, colors.title_text, config.title_x, config.title_baseline, title)?;

    let close = close_button_rect(geometry.width, config);
    display.fill_rect(frame, colors.close_button, close)?;

    let (left, top) = (close.x as i16, close.y as i16);
    let (right, bottom) = (close.right() as i16, close.bottom() as i16);
    display.draw_line(frame, colors.close_glyph, (left, top), (right, bottom))?;
    display.draw_line(frame, colors.close_glyph, (left, bottom), (right, top))?;

    Ok(())
}
