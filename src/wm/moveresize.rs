//! MoveResize Module
//!
//! Interactive moving of frames by their title bar. At most one drag runs at
//! a time; the pointer grab keeps every other surface out until release.

use tracing::{debug, warn};
use x11rb::protocol::xproto::Window;

use crate::wm::display::{log_failure, DisplayServer};

/// Move operation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    /// Frame being moved
    pub frame: Window,

    /// Pointer position relative to the frame origin at press time
    pub offset_x: i16,
    pub offset_y: i16,
}

/// Drag controller
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Raise `frame` and start moving it; the press was at (`offset_x`, `offset_y`) inside it.
    ///
    /// Without the pointer grab no session starts, but the frame is still raised.
    pub fn begin<D: DisplayServer>(&mut self, display: &D, frame: Window, offset_x: i16, offset_y: i16) {
        if self.is_active() {
            self.end(display);
        }

        log_failure(display.raise(frame), "raise dragged frame");

        if let Err(e) = display.grab_pointer() {
            warn!("Failed to grab pointer for move of frame {}: {}", frame, e);
            return;
        }

        debug!("Starting move operation for frame {} at offset ({}, {})", frame, offset_x, offset_y);
        self.session = Some(DragSession {
            frame,
            offset_x,
            offset_y,
        });
    }

    /// Follow the pointer; no-op without an active session
    pub fn motion<D: DisplayServer>(&self, display: &D, root_x: i16, root_y: i16) {
        if let Some(session) = &self.session {
            let x = i32::from(root_x) - i32::from(session.offset_x);
            let y = i32::from(root_y) - i32::from(session.offset_y);
            log_failure(display.move_to(session.frame, x, y), "move dragged frame");
        }
    }

    /// Finish the drag and release the grab; the frame stays where it is
    pub fn end<D: DisplayServer>(&mut self, display: &D) {
        if let Some(session) = self.session.take() {
            debug!("Finished move operation for frame {}", session.frame);
            log_failure(display.ungrab_pointer(), "ungrab pointer");
        }
    }

    /// End the drag if it is moving `frame`
    pub fn cancel_for<D: DisplayServer>(&mut self, display: &D, frame: Window) {
        if self.session.is_some_and(|s| s.frame == frame) {
            self.end(display);
        }
    }
}
