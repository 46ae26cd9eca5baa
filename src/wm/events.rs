//! Events Module
//!
//! Display-server events as the window manager core sees them. The X11
//! backend translates raw protocol events into these; everything else in the
//! core is written against this enum only.

use x11rb::protocol::xproto::Window;

use crate::wm::display::WindowChanges;

/// One event delivered by the display server
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayEvent {
    /// A top-level window asks to be mapped
    MapRequest { window: Window },
    /// A window asks for new geometry or stacking
    ConfigureRequest { window: Window, changes: WindowChanges },
    /// Part of a window became visible and needs repainting
    Expose { window: Window },
    /// `WM_NAME` or `_NET_WM_NAME` changed on a window
    NameChanged { window: Window },
    /// A window was destroyed
    Destroy { window: Window },
    /// Someone asked for a window to be closed (`WM_DELETE_WINDOW`, `_NET_CLOSE_WINDOW`)
    CloseRequest { window: Window },
    /// Pointer button pressed; `x`/`y` are window relative
    ButtonPress {
        window: Window,
        x: i16,
        y: i16,
        root_x: i16,
        root_y: i16,
    },
    /// Pointer moved with a button held
    Motion {
        window: Window,
        root_x: i16,
        root_y: i16,
    },
    ButtonRelease { window: Window },
}

impl DisplayEvent {
    /// Window the event targets, used by the top-level router
    pub fn window(&self) -> Window {
        match self {
            Self::MapRequest { window }
            | Self::ConfigureRequest { window, .. }
            | Self::Expose { window }
            | Self::NameChanged { window }
            | Self::Destroy { window }
            | Self::CloseRequest { window }
            | Self::ButtonPress { window, .. }
            | Self::Motion { window, .. }
            | Self::ButtonRelease { window } => *window,
        }
    }

    /// Events that belong to an active pointer grab
    pub fn is_grab_event(&self) -> bool {
        matches!(self, Self::Motion { .. } | Self::ButtonRelease { .. })
    }
}
