//! ICCCM / EWMH atoms used by the window manager
//!
//! Only the handful needed for titles and the close protocol.

use anyhow::{Context, Result};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{Atom, AtomEnum, ConnectionExt as _};

/// Holds all interned atoms
#[derive(Debug, Clone, Copy)]
pub struct Atoms {
    pub wm_protocols: Atom,
    pub wm_delete_window: Atom,
    pub wm_name: Atom,
    pub net_wm_name: Atom,
    pub net_close_window: Atom,
    pub utf8_string: Atom,
}

impl Atoms {
    /// Intern all required atoms
    pub fn new<C: Connection>(conn: &C) -> Result<Self> {
        let intern = |name: &str| -> Result<Atom> {
            Ok(conn
                .intern_atom(false, name.as_bytes())?
                .reply()
                .with_context(|| format!("Failed to intern atom {}", name))?
                .atom)
        };

        Ok(Self {
            wm_protocols: intern("WM_PROTOCOLS")?,
            wm_delete_window: intern("WM_DELETE_WINDOW")?,
            wm_name: AtomEnum::WM_NAME.into(),
            net_wm_name: intern("_NET_WM_NAME")?,
            net_close_window: intern("_NET_CLOSE_WINDOW")?,
            utf8_string: intern("UTF8_STRING")?,
        })
    }

    /// Whether a property change touches the window title
    pub fn is_name_atom(&self, atom: Atom) -> bool {
        atom == self.wm_name || atom == self.net_wm_name
    }

    /// Whether a client message asks for the target window to close
    pub fn is_close_message(&self, message_type: Atom, format: u8, first_word: u32) -> bool {
        if message_type == self.net_close_window {
            return true;
        }
        message_type == self.wm_protocols && format == 32 && first_word == self.wm_delete_window
    }
}
