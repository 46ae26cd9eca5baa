//! Client registry
//!
//! Owns every managed window. Records are keyed by their frame; the
//! application window resolves through a secondary index so both handles
//! find the same record.

use std::collections::HashMap;

use tracing::debug;
use x11rb::protocol::xproto::Window;

use crate::wm::display::{log_failure, DisplayServer};

/// Stable handle to a managed client: its frame window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(Window);

impl ClientId {
    pub fn frame(self) -> Window {
        self.0
    }
}

/// Window Manager client state
/// Represents a window being managed by the WM
#[derive(Debug)]
pub struct Client {
    /// Decorated container window created by the WM
    pub frame: Window,

    /// The application's own window, reparented into `frame`
    pub window: Window,

    /// Window title
    pub title: String,
}

impl Client {
    pub fn id(&self) -> ClientId {
        ClientId(self.frame)
    }
}

/// All managed clients, in insertion order
#[derive(Debug, Default)]
pub struct ClientRegistry {
    clients: HashMap<Window, Client>,
    by_window: HashMap<Window, Window>,
    order: Vec<Window>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a freshly framed window. Neither handle may already be managed.
    pub fn insert(&mut self, frame: Window, window: Window, title: String) -> ClientId {
        debug_assert!(!self.clients.contains_key(&frame), "frame {} already managed", frame);
        debug_assert!(!self.by_window.contains_key(&window), "window {} already managed", window);

        self.clients.insert(frame, Client { frame, window, title });
        self.by_window.insert(window, frame);
        self.order.push(frame);
        ClientId(frame)
    }

    pub fn get(&self, id: ClientId) -> Option<&Client> {
        self.clients.get(&id.0)
    }

    pub fn find_by_frame(&self, frame: Window) -> Option<&Client> {
        self.clients.get(&frame)
    }

    pub fn find_by_window(&self, window: Window) -> Option<&Client> {
        self.by_window.get(&window).and_then(|frame| self.clients.get(frame))
    }

    /// Resolve either handle, application window first
    pub fn find(&self, window: Window) -> Option<&Client> {
        self.find_by_window(window).or_else(|| self.find_by_frame(window))
    }

    /// Replace a client's title; returns false when the client is gone
    pub fn set_title(&mut self, id: ClientId, title: String) -> bool {
        match self.clients.get_mut(&id.0) {
            Some(client) => {
                client.title = title;
                true
            }
            None => false,
        }
    }

    /// Unlink a client and destroy its frame.
    ///
    /// Removing an id that is no longer registered does nothing, so a
    /// duplicate close for the same window is harmless.
    pub fn remove<D: DisplayServer>(&mut self, display: &D, id: ClientId) -> Option<Client> {
        let client = self.clients.remove(&id.0)?;
        self.by_window.remove(&client.window);
        self.order.retain(|&frame| frame != id.0);

        log_failure(display.destroy(client.frame), "destroy frame");
        debug!("Removed client {} (frame {})", client.window, client.frame);
        Some(client)
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Clients in the order they were managed
    pub fn iter(&self) -> impl Iterator<Item = &Client> {
        self.order.iter().filter_map(|frame| self.clients.get(frame))
    }
}
