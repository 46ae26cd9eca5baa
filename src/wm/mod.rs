//! Window Manager Module
//!
//! Frames top-level windows, keeps the taskbar in step with the set of
//! managed clients and runs title-bar moves. Events are handled one at a
//! time, to completion, in delivery order.

pub mod client;
pub mod decorations;
pub mod display;
pub mod events;
pub mod ewmh;
pub mod moveresize;
pub mod placement;

#[cfg(test)]
pub mod fake;

use tracing::{debug, info, warn};
use x11rb::protocol::xproto::Window;

use crate::config::{Config, DecorationConfig, WindowColors};
use crate::shell::taskbar::Taskbar;
use crate::wm::client::{ClientId, ClientRegistry};
use crate::wm::decorations::{draw_decoration, FramePart};
use crate::wm::display::{log_failure, DisplayError, DisplayServer, EventInterest, WindowChanges};
use crate::wm::events::DisplayEvent;
use crate::wm::moveresize::DragController;
use crate::wm::placement::center_frame;

pub struct WindowManager {
    clients: ClientRegistry,
    drag: DragController,
    taskbar: Taskbar,
    decorations: DecorationConfig,
    colors: WindowColors,
}

impl WindowManager {
    /// Create the window manager together with its taskbar
    pub fn new<D: DisplayServer>(display: &D, config: &Config) -> Result<Self, DisplayError> {
        let taskbar = Taskbar::create(display, &config.taskbar)?;
        info!("Window manager ready (taskbar window {})", taskbar.window());

        Ok(Self {
            clients: ClientRegistry::new(),
            drag: DragController::new(),
            taskbar,
            decorations: config.decorations.clone(),
            colors: config.colors.clone(),
        })
    }

    pub fn clients(&self) -> &ClientRegistry {
        &self.clients
    }

    pub fn taskbar(&self) -> &Taskbar {
        &self.taskbar
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Handle one event addressed to the window manager core
    pub fn handle_event<D: DisplayServer>(&mut self, display: &D, event: &DisplayEvent) {
        match event {
            DisplayEvent::MapRequest { window } => self.manage_window(display, *window),
            DisplayEvent::ConfigureRequest { window, changes } => self.configure_window(display, *window, changes),
            DisplayEvent::Expose { window } => {
                if let Some(client) = self.clients.find_by_frame(*window) {
                    self.redraw(display, client.id());
                }
            }
            DisplayEvent::NameChanged { window } => self.update_title(display, *window),
            DisplayEvent::Destroy { window } | DisplayEvent::CloseRequest { window } => {
                if let Some(client) = self.clients.find(*window) {
                    let id = client.id();
                    self.unmanage_window(display, id);
                }
            }
            DisplayEvent::ButtonPress { window, x, y, .. } => self.handle_press(display, *window, *x, *y),
            DisplayEvent::Motion { root_x, root_y, .. } => self.drag.motion(display, *root_x, *root_y),
            DisplayEvent::ButtonRelease { .. } => self.drag.end(display),
        }
    }

    /// Handle an event addressed to the taskbar window
    pub fn handle_taskbar_event<D: DisplayServer>(&mut self, display: &D, event: &DisplayEvent) {
        self.taskbar.handle_event(display, &self.clients, event);
    }

    /// Manage a new window (called when MapRequest is received)
    fn manage_window<D: DisplayServer>(&mut self, display: &D, window: Window) {
        if let Some(client) = self.clients.find(window) {
            debug!("Window {} is already managed, mapping it again", window);
            let frame = client.frame;
            log_failure(display.map(window), "map managed window");
            log_failure(display.raise(frame), "raise managed frame");
            return;
        }

        let frame = match self.frame_window(display, window) {
            Ok(frame) => frame,
            Err(e) if e.is_vanished_window() => {
                debug!("Window {} disappeared before it could be managed: {}", window, e);
                return;
            }
            Err(e) => {
                warn!("Failed to manage window {}: {}", window, e);
                return;
            }
        };

        let title = self.fetch_title(display, window);
        info!("Managing window {} in frame {} ({})", window, frame, title);
        let id = self.clients.insert(frame, window, title);
        self.redraw(display, id);
        self.taskbar.add(display, &self.clients, id);
    }

    /// Create a centered frame and move `window` into it.
    ///
    /// On failure nothing is left behind: the window goes back to the root
    /// and the frame is destroyed.
    fn frame_window<D: DisplayServer>(&self, display: &D, window: Window) -> Result<Window, DisplayError> {
        let geometry = display.geometry(window)?;
        let (screen_width, screen_height) = display.screen_size();
        let rect = center_frame(
            screen_width,
            screen_height,
            geometry.width,
            geometry.height,
            self.decorations.title_bar_height,
        );

        let frame = display.create_window(
            display.root(),
            rect,
            self.decorations.border_width,
            self.colors.border,
            self.colors.title_bar,
        )?;
        debug!("Created frame {} at {:?} for window {}", frame, rect, window);

        if let Err(e) = self.attach(display, frame, window) {
            log_failure(
                display.reparent(window, display.root(), geometry.x as i16, geometry.y as i16),
                "return window to root",
            );
            log_failure(display.destroy(frame), "destroy partial frame");
            return Err(e);
        }
        Ok(frame)
    }

    fn attach<D: DisplayServer>(&self, display: &D, frame: Window, window: Window) -> Result<(), DisplayError> {
        display.select_input(frame, EventInterest::FRAME)?;
        display.select_input(window, EventInterest::CLIENT)?;
        display.add_to_save_set(window)?;
        display.reparent(window, frame, 0, self.decorations.title_bar_height as i16)?;
        display.map(frame)?;
        display.map(window)?;
        display.raise(frame)?;
        display.enable_close_protocol(window)?;
        Ok(())
    }

    /// The window's advertised name, or the placeholder
    fn fetch_title<D: DisplayServer>(&self, display: &D, window: Window) -> String {
        match display.fetch_name(window) {
            Ok(Some(name)) if !name.is_empty() => name,
            Ok(_) => self.decorations.placeholder_title.clone(),
            Err(e) => {
                debug!("Failed to fetch title of window {}: {}", window, e);
                self.decorations.placeholder_title.clone()
            }
        }
    }

    /// Forward a configure request unchanged
    fn configure_window<D: DisplayServer>(&self, display: &D, window: Window, changes: &WindowChanges) {
        debug!("Configure request for window {}: {:?}", window, changes);
        log_failure(display.configure(window, changes), "configure request");
    }

    fn update_title<D: DisplayServer>(&mut self, display: &D, window: Window) {
        let Some(id) = self.clients.find_by_window(window).map(|c| c.id()) else {
            return;
        };

        let title = self.fetch_title(display, window);
        debug!("Window {} renamed to {}", window, title);
        self.clients.set_title(id, title);
        self.redraw(display, id);
        self.taskbar.redraw_one(display, &self.clients, id);
    }

    fn handle_press<D: DisplayServer>(&mut self, display: &D, window: Window, x: i16, y: i16) {
        let Some(id) = self.clients.find_by_frame(window).map(|c| c.id()) else {
            return;
        };
        let Some(geometry) = log_failure(display.geometry(window), "query frame geometry") else {
            return;
        };

        match FramePart::hit_test(geometry.width, i32::from(x), i32::from(y), &self.decorations) {
            FramePart::CloseButton => {
                info!("Close button pressed on frame {}", window);
                self.unmanage_window(display, id);
            }
            FramePart::TitleBar => self.drag.begin(display, window, x, y),
            FramePart::ClientArea => {}
        }
    }

    /// Stop managing a client; the taskbar lets go before the record does
    fn unmanage_window<D: DisplayServer>(&mut self, display: &D, id: ClientId) {
        self.drag.cancel_for(display, id.frame());
        self.taskbar.remove(display, &self.clients, id);
        if let Some(client) = self.clients.remove(display, id) {
            info!("Unmanaged window {} ({})", client.window, client.title);
        }
    }

    fn redraw<D: DisplayServer>(&self, display: &D, id: ClientId) {
        if let Some(client) = self.clients.get(id) {
            log_failure(
                draw_decoration(display, client.frame, &client.title, &self.decorations, &self.colors),
                "draw decoration",
            );
        }
    }
}
