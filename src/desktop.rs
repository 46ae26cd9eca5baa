//! Top-level event routing
//!
//! Ties the window manager core to the start menu and the launcher and
//! decides which of them sees each event.

use anyhow::{Context, Result};

use crate::config::Config;
use crate::shell::background::set_background;
use crate::shell::{Launcher, StartMenu};
use crate::wm::display::{log_failure, DisplayServer};
use crate::wm::events::DisplayEvent;
use crate::wm::WindowManager;

pub struct Desktop<L: Launcher> {
    wm: WindowManager,
    menu: StartMenu,
    launcher: L,
}

impl<L: Launcher> Desktop<L> {
    /// Paint the background and create the taskbar and start menu
    pub fn new<D: DisplayServer>(display: &D, config: &Config, launcher: L) -> Result<Self> {
        log_failure(set_background(display, config.colors.background), "set background");

        let wm = WindowManager::new(display, config).context("Failed to create taskbar")?;
        let menu = StartMenu::create(display, &config.menu, config.taskbar.height)
            .context("Failed to create start menu")?;
        menu.draw(display);

        Ok(Self { wm, menu, launcher })
    }

    pub fn wm(&self) -> &WindowManager {
        &self.wm
    }

    pub fn menu(&self) -> &StartMenu {
        &self.menu
    }

    /// Launch every autostart command once
    pub fn autostart(&self, commands: &[String]) {
        for command in commands {
            self.launcher.launch(command);
        }
    }

    /// Route one event.
    ///
    /// While a move is in progress the pointer is grabbed and its motion and
    /// release belong to the core whatever window they name. Otherwise the
    /// taskbar and menu get the events for their own windows and the core
    /// gets the rest.
    pub fn dispatch<D: DisplayServer>(&mut self, display: &D, event: &DisplayEvent) {
        if self.wm.is_dragging() && event.is_grab_event() {
            self.wm.handle_event(display, event);
            return;
        }

        let window = event.window();
        if window == self.wm.taskbar().window() {
            self.wm.handle_taskbar_event(display, event);
        } else if window == self.menu.window() {
            self.menu.handle_event(display, event, &self.launcher);
        } else {
            self.wm.handle_event(display, event);
        }
    }
}
