//! Start menu overlay
//!
//! A fixed list of commands sitting just above the taskbar in the bottom
//! left corner. Clicking an entry launches it; the menu never touches the
//! client registry.

use tracing::{debug, info};
use x11rb::protocol::xproto::Window;

use crate::config::MenuConfig;
use crate::shared::Rect;
use crate::shell::launch::Launcher;
use crate::wm::display::{log_failure, DisplayError, DisplayServer, EventInterest};
use crate::wm::events::DisplayEvent;

pub struct StartMenu {
    window: Window,
    config: MenuConfig,
}

impl StartMenu {
    /// Create and map the menu above a taskbar `taskbar_height` pixels tall
    pub fn create<D: DisplayServer>(display: &D, config: &MenuConfig, taskbar_height: u16) -> Result<Self, DisplayError> {
        let (_, screen_height) = display.screen_size();
        let rect = Rect::new(
            0,
            i32::from(screen_height) - i32::from(config.height) - i32::from(taskbar_height),
            u32::from(config.width),
            u32::from(config.height),
        );

        let window = display.create_window(display.root(), rect, 1, config.border, config.background)?;
        display.select_input(window, EventInterest::PANEL)?;
        display.map(window)?;
        display.raise(window)?;
        debug!("Start menu window {} at {:?}", window, rect);

        Ok(Self {
            window,
            config: config.clone(),
        })
    }

    pub fn window(&self) -> Window {
        self.window
    }

    /// Index of the entry under menu-relative `y`
    pub fn item_at(&self, y: i32) -> Option<usize> {
        let padding = i32::from(self.config.padding);
        let item_height = i32::from(self.config.item_height);
        if y < padding || item_height == 0 {
            return None;
        }
        let index = ((y - padding) / item_height) as usize;
        (index < self.config.items.len()).then_some(index)
    }

    pub fn draw<D: DisplayServer>(&self, display: &D) {
        log_failure(self.try_draw(display), "draw start menu");
    }

    fn try_draw<D: DisplayServer>(&self, display: &D) -> Result<(), DisplayError> {
        display.fill_rect(
            self.window,
            self.config.background,
            Rect::new(0, 0, u32::from(self.config.width), u32::from(self.config.height)),
        )?;

        let x = self.config.padding as i16;
        for (i, item) in self.config.items.iter().enumerate() {
            let y = self.config.padding as i32 + (i as i32 + 1) * i32::from(self.config.item_height);
            display.draw_text(self.window, self.config.text, x, y as i16, item)?;
        }
        Ok(())
    }

    /// Events addressed to the menu window
    pub fn handle_event<D: DisplayServer>(&self, display: &D, event: &DisplayEvent, launcher: &dyn Launcher) {
        match event {
            DisplayEvent::Expose { .. } => self.draw(display),
            DisplayEvent::ButtonPress { y, .. } => {
                if let Some(index) = self.item_at(i32::from(*y)) {
                    let command = &self.config.items[index];
                    info!("Start menu: launching {}", command);
                    launcher.launch(command);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::launch::testing::RecordingLauncher;
    use crate::wm::fake::{FakeDisplay, SCREEN_HEIGHT};

    fn menu(display: &FakeDisplay) -> StartMenu {
        StartMenu::create(display, &MenuConfig::default(), 28).unwrap()
    }

    fn press(window: Window, y: i16) -> DisplayEvent {
        DisplayEvent::ButtonPress { window, x: 20, y, root_x: 20, root_y: 0 }
    }

    #[test]
    fn test_sits_above_taskbar() {
        let display = FakeDisplay::new();
        let menu = menu(&display);
        let state = display.window(menu.window()).unwrap();
        assert_eq!(state.rect, Rect::new(0, i32::from(SCREEN_HEIGHT) - 120 - 28, 200, 120));
        assert!(state.mapped);
    }

    #[test]
    fn test_item_at() {
        let display = FakeDisplay::new();
        let menu = menu(&display);
        assert_eq!(menu.item_at(0), None);
        assert_eq!(menu.item_at(4), None);
        assert_eq!(menu.item_at(5), Some(0));
        assert_eq!(menu.item_at(34), Some(0));
        assert_eq!(menu.item_at(35), Some(1));
        assert_eq!(menu.item_at(64), Some(1));
        assert_eq!(menu.item_at(65), None);
    }

    #[test]
    fn test_click_launches_entry() {
        let display = FakeDisplay::new();
        let menu = menu(&display);
        let launcher = RecordingLauncher::default();

        menu.handle_event(&display, &press(menu.window(), 40), &launcher);
        menu.handle_event(&display, &press(menu.window(), 100), &launcher);
        menu.handle_event(&display, &press(menu.window(), 10), &launcher);

        assert_eq!(launcher.launched(), vec!["eyes".to_string(), "xterm".to_string()]);
    }

    #[test]
    fn test_expose_draws_items() {
        let display = FakeDisplay::new();
        let menu = menu(&display);
        display.clear_calls();

        menu.handle_event(&display, &DisplayEvent::Expose { window: menu.window() }, &RecordingLauncher::default());
        assert_eq!(display.texts(menu.window()), vec!["xterm".to_string(), "eyes".to_string()]);
    }
}
