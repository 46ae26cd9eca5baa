//! Taskbar (bottom bar) implementation
//!
//! One button per managed client, laid out left to right across the bar.
//! Buttons refer to clients by id only; the registry owns the clients.

use tracing::debug;
use x11rb::protocol::xproto::Window;

use crate::config::TaskbarConfig;
use crate::shared::Rect;
use crate::wm::client::{ClientId, ClientRegistry};
use crate::wm::display::{log_failure, DisplayError, DisplayServer, EventInterest};
use crate::wm::events::DisplayEvent;

const ELLIPSIS: &str = "...";

/// A client's slot in the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskbarButton {
    pub client: ClientId,
    pub rect: Rect,
}

/// Button rectangles for `count` buttons on a bar `bar_width` x `bar_height`.
///
/// Widths depend only on the count, so every button gets the same width.
pub fn layout(count: usize, bar_width: u32, bar_height: u16, config: &TaskbarConfig) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }

    let spacing = i64::from(config.spacing);
    let usable = i64::from(bar_width) - (count as i64 + 1) * spacing;
    let width = (usable / count as i64).clamp(0, i64::from(config.max_button_width)) as u32;
    let height = u32::from(bar_height).saturating_sub(2 * config.margin);

    let mut x = config.spacing as i32;
    (0..count)
        .map(|_| {
            let rect = Rect::new(x, config.margin as i32, width, height);
            x += (width + config.spacing) as i32;
            rect
        })
        .collect()
}

/// Fit `title` into `max_width` pixels as measured by `measure`.
///
/// Titles that fit are returned whole. Otherwise characters are dropped from
/// the end until the rest plus an ellipsis fits, and the last three kept
/// characters are overwritten with the ellipsis. Three or fewer kept
/// characters are left as they are.
pub fn fit_label(title: &str, max_width: u32, measure: impl Fn(&str) -> u32) -> String {
    if measure(title) <= max_width {
        return title.to_string();
    }

    let budget = match max_width.checked_sub(measure(ELLIPSIS)) {
        Some(budget) => budget,
        None => return String::new(),
    };

    let mut label = title.to_string();
    while !label.is_empty() && measure(&label) > budget {
        label.pop();
    }

    let kept = label.chars().count();
    if kept > ELLIPSIS.len() {
        let cut = label
            .char_indices()
            .nth(kept - ELLIPSIS.len())
            .map_or(label.len(), |(index, _)| index);
        label.truncate(cut);
        label.push_str(ELLIPSIS);
    }
    label
}

/// Taskbar state
pub struct Taskbar {
    window: Window,
    width: u32,
    height: u16,
    config: TaskbarConfig,
    buttons: Vec<TaskbarButton>,
    /// Most recently clicked client; only picks the highlight color
    active: Option<ClientId>,
}

impl Taskbar {
    /// Create and map the bar along the bottom edge of the screen
    pub fn create<D: DisplayServer>(display: &D, config: &TaskbarConfig) -> Result<Self, DisplayError> {
        let (screen_width, screen_height) = display.screen_size();
        let rect = Rect::new(
            0,
            i32::from(screen_height) - i32::from(config.height),
            u32::from(screen_width),
            u32::from(config.height),
        );

        let window = display.create_window(display.root(), rect, 0, 0x000000, config.background)?;
        display.select_input(window, EventInterest::PANEL)?;
        display.map(window)?;
        display.raise(window)?;
        debug!("Taskbar window {} at {:?}", window, rect);

        Ok(Self {
            window,
            width: rect.width,
            height: config.height,
            config: config.clone(),
            buttons: Vec::new(),
            active: None,
        })
    }

    pub fn window(&self) -> Window {
        self.window
    }

    pub fn buttons(&self) -> &[TaskbarButton] {
        &self.buttons
    }

    pub fn active(&self) -> Option<ClientId> {
        self.active
    }

    /// Append a button for a newly managed client
    pub fn add<D: DisplayServer>(&mut self, display: &D, clients: &ClientRegistry, client: ClientId) {
        self.buttons.push(TaskbarButton {
            client,
            rect: Rect::default(),
        });
        self.reflow();
        self.draw(display, clients);
    }

    /// Drop the client's button; it must not outlive the client
    pub fn remove<D: DisplayServer>(&mut self, display: &D, clients: &ClientRegistry, client: ClientId) {
        if let Some(index) = self.buttons.iter().position(|b| b.client == client) {
            self.buttons.remove(index);
        }
        if self.active == Some(client) {
            self.active = None;
        }
        self.reflow();
        self.draw(display, clients);
    }

    /// Repaint after a title change
    pub fn redraw_one<D: DisplayServer>(&mut self, display: &D, clients: &ClientRegistry, _client: ClientId) {
        self.reflow();
        self.draw(display, clients);
    }

    /// Activate the first button whose span contains `x`
    pub fn handle_click<D: DisplayServer>(&mut self, display: &D, clients: &ClientRegistry, x: i32) {
        let Some(button) = self.buttons.iter().find(|b| b.rect.contains_x(x)) else {
            return;
        };
        let Some(client) = clients.get(button.client) else {
            return;
        };

        debug!("Taskbar click activates {} ({})", client.window, client.title);
        self.active = Some(button.client);
        log_failure(display.raise(client.frame), "raise from taskbar");
        log_failure(display.set_focus(client.window), "focus from taskbar");
        self.draw(display, clients);
    }

    /// Events addressed to the taskbar window
    pub fn handle_event<D: DisplayServer>(&mut self, display: &D, clients: &ClientRegistry, event: &DisplayEvent) {
        match event {
            DisplayEvent::Expose { .. } => self.draw(display, clients),
            DisplayEvent::ButtonPress { x, .. } => self.handle_click(display, clients, i32::from(*x)),
            _ => {}
        }
    }

    fn reflow(&mut self) {
        let rects = layout(self.buttons.len(), self.width, self.height, &self.config);
        for (button, rect) in self.buttons.iter_mut().zip(rects) {
            button.rect = rect;
        }
    }

    /// Paint the whole bar
    pub fn draw<D: DisplayServer>(&self, display: &D, clients: &ClientRegistry) {
        log_failure(self.try_draw(display, clients), "draw taskbar");
    }

    fn try_draw<D: DisplayServer>(&self, display: &D, clients: &ClientRegistry) -> Result<(), DisplayError> {
        display.fill_rect(
            self.window,
            self.config.background,
            Rect::new(0, 0, self.width, u32::from(self.height)),
        )?;

        let ascent = display.font().ascent;
        for button in &self.buttons {
            let Some(client) = clients.get(button.client) else {
                continue;
            };

            let fill = if self.active == Some(button.client) {
                self.config.active_button
            } else {
                self.config.button
            };
            display.fill_rect(self.window, fill, button.rect)?;

            let available = button.rect.width.saturating_sub(self.config.label_padding);
            let label = fit_label(&client.title, available, |text| display.text_width(text));
            let x = button.rect.x + (self.config.label_padding / 2) as i32;
            let y = button.rect.y + (button.rect.height / 2) as i32 + i32::from(ascent) / 2 - 2;
            display.draw_text(self.window, self.config.text, x as i16, y as i16, &label)?;
        }
        Ok(())
    }
}
