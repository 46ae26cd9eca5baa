//! In-memory display server for tests
//!
//! Keeps a window tree, answers queries from it and records every request
//! so tests can assert on what the window manager asked for.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use x11rb::errors::ConnectionError;
use x11rb::protocol::xproto::Window;

use crate::shared::Rect;
use crate::wm::display::{DisplayError, DisplayServer, EventInterest, FontMetrics, WindowChanges};

pub const ROOT: Window = 1;
pub const SCREEN_WIDTH: u16 = 1024;
pub const SCREEN_HEIGHT: u16 = 768;
/// Width of every glyph in the fake font
pub const GLYPH_WIDTH: i16 = 6;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(Window),
    Destroy(Window),
    SelectInput(Window, EventInterest),
    SaveSet(Window),
    Reparent { window: Window, parent: Window, x: i16, y: i16 },
    Map(Window),
    Raise(Window),
    Move { window: Window, x: i32, y: i32 },
    Configure { window: Window, changes: WindowChanges },
    Focus(Window),
    Background { window: Window, color: u32 },
    CloseProtocol(Window),
    Grab,
    Ungrab,
    Clear { window: Window, rect: Rect },
    Fill { window: Window, color: u32, rect: Rect },
    Line { window: Window, from: (i16, i16), to: (i16, i16) },
    Text { window: Window, x: i16, y: i16, text: String },
}

#[derive(Debug, Clone)]
pub struct FakeWindow {
    pub rect: Rect,
    pub parent: Window,
    pub border_width: u16,
    pub mapped: bool,
    pub name: Option<String>,
    pub interest: Option<EventInterest>,
    pub close_protocol: bool,
}

#[derive(Default)]
struct FakeState {
    next_id: Window,
    windows: HashMap<Window, FakeWindow>,
    calls: Vec<Call>,
    grabbed: bool,
    refuse_grab: bool,
    unreadable_names: HashSet<Window>,
}

pub struct FakeDisplay {
    state: RefCell<FakeState>,
    font: FontMetrics,
}

impl FakeDisplay {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(FakeState {
                next_id: 0x100,
                ..FakeState::default()
            }),
            font: FontMetrics::monospace(GLYPH_WIDTH, 10),
        }
    }

    /// Create an unmanaged top-level application window
    pub fn spawn_client(&self, width: u32, height: u32, name: Option<&str>) -> Window {
        let mut state = self.state.borrow_mut();
        let window = state.next_id;
        state.next_id += 1;
        state.windows.insert(
            window,
            FakeWindow {
                rect: Rect::new(0, 0, width, height),
                parent: ROOT,
                border_width: 0,
                mapped: false,
                name: name.map(str::to_string),
                interest: None,
                close_protocol: false,
            },
        );
        window
    }

    /// Drop a window without telling anyone, as a racing client would
    pub fn vanish(&self, window: Window) {
        let mut state = self.state.borrow_mut();
        Self::remove_tree(&mut state, window);
    }

    pub fn set_name(&self, window: Window, name: Option<&str>) {
        if let Some(w) = self.state.borrow_mut().windows.get_mut(&window) {
            w.name = name.map(str::to_string);
        }
    }

    /// Make every following pointer grab fail
    pub fn refuse_grab(&self) {
        self.state.borrow_mut().refuse_grab = true;
    }

    /// Make name lookups on `window` fail while the window stays alive
    pub fn break_name(&self, window: Window) {
        self.state.borrow_mut().unreadable_names.insert(window);
    }

    pub fn window(&self, window: Window) -> Option<FakeWindow> {
        self.state.borrow().windows.get(&window).cloned()
    }

    pub fn exists(&self, window: Window) -> bool {
        self.state.borrow().windows.contains_key(&window)
    }

    pub fn is_grabbed(&self) -> bool {
        self.state.borrow().grabbed
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    /// Every string drawn into `window`, in order
    pub fn texts(&self, window: Window) -> Vec<String> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter_map(|call| match call {
                Call::Text { window: w, text, .. } if *w == window => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }

    fn remove_tree(state: &mut FakeState, window: Window) {
        state.windows.remove(&window);
        let children: Vec<Window> = state
            .windows
            .iter()
            .filter(|(_, w)| w.parent == window)
            .map(|(&id, _)| id)
            .collect();
        for child in children {
            Self::remove_tree(state, child);
        }
    }

    fn with_window<T>(
        &self,
        window: Window,
        f: impl FnOnce(&mut FakeWindow) -> T,
    ) -> Result<T, DisplayError> {
        let mut state = self.state.borrow_mut();
        state
            .windows
            .get_mut(&window)
            .map(f)
            .ok_or(DisplayError::NoSuchWindow(window))
    }

    fn check_drawable(&self, window: Window) -> Result<(), DisplayError> {
        if window == ROOT || self.exists(window) {
            Ok(())
        } else {
            Err(DisplayError::NoSuchWindow(window))
        }
    }
}

impl DisplayServer for FakeDisplay {
    fn root(&self) -> Window {
        ROOT
    }

    fn screen_size(&self) -> (u16, u16) {
        (SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    fn font(&self) -> &FontMetrics {
        &self.font
    }

    fn geometry(&self, window: Window) -> Result<Rect, DisplayError> {
        if window == ROOT {
            return Ok(Rect::new(0, 0, u32::from(SCREEN_WIDTH), u32::from(SCREEN_HEIGHT)));
        }
        self.with_window(window, |w| w.rect)
    }

    fn create_window(
        &self,
        parent: Window,
        rect: Rect,
        border_width: u16,
        _border_color: u32,
        _background: u32,
    ) -> Result<Window, DisplayError> {
        self.check_drawable(parent)?;
        let window = {
            let mut state = self.state.borrow_mut();
            let window = state.next_id;
            state.next_id += 1;
            state.windows.insert(
                window,
                FakeWindow {
                    rect,
                    parent,
                    border_width,
                    mapped: false,
                    name: None,
                    interest: None,
                    close_protocol: false,
                },
            );
            window
        };
        self.record(Call::Create(window));
        Ok(window)
    }

    fn destroy(&self, window: Window) -> Result<(), DisplayError> {
        self.record(Call::Destroy(window));
        let mut state = self.state.borrow_mut();
        if !state.windows.contains_key(&window) {
            return Err(DisplayError::NoSuchWindow(window));
        }
        Self::remove_tree(&mut state, window);
        Ok(())
    }

    fn select_input(&self, window: Window, interest: EventInterest) -> Result<(), DisplayError> {
        self.record(Call::SelectInput(window, interest));
        self.with_window(window, |w| w.interest = Some(interest))
    }

    fn add_to_save_set(&self, window: Window) -> Result<(), DisplayError> {
        self.record(Call::SaveSet(window));
        self.with_window(window, |_| ())
    }

    fn reparent(&self, window: Window, parent: Window, x: i16, y: i16) -> Result<(), DisplayError> {
        self.record(Call::Reparent { window, parent, x, y });
        self.check_drawable(parent)?;
        self.with_window(window, |w| {
            w.parent = parent;
            w.rect.x = i32::from(x);
            w.rect.y = i32::from(y);
        })
    }

    fn map(&self, window: Window) -> Result<(), DisplayError> {
        self.record(Call::Map(window));
        self.with_window(window, |w| w.mapped = true)
    }

    fn raise(&self, window: Window) -> Result<(), DisplayError> {
        self.record(Call::Raise(window));
        self.with_window(window, |_| ())
    }

    fn move_to(&self, window: Window, x: i32, y: i32) -> Result<(), DisplayError> {
        self.record(Call::Move { window, x, y });
        self.with_window(window, |w| {
            w.rect.x = x;
            w.rect.y = y;
        })
    }

    fn configure(&self, window: Window, changes: &WindowChanges) -> Result<(), DisplayError> {
        self.record(Call::Configure {
            window,
            changes: changes.clone(),
        });
        self.with_window(window, |w| {
            if let Some(x) = changes.x {
                w.rect.x = x;
            }
            if let Some(y) = changes.y {
                w.rect.y = y;
            }
            if let Some(width) = changes.width {
                w.rect.width = width;
            }
            if let Some(height) = changes.height {
                w.rect.height = height;
            }
        })
    }

    fn set_focus(&self, window: Window) -> Result<(), DisplayError> {
        self.record(Call::Focus(window));
        self.with_window(window, |_| ())
    }

    fn set_background(&self, window: Window, color: u32) -> Result<(), DisplayError> {
        self.record(Call::Background { window, color });
        self.check_drawable(window)
    }

    fn enable_close_protocol(&self, window: Window) -> Result<(), DisplayError> {
        self.record(Call::CloseProtocol(window));
        self.with_window(window, |w| w.close_protocol = true)
    }

    fn fetch_name(&self, window: Window) -> Result<Option<String>, DisplayError> {
        if self.state.borrow().unreadable_names.contains(&window) {
            return Err(ConnectionError::UnknownError.into());
        }
        self.with_window(window, |w| w.name.clone())
    }

    fn grab_pointer(&self) -> Result<(), DisplayError> {
        self.record(Call::Grab);
        let mut state = self.state.borrow_mut();
        if state.refuse_grab {
            return Err(ConnectionError::UnknownError.into());
        }
        state.grabbed = true;
        Ok(())
    }

    fn ungrab_pointer(&self) -> Result<(), DisplayError> {
        self.record(Call::Ungrab);
        self.state.borrow_mut().grabbed = false;
        Ok(())
    }

    fn clear_area(&self, window: Window, rect: Rect) -> Result<(), DisplayError> {
        self.check_drawable(window)?;
        self.record(Call::Clear { window, rect });
        Ok(())
    }

    fn fill_rect(&self, window: Window, color: u32, rect: Rect) -> Result<(), DisplayError> {
        self.check_drawable(window)?;
        self.record(Call::Fill { window, color, rect });
        Ok(())
    }

    fn draw_line(
        &self,
        window: Window,
        _color: u32,
        from: (i16, i16),
        to: (i16, i16),
    ) -> Result<(), DisplayError> {
        self.check_drawable(window)?;
        self.record(Call::Line { window, from, to });
        Ok(())
    }

    fn draw_text(&self, window: Window, _color: u32, x: i16, y: i16, text: &str) -> Result<(), DisplayError> {
        self.check_drawable(window)?;
        self.record(Call::Text {
            window,
            x,
            y,
            text: text.to_string(),
        });
        Ok(())
    }

    fn flush(&self) -> Result<(), DisplayError> {
        Ok(())
    }
}
