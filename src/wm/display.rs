//! Display Module
//!
//! The boundary between the window manager and the display server. The core
//! only ever talks to a [`DisplayServer`]; [`X11Display`] implements it on
//! top of an x11rb connection and translates protocol events into
//! [`DisplayEvent`]s.

use std::sync::Arc;

use anyhow::{Context, Result};
use bitflags::bitflags;
use thiserror::Error;
use tracing::{debug, info, warn};
use x11rb::connection::Connection;
use x11rb::errors::{ConnectionError, ReplyError, ReplyOrIdError};
use x11rb::protocol::xproto::*;
use x11rb::protocol::{ErrorKind, Event};
use x11rb::rust_connection::RustConnection;
use x11rb::wrapper::ConnectionExt as _;
use x11rb::x11_utils::X11Error;

use crate::shared::Rect;
use crate::wm::events::DisplayEvent;
use crate::wm::ewmh::Atoms;

/// Longest property read when fetching a title, in 32-bit units
const NAME_LENGTH_LIMIT: u32 = 1024;

/// Failure of a single display-server request
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("X11 connection error: {0}")]
    Connection(#[from] ConnectionError),
    #[error("X11 request failed: {0}")]
    Reply(#[from] ReplyError),
    #[error("X11 request failed: {0}")]
    ReplyOrId(#[from] ReplyOrIdError),
    #[error("window 0x{0:x} does not exist")]
    NoSuchWindow(Window),
}

impl DisplayError {
    /// True when the request failed because its window is already gone.
    pub fn is_vanished_window(&self) -> bool {
        match self {
            Self::NoSuchWindow(_) => true,
            Self::Reply(ReplyError::X11Error(e)) | Self::ReplyOrId(ReplyOrIdError::X11Error(e)) => {
                is_vanished_window_error(e)
            }
            _ => false,
        }
    }
}

fn is_vanished_window_error(error: &X11Error) -> bool {
    matches!(error.error_kind, ErrorKind::Window | ErrorKind::Drawable)
}

/// Log a failed boundary call and carry on.
///
/// Windows routinely disappear between event generation and processing, so
/// those failures are only worth a debug line.
pub fn log_failure<T>(result: Result<T, DisplayError>, operation: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) if e.is_vanished_window() => {
            debug!("Ignoring error in {} (window vanished): {}", operation, e);
            None
        }
        Err(e) => {
            warn!("Warning in {}: {}", operation, e);
            None
        }
    }
}

bitflags! {
    /// Input a window is subscribed to
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EventInterest: u32 {
        const BUTTON_PRESS = 1 << 0;
        const BUTTON_RELEASE = 1 << 1;
        const BUTTON_MOTION = 1 << 2;
        const EXPOSURE = 1 << 3;
        /// Substructure redirect and notify
        const SUBSTRUCTURE = 1 << 4;
        const PROPERTY_CHANGE = 1 << 5;

        /// Decorated frame around an application window
        const FRAME = Self::BUTTON_PRESS.bits()
            | Self::BUTTON_RELEASE.bits()
            | Self::BUTTON_MOTION.bits()
            | Self::EXPOSURE.bits()
            | Self::SUBSTRUCTURE.bits();
        /// Reparented application window (title tracking)
        const CLIENT = Self::PROPERTY_CHANGE.bits();
        /// Taskbar and start menu
        const PANEL = Self::EXPOSURE.bits() | Self::BUTTON_PRESS.bits();
    }
}

impl EventInterest {
    fn event_mask(self) -> EventMask {
        let mut mask = EventMask::NO_EVENT;
        if self.contains(Self::BUTTON_PRESS) {
            mask = mask | EventMask::BUTTON_PRESS;
        }
        if self.contains(Self::BUTTON_RELEASE) {
            mask = mask | EventMask::BUTTON_RELEASE;
        }
        if self.contains(Self::BUTTON_MOTION) {
            mask = mask | EventMask::BUTTON_MOTION;
        }
        if self.contains(Self::EXPOSURE) {
            mask = mask | EventMask::EXPOSURE;
        }
        if self.contains(Self::SUBSTRUCTURE) {
            mask = mask | EventMask::SUBSTRUCTURE_REDIRECT | EventMask::SUBSTRUCTURE_NOTIFY;
        }
        if self.contains(Self::PROPERTY_CHANGE) {
            mask = mask | EventMask::PROPERTY_CHANGE;
        }
        mask
    }
}

/// Fields of a configure request; `None` means "not in the value mask"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowChanges {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub border_width: Option<u32>,
    pub sibling: Option<Window>,
    pub stack_mode: Option<StackMode>,
}

impl WindowChanges {
    /// Keep exactly the fields named by the request's value mask
    pub fn from_request(e: &ConfigureRequestEvent) -> Self {
        let mask = u16::from(e.value_mask);
        let has = |flag: ConfigWindow| mask & u16::from(flag) != 0;

        Self {
            x: has(ConfigWindow::X).then_some(i32::from(e.x)),
            y: has(ConfigWindow::Y).then_some(i32::from(e.y)),
            width: has(ConfigWindow::WIDTH).then_some(u32::from(e.width)),
            height: has(ConfigWindow::HEIGHT).then_some(u32::from(e.height)),
            border_width: has(ConfigWindow::BORDER_WIDTH).then_some(u32::from(e.border_width)),
            sibling: has(ConfigWindow::SIBLING).then_some(e.sibling),
            stack_mode: has(ConfigWindow::STACK_MODE).then_some(e.stack_mode),
        }
    }

    fn to_aux(&self) -> ConfigureWindowAux {
        ConfigureWindowAux::new()
            .x(self.x)
            .y(self.y)
            .width(self.width)
            .height(self.height)
            .border_width(self.border_width)
            .sibling(self.sibling)
            .stack_mode(self.stack_mode)
    }
}

/// Per-character advance widths of the core font
#[derive(Debug, Clone)]
pub struct FontMetrics {
    pub ascent: i16,
    first_char: u16,
    widths: Vec<i16>,
    default_width: i16,
}

impl FontMetrics {
    /// Monospaced metrics, every character `width` pixels wide
    pub fn monospace(width: i16, ascent: i16) -> Self {
        Self {
            ascent,
            first_char: 0,
            widths: Vec::new(),
            default_width: width,
        }
    }

    pub fn from_reply(reply: &QueryFontReply) -> Self {
        Self {
            ascent: reply.font_ascent,
            first_char: reply.min_char_or_byte2,
            widths: reply.char_infos.iter().map(|info| info.character_width).collect(),
            default_width: reply.max_bounds.character_width,
        }
    }

    /// Rendered width of `text` in pixels
    pub fn text_width(&self, text: &str) -> u32 {
        let total: i64 = encode_latin1(text)
            .into_iter()
            .map(|byte| {
                let width = u16::from(byte)
                    .checked_sub(self.first_char)
                    .and_then(|index| self.widths.get(usize::from(index)).copied())
                    .unwrap_or(self.default_width);
                i64::from(width)
            })
            .sum();
        total.max(0) as u32
    }
}

/// Core fonts are 8-bit; anything outside Latin-1 is drawn as '?'
pub fn encode_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Encode text as PolyText8 items (length, delta, up to 254 bytes each)
pub fn text_items(text: &[u8]) -> Vec<u8> {
    let mut items = Vec::with_capacity(text.len() + 2 * (text.len() / 254 + 1));
    for chunk in text.chunks(254) {
        items.push(chunk.len() as u8);
        items.push(0);
        items.extend_from_slice(chunk);
    }
    items
}

/// Everything the window manager needs from a display server.
///
/// Requests take `&self` like an X connection does; callers decide which
/// failures matter (see [`log_failure`]).
pub trait DisplayServer {
    fn root(&self) -> Window;
    fn screen_size(&self) -> (u16, u16);
    fn font(&self) -> &FontMetrics;

    fn text_width(&self, text: &str) -> u32 {
        self.font().text_width(text)
    }

    /// Current geometry of a window, excluding its border
    fn geometry(&self, window: Window) -> Result<Rect, DisplayError>;
    fn create_window(
        &self,
        parent: Window,
        rect: Rect,
        border_width: u16,
        border_color: u32,
        background: u32,
    ) -> Result<Window, DisplayError>;
    fn destroy(&self, window: Window) -> Result<(), DisplayError>;
    fn select_input(&self, window: Window, interest: EventInterest) -> Result<(), DisplayError>;
    fn add_to_save_set(&self, window: Window) -> Result<(), DisplayError>;
    fn reparent(&self, window: Window, parent: Window, x: i16, y: i16) -> Result<(), DisplayError>;
    fn map(&self, window: Window) -> Result<(), DisplayError>;
    fn raise(&self, window: Window) -> Result<(), DisplayError>;
    fn move_to(&self, window: Window, x: i32, y: i32) -> Result<(), DisplayError>;
    fn configure(&self, window: Window, changes: &WindowChanges) -> Result<(), DisplayError>;
    fn set_focus(&self, window: Window) -> Result<(), DisplayError>;
    fn set_background(&self, window: Window, color: u32) -> Result<(), DisplayError>;

    /// Advertise `WM_DELETE_WINDOW` in the window's `WM_PROTOCOLS`
    fn enable_close_protocol(&self, window: Window) -> Result<(), DisplayError>;
    /// The window's advertised name, `None` when it has none
    fn fetch_name(&self, window: Window) -> Result<Option<String>, DisplayError>;

    /// Exclusive grab of pointer motion and release on the root window
    fn grab_pointer(&self) -> Result<(), DisplayError>;
    fn ungrab_pointer(&self) -> Result<(), DisplayError>;

    /// Clear to the window background; zero width or height extends to the edge
    fn clear_area(&self, window: Window, rect: Rect) -> Result<(), DisplayError>;
    fn fill_rect(&self, window: Window, color: u32, rect: Rect) -> Result<(), DisplayError>;
    fn draw_line(
        &self,
        window: Window,
        color: u32,
        from: (i16, i16),
        to: (i16, i16),
    ) -> Result<(), DisplayError>;
    fn draw_text(&self, window: Window, color: u32, x: i16, y: i16, text: &str) -> Result<(), DisplayError>;

    fn flush(&self) -> Result<(), DisplayError>;
}

/// [`DisplayServer`] backed by an x11rb connection
pub struct X11Display {
    conn: Arc<RustConnection>,
    screen_num: usize,
    root: Window,
    atoms: Atoms,
    font_id: Font,
    metrics: FontMetrics,
}

impl X11Display {
    /// Wrap a connection, interning atoms and loading `font_name` (or "fixed")
    pub fn new(conn: Arc<RustConnection>, screen_num: usize, font_name: &str) -> Result<Self> {
        let root = conn.setup().roots[screen_num].root;
        let atoms = Atoms::new(conn.as_ref())?;

        let font_id = conn.generate_id()?;
        let opened = conn.open_font(font_id, font_name.as_bytes())?.check();
        if let Err(e) = opened {
            warn!("Failed to open font '{}': {}, falling back to 'fixed'", font_name, e);
            conn.open_font(font_id, b"fixed")?
                .check()
                .context("Failed to open fallback font 'fixed'")?;
        }
        let reply = conn
            .query_font(font_id)?
            .reply()
            .context("Failed to query font metrics")?;
        let metrics = FontMetrics::from_reply(&reply);
        debug!("Font loaded: ascent={}, {} glyph widths", metrics.ascent, reply.char_infos.len());

        Ok(Self {
            conn,
            screen_num,
            root,
            atoms,
            font_id,
            metrics,
        })
    }

    /// Take over window management on the root window
    pub fn become_wm(&self) -> Result<()> {
        self.conn
            .change_window_attributes(
                self.root,
                &ChangeWindowAttributesAux::new()
                    .event_mask(EventMask::SUBSTRUCTURE_REDIRECT | EventMask::SUBSTRUCTURE_NOTIFY),
            )?
            .check()
            .context("Failed to select events on root window - is another WM running?")?;
        self.conn.flush()?;
        info!("Successfully became window manager");
        Ok(())
    }

    /// Map a protocol event to what the core understands; `None` for the rest
    pub fn translate(&self, event: &Event) -> Option<DisplayEvent> {
        match event {
            Event::MapRequest(e) => Some(DisplayEvent::MapRequest { window: e.window }),
            Event::ConfigureRequest(e) => Some(DisplayEvent::ConfigureRequest {
                window: e.window,
                changes: WindowChanges::from_request(e),
            }),
            Event::Expose(e) => Some(DisplayEvent::Expose { window: e.window }),
            Event::PropertyNotify(e) if self.atoms.is_name_atom(e.atom) => {
                Some(DisplayEvent::NameChanged { window: e.window })
            }
            Event::DestroyNotify(e) => Some(DisplayEvent::Destroy { window: e.window }),
            Event::ClientMessage(e) => {
                let first_word = e.data.as_data32()[0];
                if self.atoms.is_close_message(e.type_, e.format, first_word) {
                    Some(DisplayEvent::CloseRequest { window: e.window })
                } else {
                    debug!("ClientMessage: window {}, type {} ignored", e.window, e.type_);
                    None
                }
            }
            Event::ButtonPress(e) => Some(DisplayEvent::ButtonPress {
                window: e.event,
                x: e.event_x,
                y: e.event_y,
                root_x: e.root_x,
                root_y: e.root_y,
            }),
            Event::MotionNotify(e) => Some(DisplayEvent::Motion {
                window: e.event,
                root_x: e.root_x,
                root_y: e.root_y,
            }),
            Event::ButtonRelease(e) => Some(DisplayEvent::ButtonRelease { window: e.event }),
            Event::Error(e) if is_vanished_window_error(e) => {
                debug!(
                    "X11 error on vanished window: error_code={}, request_code={}",
                    e.error_code, e.major_opcode
                );
                None
            }
            Event::Error(e) => {
                warn!(
                    "X11 Error: error_code={}, request_code={}, minor_code={}",
                    e.error_code, e.major_opcode, e.minor_opcode
                );
                None
            }
            _ => None,
        }
    }

    fn screen(&self) -> &Screen {
        &self.conn.setup().roots[self.screen_num]
    }

    /// Run `draw` with a throwaway GC in `color`, like a one-shot Xlib GC
    fn with_gc(
        &self,
        window: Window,
        color: u32,
        draw: impl FnOnce(Gcontext) -> Result<(), DisplayError>,
    ) -> Result<(), DisplayError> {
        let gc = self.conn.generate_id()?;
        self.conn.create_gc(
            gc,
            window,
            &CreateGCAux::new().foreground(color).font(self.font_id),
        )?;
        let result = draw(gc);
        self.conn.free_gc(gc)?;
        result
    }

    fn decode_name(&self, reply: &GetPropertyReply) -> Option<String> {
        let value = reply.value.split(|&b| b == 0).next().unwrap_or_default();
        if value.is_empty() {
            return None;
        }
        if reply.type_ == u32::from(AtomEnum::STRING) {
            Some(decode_latin1(value))
        } else {
            Some(String::from_utf8_lossy(value).into_owned())
        }
    }
}

impl DisplayServer for X11Display {
    fn root(&self) -> Window {
        self.root
    }

    fn screen_size(&self) -> (u16, u16) {
        let screen = self.screen();
        (screen.width_in_pixels, screen.height_in_pixels)
    }

    fn font(&self) -> &FontMetrics {
        &self.metrics
    }

    fn geometry(&self, window: Window) -> Result<Rect, DisplayError> {
        let geom = self.conn.get_geometry(window)?.reply()?;
        Ok(Rect::new(
            i32::from(geom.x),
            i32::from(geom.y),
            u32::from(geom.width),
            u32::from(geom.height),
        ))
    }

    fn create_window(
        &self,
        parent: Window,
        rect: Rect,
        border_width: u16,
        border_color: u32,
        background: u32,
    ) -> Result<Window, DisplayError> {
        let window = self.conn.generate_id()?;
        self.conn.create_window(
            x11rb::COPY_DEPTH_FROM_PARENT,
            window,
            parent,
            rect.x as i16,
            rect.y as i16,
            rect.width.clamp(1, u32::from(u16::MAX)) as u16,
            rect.height.clamp(1, u32::from(u16::MAX)) as u16,
            border_width,
            WindowClass::INPUT_OUTPUT,
            x11rb::COPY_FROM_PARENT,
            &CreateWindowAux::new()
                .background_pixel(background)
                .border_pixel(border_color),
        )?;
        Ok(window)
    }

    fn destroy(&self, window: Window) -> Result<(), DisplayError> {
        self.conn.destroy_window(window)?;
        Ok(())
    }

    fn select_input(&self, window: Window, interest: EventInterest) -> Result<(), DisplayError> {
        self.conn.change_window_attributes(
            window,
            &ChangeWindowAttributesAux::new().event_mask(interest.event_mask()),
        )?;
        Ok(())
    }

    fn add_to_save_set(&self, window: Window) -> Result<(), DisplayError> {
        self.conn.change_save_set(SetMode::INSERT, window)?;
        Ok(())
    }

    fn reparent(&self, window: Window, parent: Window, x: i16, y: i16) -> Result<(), DisplayError> {
        self.conn.reparent_window(window, parent, x, y)?;
        Ok(())
    }

    fn map(&self, window: Window) -> Result<(), DisplayError> {
        self.conn.map_window(window)?;
        Ok(())
    }

    fn raise(&self, window: Window) -> Result<(), DisplayError> {
        self.conn.configure_window(
            window,
            &ConfigureWindowAux::new().stack_mode(StackMode::ABOVE),
        )?;
        Ok(())
    }

    fn move_to(&self, window: Window, x: i32, y: i32) -> Result<(), DisplayError> {
        self.conn
            .configure_window(window, &ConfigureWindowAux::new().x(x).y(y))?;
        Ok(())
    }

    fn configure(&self, window: Window, changes: &WindowChanges) -> Result<(), DisplayError> {
        self.conn.configure_window(window, &changes.to_aux())?;
        Ok(())
    }

    fn set_focus(&self, window: Window) -> Result<(), DisplayError> {
        self.conn
            .set_input_focus(InputFocus::POINTER_ROOT, window, x11rb::CURRENT_TIME)?;
        Ok(())
    }

    fn set_background(&self, window: Window, color: u32) -> Result<(), DisplayError> {
        self.conn.change_window_attributes(
            window,
            &ChangeWindowAttributesAux::new().background_pixel(color),
        )?;
        self.conn.clear_area(false, window, 0, 0, 0, 0)?;
        Ok(())
    }

    fn enable_close_protocol(&self, window: Window) -> Result<(), DisplayError> {
        self.conn.change_property32(
            PropMode::REPLACE,
            window,
            self.atoms.wm_protocols,
            AtomEnum::ATOM,
            &[self.atoms.wm_delete_window],
        )?;
        Ok(())
    }

    fn fetch_name(&self, window: Window) -> Result<Option<String>, DisplayError> {
        let net_name = self
            .conn
            .get_property(
                false,
                window,
                self.atoms.net_wm_name,
                self.atoms.utf8_string,
                0,
                NAME_LENGTH_LIMIT,
            )?
            .reply()?;
        if let Some(name) = self.decode_name(&net_name) {
            return Ok(Some(name));
        }

        let wm_name = self
            .conn
            .get_property(
                false,
                window,
                AtomEnum::WM_NAME,
                AtomEnum::ANY,
                0,
                NAME_LENGTH_LIMIT,
            )?
            .reply()?;
        Ok(self.decode_name(&wm_name))
    }

    fn grab_pointer(&self) -> Result<(), DisplayError> {
        let reply = self
            .conn
            .grab_pointer(
                true,
                self.root,
                EventMask::BUTTON_MOTION | EventMask::BUTTON_RELEASE,
                GrabMode::ASYNC,
                GrabMode::ASYNC,
                x11rb::NONE,
                x11rb::NONE,
                x11rb::CURRENT_TIME,
            )?
            .reply()?;
        if reply.status != GrabStatus::SUCCESS {
            warn!("Pointer grab not granted: {:?}", reply.status);
        }
        Ok(())
    }

    fn ungrab_pointer(&self) -> Result<(), DisplayError> {
        self.conn.ungrab_pointer(x11rb::CURRENT_TIME)?;
        Ok(())
    }

    fn clear_area(&self, window: Window, rect: Rect) -> Result<(), DisplayError> {
        self.conn.clear_area(
            false,
            window,
            rect.x as i16,
            rect.y as i16,
            rect.width.min(u32::from(u16::MAX)) as u16,
            rect.height.min(u32::from(u16::MAX)) as u16,
        )?;
        Ok(())
    }

    fn fill_rect(&self, window: Window, color: u32, rect: Rect) -> Result<(), DisplayError> {
        self.with_gc(window, color, |gc| {
            self.conn.poly_fill_rectangle(
                window,
                gc,
                &[Rectangle {
                    x: rect.x as i16,
                    y: rect.y as i16,
                    width: rect.width.min(u32::from(u16::MAX)) as u16,
                    height: rect.height.min(u32::from(u16::MAX)) as u16,
                }],
            )?;
            Ok(())
        })
    }

    fn draw_line(
        &self,
        window: Window,
        color: u32,
        from: (i16, i16),
        to: (i16, i16),
    ) -> Result<(), DisplayError> {
        self.with_gc(window, color, |gc| {
            self.conn.poly_line(
                CoordMode::ORIGIN,
                window,
                gc,
                &[Point { x: from.0, y: from.1 }, Point { x: to.0, y: to.1 }],
            )?;
            Ok(())
        })
    }

    fn draw_text(&self, window: Window, color: u32, x: i16, y: i16, text: &str) -> Result<(), DisplayError> {
        if text.is_empty() {
            return Ok(());
        }
        let items = text_items(&encode_latin1(text));
        self.with_gc(window, color, |gc| {
            self.conn.poly_text8(window, gc, x, y, &items)?;
            Ok(())
        })
    }

    fn flush(&self) -> Result<(), DisplayError> {
        self.conn.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_width() {
        let font = FontMetrics::monospace(6, 10);
        assert_eq!(font.text_width(""), 0);
        assert_eq!(font.text_width("xterm"), 30);
        assert_eq!(font.text_width("..."), 18);
    }

    #[test]
    fn test_proportional_width_falls_back_outside_range() {
        let font = FontMetrics {
            ascent: 10,
            first_char: u16::from(b'a'),
            widths: vec![5, 7, 9],
            default_width: 4,
        };
        assert_eq!(font.text_width("abc"), 21);
        // 'z' past the table, ' ' below it
        assert_eq!(font.text_width("z "), 8);
    }

    #[test]
    fn test_latin1_encoding() {
        assert_eq!(encode_latin1("café"), vec![b'c', b'a', b'f', 0xe9]);
        assert_eq!(encode_latin1("日本"), vec![b'?', b'?']);
        assert_eq!(decode_latin1(&[b'c', 0xe9]), "cé");
    }

    #[test]
    fn test_text_items_split_long_strings() {
        assert_eq!(text_items(b"hi"), vec![2, 0, b'h', b'i']);

        let long = vec![b'a'; 300];
        let items = text_items(&long);
        assert_eq!(items.len(), 300 + 4);
        assert_eq!(items[0], 254);
        assert_eq!(items[256], 46);
    }

    #[test]
    fn test_event_interest_masks() {
        let frame = EventInterest::FRAME.event_mask();
        assert_eq!(
            u32::from(frame),
            u32::from(
                EventMask::BUTTON_PRESS
                    | EventMask::BUTTON_RELEASE
                    | EventMask::BUTTON_MOTION
                    | EventMask::EXPOSURE
                    | EventMask::SUBSTRUCTURE_REDIRECT
                    | EventMask::SUBSTRUCTURE_NOTIFY
            )
        );
        assert_eq!(
            u32::from(EventInterest::CLIENT.event_mask()),
            u32::from(EventMask::PROPERTY_CHANGE)
        );
    }

    #[test]
    fn test_configure_request_keeps_masked_fields_only() {
        let event = ConfigureRequestEvent {
            response_type: 23,
            stack_mode: StackMode::ABOVE,
            sequence: 0,
            parent: 1,
            window: 2,
            sibling: 3,
            x: 10,
            y: 20,
            width: 300,
            height: 200,
            border_width: 1,
            value_mask: ConfigWindow::WIDTH | ConfigWindow::HEIGHT,
        };
        let changes = WindowChanges::from_request(&event);
        assert_eq!(
            changes,
            WindowChanges {
                width: Some(300),
                height: Some(200),
                ..WindowChanges::default()
            }
        );
    }
}
