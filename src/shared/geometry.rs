//! Window geometry

/// Axis-aligned rectangle in window or root coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Inclusive hit test: a point on the right or bottom edge still counts.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.contains_x(x) && y >= self.y && y <= self.y + self.height as i32
    }

    /// Inclusive horizontal span test.
    pub fn contains_x(&self, x: i32) -> bool {
        x >= self.x && x <= self.x + self.width as i32
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }
}
