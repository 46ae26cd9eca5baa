//! Types shared between the window manager core and the shell.

pub mod geometry;

pub use geometry::Rect;
