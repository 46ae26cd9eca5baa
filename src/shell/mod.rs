//! Shell UI Module
//!
//! Desktop surfaces drawn next to the managed windows: the taskbar, the
//! start menu and the root background, plus process launching.

pub mod background;
pub mod launch;
pub mod menu;
pub mod taskbar;

pub use launch::{Launcher, ProcessLauncher};
pub use menu::StartMenu;
