//! Configuration system for plainwm
//!
//! Loads configuration from TOML file at `~/.config/plainwm/config.toml`
//! Auto-generates default config file on first run if missing.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Commands launched once after the taskbar and menu exist
    pub autostart: Vec<String>,
    /// Core font used for titles, labels and menu items
    pub font: String,
    pub decorations: DecorationConfig,
    pub colors: WindowColors,
    pub taskbar: TaskbarConfig,
    pub menu: MenuConfig,
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found at {:?}, using defaults", config_path);
            if let Err(e) = Self::save_default(config_path) {
                warn!("Failed to create default config file: {}", e);
            }
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path)
            .context("Failed to read config file")?;

        let config = Self::parse(&content)?;

        info!("Configuration loaded from {:?}", config_path);
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parse configuration text; missing keys take their defaults
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Get the path to the config file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("plainwm");

        Ok(config_dir.join("config.toml"))
    }

    /// Save default configuration to file
    fn save_default(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(&Self::default())
            .context("Failed to serialize default config")?;

        fs::write(path, toml_string)
            .context("Failed to write default config file")?;

        info!("Created default config file at {:?}", path);
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            autostart: vec!["xterm".to_string()],
            font: "fixed".to_string(),
            decorations: DecorationConfig::default(),
            colors: WindowColors::default(),
            taskbar: TaskbarConfig::default(),
            menu: MenuConfig::default(),
        }
    }
}

/// Frame decoration geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorationConfig {
    /// Title bar height in pixels
    pub title_bar_height: u16,
    /// Frame border width in pixels
    pub border_width: u16,
    /// Close button edge length in pixels
    pub close_size: u16,
    /// Gap between the close button and the right edge of the frame
    pub close_padding: u16,
    /// Title text origin
    pub title_x: i16,
    pub title_baseline: i16,
    /// Title used when a window advertises no name
    pub placeholder_title: String,
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            title_bar_height: 20,
            border_width: 2,
            close_size: 16,
            close_padding: 4,
            title_x: 5,
            title_baseline: 15,
            placeholder_title: "Unnamed".to_string(),
        }
    }
}

/// Frame and root colors (hex: 0xRRGGBB)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowColors {
    pub border: u32,
    pub title_bar: u32,
    pub title_text: u32,
    pub close_button: u32,
    pub close_glyph: u32,
    /// Root window background
    pub background: u32,
}

impl Default for WindowColors {
    fn default() -> Self {
        Self {
            border: 0xff0000,
            title_bar: 0x444444,
            title_text: 0xffffff,
            close_button: 0xff0000,
            close_glyph: 0xffffff,
            background: 0x000000,
        }
    }
}

/// Taskbar geometry and colors
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskbarConfig {
    /// Bar height in pixels
    pub height: u16,
    /// Upper bound for a single button's width
    pub max_button_width: u32,
    /// Horizontal gap between buttons and at both bar ends
    pub spacing: u32,
    /// Vertical gap above and below every button
    pub margin: u32,
    /// Horizontal room reserved around a button label
    pub label_padding: u32,
    pub background: u32,
    pub button: u32,
    pub active_button: u32,
    pub text: u32,
}

impl Default for TaskbarConfig {
    fn default() -> Self {
        Self {
            height: 28,
            max_button_width: 120,
            spacing: 4,
            margin: 2,
            label_padding: 6,
            background: 0x444444,
            button: 0x222222,
            active_button: 0x555555,
            text: 0xffffff,
        }
    }
}

/// Start menu overlay
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Commands listed in the menu, top to bottom
    pub items: Vec<String>,
    pub width: u16,
    pub height: u16,
    pub item_height: u16,
    pub padding: u16,
    pub background: u32,
    pub border: u32,
    pub text: u32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            items: vec!["xterm".to_string(), "eyes".to_string()],
            width: 200,
            height: 120,
            item_height: 30,
            padding: 5,
            background: 0x333333,
            border: 0xffffff,
            text: 0xffffff,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::parse(
            r#"
            autostart = []

            [taskbar]
            max_button_width = 200
            "#,
        )
        .unwrap();

        assert!(config.autostart.is_empty());
        assert_eq!(config.taskbar.max_button_width, 200);
        assert_eq!(config.taskbar.spacing, 4);
        assert_eq!(config.decorations.title_bar_height, 20);
        assert_eq!(config.decorations.placeholder_title, "Unnamed");
        assert_eq!(config.menu.items, vec!["xterm", "eyes"]);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(Config::parse("taskbar = 3").is_err());
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("plainwm-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.font, "fixed");
        assert!(path.exists());

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.taskbar.height, 28);
        assert_eq!(reloaded.colors.close_button, 0xff0000);

        let _ = fs::remove_dir_all(&dir);
    }
}
