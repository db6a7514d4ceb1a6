//! Game configuration.
//!
//! Settings loaded from an INI file, with safe defaults so the game starts
//! even without one.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1920
//! height = 1080
//! target_fps = 60
//!
//! [world]
//! scroll_speed = 50.0
//! border_margin = 40.0
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1920;
const DEFAULT_WINDOW_HEIGHT: u32 = 1080;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_SCROLL_SPEED: f32 = 50.0;
const DEFAULT_BORDER_MARGIN: f32 = 40.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration.
///
/// Stores window settings and world tuning. Load values from the
/// configuration file with [`GameConfig::load_from_file`]; missing values
/// retain their defaults.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Downward scroll speed of the player aircraft, world units/second.
    pub scroll_speed: f32,
    /// Border the player is kept away from the view edges, world units.
    pub border_margin: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            scroll_speed: DEFAULT_SCROLL_SPEED,
            border_margin: DEFAULT_BORDER_MARGIN,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [world] section
        if let Some(speed) = config.getfloat("world", "scroll_speed").ok().flatten() {
            self.scroll_speed = speed as f32;
        }
        if let Some(margin) = config.getfloat("world", "border_margin").ok().flatten() {
            self.border_margin = margin as f32;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, scroll_speed={}, border_margin={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.scroll_speed,
            self.border_margin
        );

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_safe() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (1920, 1080));
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.scroll_speed, 50.0);
        assert_eq!(config.border_margin, 40.0);
    }

    #[test]
    fn test_missing_file_keeps_defaults() {
        let mut config = GameConfig::with_path("./does_not_exist.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_width, 1920);
    }
}
