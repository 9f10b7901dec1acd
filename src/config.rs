//! Configuration file loading.
//!
//! Settings come from `~/.focust/config.toml` and are overridden by
//! command-line flags. A missing or unreadable file falls back to the
//! built-in defaults, so the program runs without any configuration.
//!
//! ```toml
//! [timer]
//! minutes = 30
//!
//! [ui]
//! font = "short"
//! blink = true
//! ```

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::font::DEFAULT_FONT;

/// Main configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Timer defaults
    pub timer: TimerConfig,
    /// Display settings
    pub ui: UiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timer: TimerConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

/// Timer defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Countdown length in minutes when `-T` is not given
    pub minutes: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self { minutes: 30 }
    }
}

/// Display settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Glyph font name
    pub font: String,
    /// Whether the colon separators blink
    pub blink: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            font: DEFAULT_FONT.to_string(),
            blink: true,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load() -> Self {
        if let Some(path) = Self::get_config_path() {
            if path.exists() {
                if let Ok(content) = fs::read_to_string(&path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    /// Get config file path
    fn get_config_path() -> Option<PathBuf> {
        if let Some(home) = home_dir() {
            let focust_dir = home.join(".focust");
            if !focust_dir.exists() {
                let _ = fs::create_dir_all(&focust_dir);
            }
            return Some(focust_dir.join("config.toml"));
        }
        None
    }
}

// Get home directory
pub(crate) fn home_dir() -> Option<PathBuf> {
    std::env::var_os("USERPROFILE")
        .or_else(|| std::env::var_os("HOME"))
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.timer.minutes, 30);
        assert_eq!(config.ui.font, DEFAULT_FONT);
        assert!(config.ui.blink);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config: Config = toml::from_str("[timer]\nminutes = 45\n").unwrap();
        assert_eq!(config.timer.minutes, 45);
        assert_eq!(config.ui.font, DEFAULT_FONT);
        assert!(config.ui.blink);
    }

    #[test]
    fn test_full_file() {
        let config: Config =
            toml::from_str("[timer]\nminutes = 50\n\n[ui]\nfont = \"raw\"\nblink = false\n")
                .unwrap();
        assert_eq!(config.timer.minutes, 50);
        assert_eq!(config.ui.font, "raw");
        assert!(!config.ui.blink);
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(toml::from_str::<Config>("timer = \"soon\"").is_err());
    }
}
