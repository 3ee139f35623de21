//! Configuration Module - Startup preferences from ~/.folio-theme/config.toml
//!
//! Supports:
//! - Startup theme and default base color for `custom`
//! - Log level
//! - TUI refresh rate and help visibility
//! - Animation rotation speed
//!
//! The file is read at startup only. Theme changes made while running are
//! never written back.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::animation::DEFAULT_ROTATION_STEP;
use crate::color::Rgb;
use crate::theme::{ThemeId, ThemeState, DEFAULT_BASE_COLOR};

/// Folio Theme Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Startup theme
    pub theme: ThemeConfig,
    /// TUI settings
    pub tui: TuiConfig,
    /// Animation settings
    pub animation: AnimationConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Startup theme settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Theme identifier: dark, light, glass, purple, red, green, blue, custom
    pub initial: String,
    /// Base color for the custom theme (3- or 6-digit hex)
    pub base_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            initial: ThemeId::Dark.key().to_string(),
            base_color: DEFAULT_BASE_COLOR.to_hex(),
        }
    }
}

/// TUI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Frame interval in milliseconds
    pub tick_rate_ms: u64,
    /// Show the key help line
    pub show_help: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            show_help: true,
        }
    }
}

/// Animation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Radians added to each rotation axis per frame
    pub rotation_step: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            rotation_step: DEFAULT_ROTATION_STEP,
        }
    }
}

impl Config {
    /// Load config from the default path
    ///
    /// A missing file yields the defaults; a file that exists but cannot be
    /// read or parsed is an error.
    pub fn load() -> Result<Self> {
        Self::load_or_default(&Self::default_path())
    }

    /// Load config from `path`, or the defaults when no file is there
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        Ok(config)
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;

        Ok(())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "folio", "folio-theme")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".folio-theme")
                    .join("config.toml")
            })
    }

    /// Log file used while the TUI owns the terminal
    pub fn log_path() -> PathBuf {
        Self::default_path().with_file_name("folio-theme.log")
    }

    /// Create default config file if it doesn't exist
    pub fn ensure_exists() -> Result<PathBuf> {
        let path = Self::default_path();
        if !path.exists() {
            fs::create_dir_all(path.parent().unwrap_or_else(|| Path::new(".")))?;
            fs::write(&path, generate_sample_config())
                .with_context(|| format!("Failed to write config: {}", path.display()))?;
            tracing::info!("Created default config at {}", path.display());
        }
        Ok(path)
    }

    /// Startup theme state
    ///
    /// Invalid entries fall back to the defaults with a warning rather than
    /// aborting startup.
    pub fn initial_state(&self) -> ThemeState {
        let mut state = ThemeState::default();

        match self.theme.initial.parse::<ThemeId>() {
            Ok(id) => state.identifier = id,
            Err(e) => tracing::warn!("Ignoring [theme].initial: {}", e),
        }

        match Rgb::from_hex(&self.theme.base_color) {
            Ok(color) => state.base_color = color,
            Err(e) => tracing::warn!("Ignoring [theme].base_color: {}", e),
        }

        state
    }
}

/// Generate a sample config file with comments
pub fn generate_sample_config() -> String {
    r##"# Folio Theme Configuration
# Location: ~/.config/folio-theme/config.toml (or %APPDATA%\folio\folio-theme\config\config.toml on Windows)

[general]
# Log level: trace, debug, info, warn, error
log_level = "info"

[theme]
# Theme on startup: dark, light, glass, purple, red, green, blue, custom
initial = "dark"

# Base color the custom theme is derived from (3- or 6-digit hex)
base_color = "#7e3af2"

[tui]
# Frame interval in milliseconds
tick_rate_ms = 50

# Show the key help line
show_help = true

[animation]
# Radians added to each rotation axis per frame
rotation_step = 0.001
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.initial, "dark");
        assert_eq!(config.theme.base_color, "#7e3af2");
        assert_eq!(config.initial_state(), ThemeState::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("test_config.toml");

        let mut config = Config::default();
        config.theme.initial = "glass".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.theme.initial, "glass");
        assert_eq!(loaded.tui.tick_rate_ms, config.tui.tick_rate_ms);
    }

    #[test]
    fn test_parse_sample_config() {
        let sample = generate_sample_config();
        let config: Config = toml::from_str(&sample).unwrap();
        assert_eq!(config.initial_state(), ThemeState::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[theme]\ninitial = \"custom\"\n").unwrap();
        let state = config.initial_state();
        assert_eq!(state.identifier, ThemeId::Custom);
        assert_eq!(state.base_color, DEFAULT_BASE_COLOR);
        assert!(config.tui.show_help);
    }

    #[test]
    fn test_invalid_entries_fall_back() {
        let config: Config =
            toml::from_str("[theme]\ninitial = \"sepia\"\nbase_color = \"#zzz\"\n").unwrap();
        assert_eq!(config.initial_state(), ThemeState::default());
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load_from(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.theme.initial, "dark");
    }

    #[test]
    fn test_load_or_default_reports_syntax_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[theme\ninitial = ").unwrap();

        let err = Config::load_or_default(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn test_log_path_sits_next_to_config() {
        assert_eq!(Config::log_path().parent(), Config::default_path().parent());
    }
}
