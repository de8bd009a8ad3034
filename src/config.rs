//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving tool preferences
//! (default room envelope, default presets, export settings) in TOML format
//! with platform-specific directory resolution. Designs themselves are never
//! stored here.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::{
    catalog,
    constants::{VIDEOWALL_ROOM_HEIGHT, WALL_HEIGHT, WALL_WIDTH},
    models::{RoomDimensions, ScenarioKind},
};

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "ELEVATION_ARCHITECT_CONFIG_DIR";

/// Default PNG export scale factor.
pub const DEFAULT_EXPORT_SCALE: f32 = 2.0;

/// Elevation room envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Wall width in millimeters
    pub width: f64,
    /// Floor-to-ceiling height in millimeters
    pub height: f64,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            width: WALL_WIDTH,
            height: WALL_HEIGHT,
        }
    }
}

impl RoomConfig {
    /// Room envelope as a model value.
    #[must_use]
    pub const fn dimensions(&self) -> RoomDimensions {
        RoomDimensions::new(self.width, self.height)
    }
}

/// Presets a new elevation starts from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Display preset id
    pub display_preset: String,
    /// Scenario id
    pub scenario: String,
    /// Bracket id
    pub bracket: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            display_preset: catalog::default_display().id.to_string(),
            scenario: ScenarioKind::default().id().to_string(),
            bracket: catalog::default_bracket().id.to_string(),
        }
    }
}

/// Video-wall room envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoWallConfig {
    /// Wall width in millimeters
    pub room_width: f64,
    /// Floor-to-ceiling height in millimeters
    pub room_height: f64,
}

impl Default for VideoWallConfig {
    fn default() -> Self {
        Self {
            room_width: WALL_WIDTH,
            room_height: VIDEOWALL_ROOM_HEIGHT,
        }
    }
}

impl VideoWallConfig {
    /// Room envelope as a model value.
    #[must_use]
    pub const fn room(&self) -> RoomDimensions {
        RoomDimensions::new(self.room_width, self.room_height)
    }
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// PNG pixels per drawing millimeter
    #[serde(default = "default_export_scale")]
    pub scale: f32,
    /// Directory exports are written to when no explicit path is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

fn default_export_scale() -> f32 {
    DEFAULT_EXPORT_SCALE
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: default_export_scale(),
            output_dir: None,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/ElevationArchitect/config.toml`
/// - macOS: `~/Library/Application Support/ElevationArchitect/config.toml`
/// - Windows: `%APPDATA%\ElevationArchitect\config.toml`
///
/// `ELEVATION_ARCHITECT_CONFIG_DIR` replaces the directory on every platform.
///
/// # Validation
///
/// - room sizes and export scale must be positive and finite
/// - preset, scenario and bracket ids must exist in the catalogs; the
///   `custom` sentinel is not a valid default display preset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Elevation room envelope
    #[serde(default)]
    pub room: RoomConfig,
    /// Starting presets
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Video-wall room envelope
    #[serde(default)]
    pub videowall: VideoWallConfig,
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// - Linux: `~/.config/ElevationArchitect/`
    /// - macOS: `~/Library/Application Support/ElevationArchitect/`
    /// - Windows: `%APPDATA%\ElevationArchitect\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("ElevationArchitect");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate().context(format!(
            "Invalid config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::config_file_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Saves configuration to an explicit file using temp file + rename.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        info!(path = %config_path.display(), "saved configuration");
        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - room sizes are positive and finite
    /// - export scale is positive and finite
    /// - preset, scenario and bracket ids exist (`custom` is rejected as a
    ///   default display preset)
    pub fn validate(&self) -> Result<()> {
        ensure_positive("room.width", self.room.width)?;
        ensure_positive("room.height", self.room.height)?;
        ensure_positive("videowall.room_width", self.videowall.room_width)?;
        ensure_positive("videowall.room_height", self.videowall.room_height)?;
        ensure_positive("export.scale", f64::from(self.export.scale))?;

        if self.defaults.display_preset == catalog::CUSTOM_PRESET_ID {
            anyhow::bail!(
                "defaults.display_preset must name a catalog display, not '{}'",
                catalog::CUSTOM_PRESET_ID
            );
        }
        catalog::find_display(&self.defaults.display_preset)
            .context("defaults.display_preset is invalid")?;
        self.defaults
            .scenario
            .parse::<ScenarioKind>()
            .context("defaults.scenario is invalid")?;
        catalog::find_bracket(&self.defaults.bracket).context("defaults.bracket is invalid")?;

        Ok(())
    }

    /// Default scenario as a typed value.
    pub fn default_scenario(&self) -> Result<ScenarioKind> {
        self.defaults.scenario.parse()
    }
}

fn ensure_positive(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        anyhow::bail!("{field} must be a positive number, got {value}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.room.dimensions(), RoomDimensions::new(4000.0, 2800.0));
        assert_eq!(config.videowall.room(), RoomDimensions::new(4000.0, 3000.0));
        assert_eq!(config.defaults.display_preset, "generic-65");
        assert_eq!(config.defaults.bracket, "chief-lsm1u");
        assert_eq!(config.default_scenario().unwrap(), ScenarioKind::MeetingConference);
        assert!((config.export.scale - 2.0).abs() < f32::EPSILON);
        assert!(config.export.output_dir.is_none());
    }

    #[test]
    fn test_config_validate() {
        assert!(Config::new().validate().is_ok());

        let mut config = Config::new();
        config.room.height = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.export.scale = -1.0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.defaults.display_preset = "generic-120".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.defaults.scenario = "boardroom".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.defaults.display_preset = catalog::CUSTOM_PRESET_ID.to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("custom"));
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.room.width = 5200.0;
        config.defaults.scenario = "education".to_string();
        config.export.output_dir = Some(temp_dir.path().join("out"));
        config.save_to(&config_file).unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
        assert!(!config_file.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(loaded, Config::new());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[room]\nwidth = 6000.0\nheight = 3200.0\n").unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded.room.width, 6000.0);
        assert_eq!(loaded.defaults, DefaultsConfig::default());
        assert_eq!(loaded.export, ExportConfig::default());
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[defaults]\ndisplay_preset = \"nope\"\nscenario = \"general\"\nbracket = \"none\"\n").unwrap();
        assert!(Config::load_from(&config_file).is_err());

        fs::write(&config_file, "room = 3").unwrap();
        assert!(Config::load_from(&config_file).is_err());
    }

    #[test]
    fn test_save_rejects_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        let mut config = Config::new();
        config.videowall.room_width = f64::NAN;
        assert!(config.save_to(&config_file).is_err());
        assert!(!config_file.exists());
    }
}
