//! # Customizer Configuration
//!
//! Runtime settings for the customizer: tick cadence, the manual reset key,
//! failure recovery, where flag textures live, and logging.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```toml
//! tick_interval_secs = 2.0
//! reset_key = "End"
//!
//! [logging]
//! level = "Debug"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};
use crate::foundation::logging::LoggingLevel;
use crate::input::KeyCode;

/// How far a failure inside one ship's pass reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RecoveryMode {
    /// Log the failing ship and carry on with the next one
    #[default]
    PerShip,
    /// Log the failing ship and skip the rest of the tick
    PerTick,
}

/// Flag texture storage layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Root of the host's mod asset tree
    pub assets_root: PathBuf,
    /// Directory of this mod below the assets root
    pub mod_id: String,
    /// Directory holding the flag images below the mod directory
    pub flags_dir: String,
    /// Expected flag image width in pixels
    pub flag_width: u32,
    /// Expected flag image height in pixels
    pub flag_height: u32,
    /// Keep decoded textures between directives instead of rereading the file
    pub cache_textures: bool,
}

impl AssetConfig {
    /// Directory the flag images are read from
    pub fn flags_path(&self) -> PathBuf {
        self.assets_root.join(&self.mod_id).join(&self.flags_dir)
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            assets_root: PathBuf::from("assets"),
            mod_id: "548219".to_string(),
            flags_dir: "flags".to_string(),
            flag_width: 768,
            flag_height: 520,
            cache_textures: false,
        }
    }
}

/// Log verbosity and destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Lowest level written
    pub level: LoggingLevel,
    /// Text file receiving the log; stderr when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// Top-level customizer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomizerConfig {
    /// Seconds between two passes over the fleet
    pub tick_interval_secs: f32,
    /// Key that clears the name cache and forces a full refresh
    pub reset_key: KeyCode,
    /// Failure containment inside a tick
    pub recovery: RecoveryMode,
    /// Flag texture storage
    pub assets: AssetConfig,
    /// Logging
    pub logging: LoggingConfig,
}

impl CustomizerConfig {
    /// Set the tick interval
    pub fn with_tick_interval(mut self, secs: f32) -> Self {
        self.tick_interval_secs = secs;
        self
    }

    /// Set the asset configuration
    pub fn with_assets(mut self, assets: AssetConfig) -> Self {
        self.assets = assets;
        self
    }

    /// Set the recovery mode
    pub fn with_recovery(mut self, recovery: RecoveryMode) -> Self {
        self.recovery = recovery;
        self
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tick_interval_secs.is_finite() || self.tick_interval_secs <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tick_interval_secs must be positive, got {}",
                self.tick_interval_secs
            )));
        }
        if self.assets.flag_width == 0 || self.assets.flag_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "flag dimensions must be non-zero, got {}x{}",
                self.assets.flag_width, self.assets.flag_height
            )));
        }
        Ok(())
    }
}

impl Default for CustomizerConfig {
    fn default() -> Self {
        Self {
            tick_interval_secs: 5.0,
            reset_key: KeyCode::Home,
            recovery: RecoveryMode::default(),
            assets: AssetConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config for CustomizerConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ship_customization_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_defaults() {
        let config = CustomizerConfig::default();
        assert_eq!(config.tick_interval_secs, 5.0);
        assert_eq!(config.reset_key, KeyCode::Home);
        assert_eq!(config.recovery, RecoveryMode::PerShip);
        assert_eq!(config.assets.flags_path(), PathBuf::from("assets").join("548219").join("flags"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config: CustomizerConfig = toml::from_str(
            "tick_interval_secs = 2.0\nreset_key = \"End\"\n\n[logging]\nlevel = \"Debug\"\n",
        )
        .unwrap();

        assert_eq!(config.tick_interval_secs, 2.0);
        assert_eq!(config.reset_key, KeyCode::End);
        assert_eq!(config.logging.level, LoggingLevel::Debug);
        assert_eq!(config.assets, AssetConfig::default());
    }

    #[test]
    fn test_toml_file_roundtrip() {
        let path = temp_path("config.toml");
        let config = CustomizerConfig::default()
            .with_tick_interval(1.5)
            .with_recovery(RecoveryMode::PerTick);

        config.save_to_file(&path).unwrap();
        let loaded = CustomizerConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_ron_file() {
        let path = temp_path("config.ron");
        std::fs::write(&path, "(tick_interval_secs: 3.0, recovery: PerTick)").unwrap();

        let loaded = CustomizerConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.tick_interval_secs, 3.0);
        assert_eq!(loaded.recovery, RecoveryMode::PerTick);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_unsupported_format() {
        let path = temp_path("config.json");
        std::fs::write(&path, "{}").unwrap();

        let result = CustomizerConfig::load_from_file(&path);
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let loaded = CustomizerConfig::load_or_default(temp_path("absent.toml")).unwrap();
        assert_eq!(loaded, CustomizerConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_interval() {
        let config = CustomizerConfig::default().with_tick_interval(0.0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = CustomizerConfig::default().with_tick_interval(f32::INFINITY);
        assert!(config.validate().is_err());
    }
}
