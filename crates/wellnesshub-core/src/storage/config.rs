//! TOML configuration.
//!
//! Stored next to the database as `config.toml`. Every field has a
//! default, so a missing or partial file always loads cleanly.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::breathing::PhasePattern;
use crate::error::{ConfigError, Result};

use super::data_dir;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub breathing: BreathingConfig,
    pub admin: AdminConfig,
    pub report: ReportConfig,
}

/// Breathing exercise phase durations in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BreathingConfig {
    pub inhale_secs: u32,
    pub hold_secs: u32,
    pub exhale_secs: u32,
    pub pause_secs: u32,
}

impl Default for BreathingConfig {
    fn default() -> Self {
        Self {
            inhale_secs: 4,
            hold_secs: 7,
            exhale_secs: 8,
            pause_secs: 1,
        }
    }
}

impl BreathingConfig {
    pub fn phase_pattern(&self) -> PhasePattern {
        PhasePattern {
            inhale_secs: self.inhale_secs,
            hold_secs: self.hold_secs,
            exhale_secs: self.exhale_secs,
            pause_secs: self.pause_secs,
        }
    }
}

/// Admin gate settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            password: "admin123".to_string(),
        }
    }
}

/// PDF report layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_mm: f32,
    pub wrap_cols: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 15.0,
            wrap_cols: 90,
        }
    }
}

impl Config {
    /// Path to the configuration file.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load the configuration, falling back to defaults when the file is
    /// missing.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load_or_default() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let config: Config =
            toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Persist the configuration as TOML.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let raw = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        fs::write(&path, raw).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Look up a value by dotted key, e.g. `breathing.inhale_secs`.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownKey`] for keys that don't exist.
    pub fn get(&self, key: &str) -> Result<serde_json::Value> {
        let tree = serde_json::to_value(self)?;
        let pointer = format!("/{}", key.replace('.', "/"));
        tree.pointer(&pointer)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()).into())
    }

    /// Set a value by dotted key from its string form.
    ///
    /// The value is parsed as JSON first so numbers and booleans keep
    /// their types; anything that doesn't parse is taken as a string.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownKey`] for unknown keys and
    /// [`ConfigError::InvalidValue`] when the value doesn't fit the field
    /// or violates a constraint.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut tree = serde_json::to_value(&*self)?;
        let pointer = format!("/{}", key.replace('.', "/"));
        let slot = tree
            .pointer_mut(&pointer)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        *slot = serde_json::from_str(value)
            .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
        let updated: Config =
            serde_json::from_value(tree).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Check cross-field constraints. Phase durations must be at least
    /// one second so the breathing engine always advances.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let b = &self.breathing;
        for (key, secs) in [
            ("breathing.inhale_secs", b.inhale_secs),
            ("breathing.hold_secs", b.hold_secs),
            ("breathing.exhale_secs", b.exhale_secs),
            ("breathing.pause_secs", b.pause_secs),
        ] {
            if secs == 0 {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "phase duration must be at least 1 second".to_string(),
                });
            }
        }
        if self.report.wrap_cols < 20 {
            return Err(ConfigError::InvalidValue {
                key: "report.wrap_cols".to_string(),
                message: "wrap width must be at least 20 columns".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_four_seven_eight() {
        let config = Config::default();
        let pattern = config.breathing.phase_pattern();
        assert_eq!(pattern.cycle_secs(), 20);
        assert_eq!(config.admin.password, "admin123");
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str("[breathing]\ninhale_secs = 6\n").unwrap();
        assert_eq!(config.breathing.inhale_secs, 6);
        assert_eq!(config.breathing.hold_secs, 7);
        assert_eq!(config.report.wrap_cols, 90);
    }

    #[test]
    fn get_and_set_by_dotted_key() {
        let mut config = Config::default();
        assert_eq!(config.get("breathing.inhale_secs").unwrap(), 4);
        config.set("breathing.inhale_secs", "5").unwrap();
        assert_eq!(config.breathing.inhale_secs, 5);
        config.set("admin.password", "s3cret").unwrap();
        assert_eq!(config.admin.password, "s3cret");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut config = Config::default();
        assert!(config.get("breathing.nope").is_err());
        assert!(config.set("nope.nope", "1").is_err());
    }

    #[test]
    fn zero_duration_is_rejected() {
        let mut config = Config::default();
        assert!(config.set("breathing.pause_secs", "0").is_err());
        // The failed set must not corrupt the live value.
        assert_eq!(config.breathing.pause_secs, 1);
    }

    #[test]
    fn mistyped_value_is_rejected() {
        let mut config = Config::default();
        assert!(config.set("breathing.inhale_secs", "fast").is_err());
    }
}
