//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - How many days of history `log` draws
//! - Color and stats output of `log`
//! - Whether and how early habits at risk are flagged
//!
//! Configuration is stored at `~/.config/streakwise/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::engine::WarningPolicy;
use crate::error::ConfigError;

/// Output settings for `log`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Days of history per graph
    #[serde(default = "default_count_back")]
    pub count_back: u32,
    #[serde(default)]
    pub colorless: bool,
    /// Print per-habit statistics below the graphs
    #[serde(default)]
    pub show_stats: bool,
}

/// At-risk warning settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Fixed lead time in days. Unset derives it from each habit's interval.
    #[serde(default)]
    pub lead_days: Option<u32>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data dir>/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub warnings: WarningsConfig,
}

// Default functions
fn default_count_back() -> u32 {
    60
}
fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            count_back: default_count_back(),
            colorless: false,
            show_stats: false,
        }
    }
}

impl Default for WarningsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            lead_days: None,
        }
    }
}

/// Keys backed by an `Option`; `none` or `null` clears them.
const OPTIONAL_KEYS: &[&str] = &["warnings.lead_days"];

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        if key.is_empty() {
            return Err(unknown());
        }
        let mut parts = key.split('.').peekable();

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
                    ),
                    _ if matches!(value, "none" | "null") => {
                        if !existing.is_null() && !OPTIONAL_KEYS.contains(&key) {
                            return Err(invalid(format!("'{key}' cannot be cleared")));
                        }
                        serde_json::Value::Null
                    }
                    serde_json::Value::Null | serde_json::Value::Number(_) => value
                        .parse::<u64>()
                        .map(|n| serde_json::Value::Number(n.into()))
                        .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?,
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    serde_json::Value::String(_) => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// `<data dir>/config.toml`.
    pub fn path() -> PathBuf {
        data_dir().join("config.toml")
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path())
    }

    /// Load from `path`; a missing file yields the defaults without writing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(err) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: err.to_string(),
            }),
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path())
    }

    /// Persist to `path`, creating its parent directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| save_failed(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Null => Some("none".to_string()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key. Only the in-memory value changes; call
    /// [`Config::save`] to persist it.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed
    /// as the key's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value.trim())?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Every leaf key with its current value, in `section.key` form.
    pub fn entries(&self) -> Vec<(String, String)> {
        let Ok(serde_json::Value::Object(sections)) = serde_json::to_value(self) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        for (section, fields) in &sections {
            if let serde_json::Value::Object(fields) = fields {
                for field in fields.keys() {
                    let key = format!("{section}.{field}");
                    if let Some(value) = self.get(&key) {
                        out.push((key, value));
                    }
                }
            }
        }
        out
    }

    /// Warning settings for the engine, `None` when warnings are disabled.
    pub fn warning_policy(&self) -> Option<WarningPolicy> {
        self.warnings.enabled.then_some(WarningPolicy {
            lead_days: self.warnings.lead_days,
        })
    }
}
