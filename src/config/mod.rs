pub mod models;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    ConfigItem, DefaultOpenDaysConfigItem, DefaultWindowConfigItem, FileLoggingConfigItem,
};
use crate::core::types::{DayOfWeek, TimeWindow};
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    DefaultWindow,
    DefaultOpenDays,
    FileLoggingEnabled,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub default_window: DefaultWindowConfigItem,
    #[serde(default)]
    pub default_open_days: DefaultOpenDaysConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

/// Client-side scheduling defaults. Optional on disk: a session with no
/// persisted settings runs on `default_values`.
#[derive(Debug, Clone)]
pub struct Config {
    path: Option<PathBuf>,
    data: ConfigFile,
}

impl Config {
    /// In-memory defaults, not bound to a file.
    pub fn default_values() -> Self {
        Self {
            path: None,
            data: ConfigFile::default(),
        }
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self {
            path: Some(path),
            data,
        })
    }

    /// Loads from the path when a file exists there, falls back to
    /// defaults otherwise.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default_values())
        }
    }

    pub fn view(&self) -> &ConfigFile {
        &self.data
    }

    pub fn default_window(&self) -> &TimeWindow {
        self.data.default_window.get_value()
    }

    pub fn default_open_days(&self) -> &[DayOfWeek] {
        self.data.default_open_days.get_value()
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }

    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<()> {
        self.edit(|cfg| match key {
            ConfigKey::DefaultWindow => cfg.default_window.set_value(new_value),
            ConfigKey::DefaultOpenDays => cfg.default_open_days.set_value(new_value),
            ConfigKey::FileLoggingEnabled => cfg.file_logging_enabled.set_value(new_value),
        })
    }

    pub fn set(&mut self, key_str: &str, new_value: &str) -> Result<()> {
        use std::str::FromStr;
        let key = ConfigKey::from_str(key_str).map_err(|_| {
            Error::config(format!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key_str,
                valid_csv::<ConfigKey>()
            ))
        })?;
        self.set_key(key, new_value)
    }

    fn edit<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ConfigFile) -> Result<()>,
    {
        f(&mut self.data)?;
        self.save()
    }

    fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            // Nothing persisted for an in-memory config.
            return Ok(());
        };
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| Error::config(format!("Failed to encode config: {}", e)))?;
        fs::write(path, json)
            .map_err(|e| Error::config(format!("Failed to write {}: {}", path.display(), e)))
    }
}
