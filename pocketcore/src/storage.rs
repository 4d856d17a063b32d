//! Persisted preferences
//!
//! Stored as pretty JSON in the platform config directory, e.g.
//! `~/.config/pocketcalc/settings.json` on Linux.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;

const APP_NAME: &str = "pocketcalc";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Bare "=" after a result repeats the last operation
    pub repeat_equals: bool,
    /// Copy every successful result to the clipboard
    pub copy_on_equals: bool,
    pub window_width: f32,
    pub window_height: f32,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            repeat_equals: false,
            copy_on_equals: false,
            window_width: 380.0,
            window_height: 640.0,
            log_filter: "info".to_string(),
        }
    }
}

/// Directory holding pocketcalc's config files.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|p| p.config_dir().to_path_buf())
}

impl Settings {
    pub fn default_path() -> Result<PathBuf> {
        config_dir()
            .map(|dir| dir.join(SETTINGS_FILE))
            .ok_or(StorageError::NoConfigDir)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(StorageError::NotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load from the default location.
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        let settings = Self::load_from(&path)?;
        info!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path()?;
        self.save_to(&path)?;
        info!("saved settings to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(SETTINGS_FILE);

        let settings = Settings {
            repeat_equals: true,
            window_width: 420.0,
            ..Settings::default()
        };
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, r#"{ "copy_on_equals": true }"#).unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert!(settings.copy_on_equals);
        assert!(!settings.repeat_equals);
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        assert!(matches!(
            Settings::load_from(&path),
            Err(StorageError::NotFound(_))
        ));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            Settings::load_from(&path),
            Err(StorageError::Json(_))
        ));
    }
}
