//! User settings stored in `config.yaml`
//!
//! ```yaml
//! output_dir: /tmp/sweeps
//! log_level: debug
//! log_file: /tmp/sweeps/sweepgen.log
//! log_rotation:
//!   max_bytes: 1048576
//!   keep_bytes: 262144
//! max_configurations: 5000
//! manifest: true
//! ```
//!
//! Every field is optional. Command-line flags take precedence over the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logging::LogRotation;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Where generated files go (default: next to the template)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    #[serde(default)]
    pub log_rotation: LogRotation,

    /// Refuse sweeps larger than this
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_configurations: Option<u64>,

    /// Write a manifest next to the generated files
    #[serde(default)]
    pub manifest: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: None,
            log_level: default_log_level(),
            log_file: None,
            log_rotation: LogRotation::default(),
            max_configurations: None,
            manifest: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

impl Settings {
    /// Default settings location (`<config dir>/sweepgen/config.yaml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sweepgen").join("config.yaml"))
    }

    /// Load settings from `path`, which must exist.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|message| SettingsError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Load from an explicit path, or from the default location if a file
    /// exists there, otherwise fall back to defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_saphyr::from_str(yaml).map_err(|e| e.to_string())
    }

    pub fn to_yaml(&self) -> Result<String, String> {
        serde_saphyr::to_string(self).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Settings::from_yaml("").unwrap(), Settings::default());
        assert_eq!(Settings::from_yaml("\n  \n").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let settings = Settings::from_yaml("max_configurations: 250\n").unwrap();
        assert_eq!(settings.max_configurations, Some(250));
        assert_eq!(settings.log_level, "info");
        assert!(!settings.manifest);
        assert!(settings.output_dir.is_none());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let settings = Settings {
            output_dir: Some(PathBuf::from("/tmp/sweeps")),
            log_level: "debug".to_string(),
            log_file: Some(PathBuf::from("/tmp/sweeps/sweepgen.log")),
            log_rotation: LogRotation {
                max_bytes: 4096,
                keep_bytes: 1024,
            },
            max_configurations: Some(1000),
            manifest: true,
        };
        let yaml = settings.to_yaml().unwrap();
        assert_eq!(Settings::from_yaml(&yaml).unwrap(), settings);
    }

    #[test]
    fn test_partial_log_rotation() {
        let settings = Settings::from_yaml("log_rotation:\n  max_bytes: 2048\n").unwrap();
        assert_eq!(settings.log_rotation.max_bytes, 2048);
        assert_eq!(
            settings.log_rotation.keep_bytes,
            LogRotation::default().keep_bytes
        );
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let dir = tempdir().unwrap();
        let err = Settings::load_or_default(Some(&dir.path().join("missing.yaml"))).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "max_configurations: lots\n").unwrap();

        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
        assert!(err.to_string().contains("config.yaml"));
    }

    #[test]
    fn test_load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "log_level: warn\nmanifest: true\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.log_level, "warn");
        assert!(settings.manifest);
    }
}
