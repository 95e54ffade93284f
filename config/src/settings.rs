//! Runtime settings with TOML file support.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for a RASA validator process.
///
/// Can be loaded from a TOML file via [`ValidatorSettings::from_toml_file`]
/// or built programmatically (e.g. for tests). Every field has a default, so
/// partial files are fine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidatorSettings {
    /// Path to the RASA-AUTH statement document. `None` means no document:
    /// the authorization store loads empty and default-allow applies
    /// everywhere.
    #[serde(default)]
    pub auth_objects: Option<PathBuf>,

    /// Path to the RASA-SET statement document. `None` means no document.
    #[serde(default)]
    pub set_objects: Option<PathBuf>,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ValidatorSettings {
    /// Load settings from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Settings(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse settings from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Settings(e.to_string()))
    }
}

impl Default for ValidatorSettings {
    fn default() -> Self {
        Self {
            auth_objects: None,
            set_objects: None,
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let settings = ValidatorSettings::from_toml_str("").expect("empty toml should parse");
        assert!(settings.auth_objects.is_none());
        assert!(settings.set_objects.is_none());
        assert_eq!(settings.log_format, "human");
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            auth_objects = "/etc/rasa/auth.json"
            log_level = "debug"
        "#;
        let settings = ValidatorSettings::from_toml_str(toml).expect("should parse");
        assert_eq!(
            settings.auth_objects,
            Some(PathBuf::from("/etc/rasa/auth.json"))
        );
        assert!(settings.set_objects.is_none());
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.log_format, "human"); // default
    }

    #[test]
    fn malformed_toml_is_a_settings_error() {
        let result = ValidatorSettings::from_toml_str("log_level = [nope");
        assert!(matches!(result, Err(ConfigError::Settings(_))));
    }

    #[test]
    fn missing_file_is_a_settings_error() {
        let result = ValidatorSettings::from_toml_file("/nonexistent/rasa.toml");
        assert!(matches!(result, Err(ConfigError::Settings(_))));
    }
}
