use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::UtilError;
use crate::logging::LoggingConfig;

/// Library configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UtilConfig {
    pub logging: LoggingConfig,
}

impl UtilConfig {
    /// Parse configuration from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: UtilConfig = toml::from_str(content)?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| UtilError::InvalidConfig {
            path: path.display().to_string(),
        })?;
        let config = Self::from_toml_str(&content)?;

        info!("Configuration loaded from: {}", path.display());
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(UtilError::config("Logging level must not be empty").into());
        }

        if self.logging.file_enabled && self.logging.max_files == 0 {
            return Err(UtilError::config("Logging max_files must be > 0 when file logging is enabled").into());
        }

        Ok(())
    }
}

/// Environment-based configuration overrides
pub struct ConfigOverrides;

impl ConfigOverrides {
    pub const LOG_LEVEL_VAR: &'static str = "AIU_LOG_LEVEL";

    /// Apply environment variable overrides to configuration
    pub fn apply(config: &mut UtilConfig) {
        Self::apply_from(config, |key| std::env::var(key).ok());
    }

    /// Apply overrides looked up through `lookup` instead of the process environment
    pub fn apply_from<F>(config: &mut UtilConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(Self::LOG_LEVEL_VAR) {
            if let Some(level) = crate::utils::trim_to_null(Some(&level)) {
                config.logging.level = level.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = UtilConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.file_enabled);
    }

    #[test]
    fn test_from_toml_str() {
        let config = UtilConfig::from_toml_str(
            r#"
            [logging]
            level = "debug"
            console_enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.console_enabled);
        assert_eq!(config.logging.max_files, 5);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = UtilConfig::from_toml_str("").unwrap();
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let err = UtilConfig::from_toml_str("[logging]\nlevel = \" \"\n").unwrap_err();
        assert!(err.to_string().contains("Logging level"));

        let err = UtilConfig::from_toml_str("[logging]\nfile_enabled = true\nmax_files = 0\n").unwrap_err();
        assert!(err.to_string().contains("max_files"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"warn\"").unwrap();

        let config = UtilConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = UtilConfig::load_from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().starts_with("Invalid configuration file"));
    }

    #[test]
    fn test_overrides() {
        let mut config = UtilConfig::default();
        ConfigOverrides::apply_from(&mut config, |key| {
            (key == ConfigOverrides::LOG_LEVEL_VAR).then(|| " trace ".to_string())
        });
        assert_eq!(config.logging.level, "trace");

        // Blank values are ignored
        ConfigOverrides::apply_from(&mut config, |_| Some("  ".to_string()));
        assert_eq!(config.logging.level, "trace");
    }
}
