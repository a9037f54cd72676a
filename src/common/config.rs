//! Configuration file handling

use serde::Deserialize;
use std::path::Path;

use super::paths::config_path;
use super::{Error, Result};
use crate::calculator::DEFAULT_PRECISION;

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Calculator settings
    #[serde(default)]
    pub calculator: CalculatorConfig,
}

/// Calculator settings
#[derive(Debug, Deserialize)]
pub struct CalculatorConfig {
    /// Display precision handed to new calculators
    #[serde(default = "default_precision")]
    pub precision: i32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

fn default_precision() -> i32 {
    DEFAULT_PRECISION
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, &e))?;
        let config: Self =
            toml::from_str(&content).map_err(|e| Error::ConfigParse(e.to_string()))?;
        tracing::debug!(
            path = %path.display(),
            precision = config.calculator.precision,
            "Loaded config"
        );
        Ok(config)
    }

    /// Load configuration, falling back to defaults if the file is unusable
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Ignoring config file, using defaults");
            Self::default()
        })
    }

    /// Resolve the precision, preferring a command-line override
    ///
    /// The config file is only consulted when no override is given.
    pub fn resolve_precision(cli_override: Option<i32>) -> i32 {
        match cli_override {
            Some(precision) => precision,
            None => Self::load_or_default().calculator.precision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_precision() {
        let config = Config::default();
        assert_eq!(config.calculator.precision, 2);
    }

    #[test]
    fn test_load_precision_from_file() {
        let file = write_config("[calculator]\nprecision = 6\n");
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.calculator.precision, 6);
    }

    #[test]
    fn test_override_skips_config_file() {
        assert_eq!(Config::resolve_precision(Some(-1)), -1);
        assert_eq!(Config::resolve_precision(Some(7)), 7);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let file = write_config("[calculator]\n");
        assert_eq!(Config::load_from(file.path()).unwrap().calculator.precision, 2);

        let file = write_config("");
        assert_eq!(Config::load_from(file.path()).unwrap().calculator.precision, 2);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let file = write_config("[calculator]\nprecision = \"two\"\n");
        assert!(matches!(
            Config::load_from(file.path()),
            Err(Error::ConfigParse(_))
        ));
    }

    #[test]
    fn test_unreadable_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::load_from(&missing),
            Err(Error::FileRead { .. })
        ));
    }
}
