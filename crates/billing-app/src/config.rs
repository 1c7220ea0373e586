//! Configuration management for truck-billing
//!
//! Config stored at: ~/.config/truck-billing/config.json

use billing_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Spreadsheet export target
    #[serde(default = "default_workbook_path")]
    pub workbook_path: PathBuf,

    /// PDF export target
    #[serde(default = "default_report_path")]
    pub report_path: PathBuf,

    /// Symbol shown before summary amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_workbook_path() -> PathBuf {
    PathBuf::from("truck_records.xlsx")
}

fn default_report_path() -> PathBuf {
    PathBuf::from("truck_report.pdf")
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workbook_path: default_workbook_path(),
            report_path: default_report_path(),
            currency_symbol: default_currency_symbol(),
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("truck-billing");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or use defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from an explicit path, or use defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Truck Billing Configuration")?;
        writeln!(f, "===========================")?;
        writeln!(f)?;
        writeln!(f, "Workbook path:  {}", self.workbook_path.display())?;
        writeln!(f, "Report path:    {}", self.report_path.display())?;
        writeln!(f, "Currency:       {}", self.currency_symbol)?;
        writeln!(f, "Output format:  {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use billing_types::Error;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_use_fixed_names() {
        let config = Config::default();
        assert_eq!(config.workbook_path, PathBuf::from("truck_records.xlsx"));
        assert_eq!(config.report_path, PathBuf::from("truck_report.pdf"));
        assert_eq!(config.currency_symbol, "₹");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"currency_symbol": "Rs."}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.currency_symbol, "Rs.");
        assert_eq!(config.report_path, PathBuf::from("truck_report.pdf"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            workbook_path: PathBuf::from("/tmp/trips.xlsx"),
            output_format: OutputFormat::Json,
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }
}
