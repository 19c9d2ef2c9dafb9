use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CleanError, Result};

pub const DEFAULT_INPUT_PATH: &str = "data/raw/sales_data_raw.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "data/processed/sales_data_clean.csv";

/// Which missing critical values cause a row to be dropped before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriticalPolicy {
    /// Drop only rows where every present critical column is null.
    #[default]
    AllMissing,
    /// Drop rows where any present critical column is null.
    AnyMissing,
}

impl CriticalPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CriticalPolicy::AllMissing => "all",
            CriticalPolicy::AnyMissing => "any",
        }
    }
}

impl fmt::Display for CriticalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CriticalPolicy {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" | "all_missing" => Ok(CriticalPolicy::AllMissing),
            "any" | "any_missing" => Ok(CriticalPolicy::AnyMissing),
            other => Err(format!("unknown critical policy '{other}'")),
        }
    }
}

/// Column designations driving each cleaning stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CleaningConfig {
    /// Expected input file extension, without the leading dot.
    pub extension: String,
    pub text_columns: Vec<String>,
    pub numeric_columns: Vec<String>,
    /// Columns whose negative values invalidate a row.
    pub non_negative_columns: Vec<String>,
    pub critical_columns: Vec<String>,
    pub date_column: String,
    pub critical_policy: CriticalPolicy,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            extension: "csv".to_string(),
            text_columns: vec!["prodname".to_string(), "category".to_string()],
            numeric_columns: vec!["price".to_string(), "qty".to_string()],
            non_negative_columns: vec!["qty".to_string(), "price".to_string()],
            critical_columns: vec![
                "price".to_string(),
                "qty".to_string(),
                "date_sold".to_string(),
            ],
            date_column: "date_sold".to_string(),
            critical_policy: CriticalPolicy::AllMissing,
        }
    }
}

impl CleaningConfig {
    /// Read a TOML file; fields it omits keep their defaults.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| CleanError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Self::from_toml_str(&text).map_err(|message| CleanError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn from_toml_str(text: &str) -> std::result::Result<Self, String> {
        let config: CleaningConfig = toml::from_str(text).map_err(|err| err.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_critical_policy(mut self, policy: CriticalPolicy) -> Self {
        self.critical_policy = policy;
        self
    }

    fn validate(&self) -> std::result::Result<(), String> {
        let extension = self.extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err("extension must not be empty".to_string());
        }
        if self.date_column.trim().is_empty() {
            return Err("date_column must not be empty".to_string());
        }
        Ok(())
    }

    pub fn expected_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_sales_columns() {
        let config = CleaningConfig::default();
        assert_eq!(config.text_columns, ["prodname", "category"]);
        assert_eq!(config.numeric_columns, ["price", "qty"]);
        assert_eq!(config.non_negative_columns, ["qty", "price"]);
        assert_eq!(config.critical_columns, ["price", "qty", "date_sold"]);
        assert_eq!(config.critical_policy, CriticalPolicy::AllMissing);
        assert_eq!(config.expected_extension(), "csv");
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config = CleaningConfig::from_toml_str(
            r#"
                critical_policy = "any_missing"
                text_columns = ["prodname"]
            "#,
        )
        .expect("config should parse");

        assert_eq!(config.critical_policy, CriticalPolicy::AnyMissing);
        assert_eq!(config.text_columns, ["prodname"]);
        assert_eq!(config.numeric_columns, ["price", "qty"]);
    }

    #[test]
    fn rejects_unknown_fields_and_empty_extension() {
        assert!(CleaningConfig::from_toml_str("colour = \"red\"").is_err());
        assert!(CleaningConfig::from_toml_str("extension = \".\"").is_err());
    }

    #[test]
    fn missing_config_file_is_a_config_error() {
        let err = CleaningConfig::from_toml_file("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, CleanError::Config { .. }));
    }

    #[test]
    fn parses_policy_names() {
        assert_eq!("ALL".parse::<CriticalPolicy>(), Ok(CriticalPolicy::AllMissing));
        assert_eq!("any".parse::<CriticalPolicy>(), Ok(CriticalPolicy::AnyMissing));
        assert!("some".parse::<CriticalPolicy>().is_err());
    }
}
