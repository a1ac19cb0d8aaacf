use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Tunables for the extraction heuristics. The defaults are the documented
/// behaviour; a config file only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractorConfig {
    /// Dates older than this many years before today are rejected.
    pub window_years: u32,
    /// Two-digit years at or below the pivot land in the 2000s, above it in the 1900s.
    pub year_pivot: u32,
    /// How many leading lines are considered for the vendor name.
    pub vendor_scan_lines: usize,
    pub vendor_min_chars: usize,
    pub vendor_max_chars: usize,
    /// Exclusive upper bound for an amount candidate.
    pub amount_ceiling: u32,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            window_years: 5,
            year_pivot: 30,
            vendor_scan_lines: 3,
            vendor_min_chars: 4,
            vendor_max_chars: 50,
            amount_ceiling: 10_000,
        }
    }
}

impl ExtractorConfig {
    pub fn from_toml(toml_content: &str) -> Result<Self, ConfigError> {
        let config: ExtractorConfig = toml::from_str(toml_content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn to_toml(&self) -> String {
        toml::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_years == 0 {
            return Err(ConfigError::Invalid("window_years must be at least 1".into()));
        }
        if self.year_pivot > 99 {
            return Err(ConfigError::Invalid("year_pivot must be between 0 and 99".into()));
        }
        if self.vendor_scan_lines == 0 {
            return Err(ConfigError::Invalid("vendor_scan_lines must be at least 1".into()));
        }
        if self.vendor_max_chars == 0 || self.vendor_min_chars > self.vendor_max_chars {
            return Err(ConfigError::Invalid(format!(
                "vendor length bounds {}..={} are empty",
                self.vendor_min_chars, self.vendor_max_chars
            )));
        }
        if self.amount_ceiling == 0 {
            return Err(ConfigError::Invalid("amount_ceiling must be positive".into()));
        }
        Ok(())
    }
}
