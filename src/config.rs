//! Converter configuration.
//!
//! The only setting is the reference timezone in which instants are mapped to
//! civil days. Configuration can be built in code or read from TOML:
//!
//! ```toml
//! utc_offset_minutes = 480
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest accepted distance from UTC, in minutes (UTC±14:00).
pub const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// China Standard Time, UTC+8.
pub const CST_OFFSET_MINUTES: i32 = 480;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Offset of the reference timezone east of UTC, in minutes.
    #[serde(default = "default_utc_offset")]
    pub utc_offset_minutes: i32,
}

fn default_utc_offset() -> i32 {
    CST_OFFSET_MINUTES
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: default_utc_offset(),
        }
    }
}

impl ConverterConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Example
    ///
    /// ```
    /// use lunisolar::ConverterConfig;
    ///
    /// let config = ConverterConfig::from_toml_str("utc_offset_minutes = 0").unwrap();
    /// assert_eq!(0, config.utc_offset_minutes);
    /// assert_eq!(480, ConverterConfig::from_toml_str("").unwrap().utc_offset_minutes);
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: ConverterConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        log::debug!(
            "loaded converter config from {}: {:?}",
            path.as_ref().display(),
            config
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.utc_offset_minutes.unsigned_abs() > MAX_OFFSET_MINUTES as u32 {
            return Err(Error::InvalidOffset(self.utc_offset_minutes));
        }
        Ok(())
    }
}
