//! Error types.
//!
//! A calendar date that does not exist is not an error: resolution returns
//! `None` for it. Errors cover instants outside the lunar table and bad
//! configuration.

use crate::time_scales::Timestamp;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("timestamp {0} is outside the supported lunar calendar range")]
    OutOfRange(Timestamp),

    #[error("UTC offset of {0} minutes is outside -840..=840")]
    InvalidOffset(i32),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
