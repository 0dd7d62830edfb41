//! Error types for configuration and logging setup

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing configuration value: {0}")]
    MissingSetting(String),

    #[error("Invalid instance ARN '{arn}': {reason}")]
    InvalidArn { arn: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
