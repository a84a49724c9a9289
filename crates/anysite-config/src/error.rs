//! Error types for configuration loading

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ANYSITE_ACCESS_TOKEN is required")]
    MissingAccessToken,

    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Failed to read env file {path}: {message}")]
    EnvFile { path: String, message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
