//! Domain error types

use thiserror::Error;

/// Error when an invalid job status is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid status: \"{input}\". Valid statuses are: active, completed, archived")]
pub struct InvalidStatusError {
    pub input: String,
}

/// Error when an invalid property type is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid property type: \"{input}\". Valid types are: residential, commercial, industrial")]
pub struct InvalidPropertyTypeError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
