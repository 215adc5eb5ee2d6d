//! Error types for confetti

use thiserror::Error;

/// The main error type for confetti operations
#[derive(Debug, Error)]
pub enum ConfettiError {
    #[error("Configuration error: {field} {reason}")]
    Configuration { field: String, reason: String },

    #[error("Invalid enum value: {value} is not one of {allowed:?}")]
    InvalidEnumValue {
        value: String,
        allowed: Vec<String>,
    },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

impl ConfettiError {
    /// Shorthand for a configuration error naming the offending field
    pub fn configuration(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfettiError::Configuration {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for confetti operations
pub type Result<T> = std::result::Result<T, ConfettiError>;

impl From<toml::de::Error> for ConfettiError {
    fn from(err: toml::de::Error) -> Self {
        ConfettiError::TomlParseError(err.to_string())
    }
}
