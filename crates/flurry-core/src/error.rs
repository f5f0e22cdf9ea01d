//! Error types for flurry

use thiserror::Error;

/// The main error type for flurry operations
#[derive(Debug, Error)]
pub enum FlurryError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid color literal: {0}")]
    InvalidColor(String),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for flurry operations
pub type Result<T> = std::result::Result<T, FlurryError>;

impl From<toml::de::Error> for FlurryError {
    fn from(err: toml::de::Error) -> Self {
        FlurryError::TomlParse(err.to_string())
    }
}
