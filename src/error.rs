//! Error types for Titt.

use thiserror::Error;

/// Library-level error type for Titt operations.
#[derive(Error, Debug)]
pub enum TittError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tab query failed: {0}")]
    Tab(String),

    #[error("No YouTube video detected.")]
    NoVideo,

    #[error("Please enter a question.")]
    EmptyQuestion,

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type alias for Titt operations.
pub type Result<T> = std::result::Result<T, TittError>;
