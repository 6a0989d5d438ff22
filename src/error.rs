use thiserror::Error;

/// Errors surfaced by the store, manifest, and update-check paths.
///
/// Preference reads never produce one of these; missing or damaged state is
/// absorbed by the fallback chain instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoreError {
    #[error("invalid version format: {0}")]
    InvalidVersion(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error("invalid version feed URL: {0}")]
    InvalidFeedUrl(String),

    #[error("version feed returned HTTP status {0}")]
    FeedStatus(u16),
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<url::ParseError> for CoreError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidFeedUrl(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
