use thiserror::Error;

/// Custom error types for lawgg-suggest
#[derive(Debug, Error)]
pub enum SuggestError {
    /// Lookup request never produced a response (connect, timeout, TLS)
    #[error("Network error: {0}")]
    Network(String),

    /// Lookup endpoint answered with a non-success status
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Response body was not the expected JSON array
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for SuggestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SuggestError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            SuggestError::Api {
                code: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            SuggestError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
