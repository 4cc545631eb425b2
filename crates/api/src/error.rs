//! API error types

use thiserror::Error;

/// API result type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the API client and services
#[derive(Debug, Error)]
pub enum Error {
    /// The server answered with a non-2xx status
    #[error("Request failed with status {status}: {message}")]
    Request { status: u16, message: String },

    /// The request never reached the server
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A 2xx body did not match the expected shape
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A multipart field could not be assembled
    #[error("Invalid form field: {0}")]
    Form(String),

    /// The configured base URL or a request path is invalid
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// User-facing message: prefers what the server said, falls back to a
    /// generic string per failure class.
    pub fn user_message(&self) -> String {
        match self {
            Error::Request { message, .. } => message.clone(),
            Error::Network(_) => "Cannot reach the server. Check your connection.".to_string(),
            Error::Decode(_) | Error::Form(_) | Error::Url(_) => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }

    /// HTTP status, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}
