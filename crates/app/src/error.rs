//! Application error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] newsdesk_core::Error),

    #[error(transparent)]
    Api(#[from] newsdesk_api::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Message suitable for an inline banner
    pub fn user_message(&self) -> String {
        match self {
            Error::Core(newsdesk_core::Error::Validation(message)) => message.clone(),
            Error::Api(err) => err.user_message(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}
