//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid search URL template for '{alias}': {reason}")]
    InvalidTemplate { alias: String, reason: String },
}

impl From<url::ParseError> for NavigationError {
    fn from(err: url::ParseError) -> Self {
        NavigationError::InvalidUrl(err.to_string())
    }
}
