//! Tab error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Tab not found: {0}")]
    NotFound(String),

    #[error("Window not found: {0}")]
    WindowNotFound(String),

    #[error("{0} is not a valid contextual identity ({1})")]
    DefaultContainer(String, &'static str),

    #[error("Container not found: {0}")]
    ContainerNotFound(String),

    #[error("Unknown tab placement: {0}")]
    UnknownPlacement(String),
}
