//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tab error: {0}")]
    Tab(#[from] omnibar_tabs::TabError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] omnibar_navigation::NavigationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The browser API itself failed
    #[error("Host error: {0}")]
    Host(String),

    #[error("No active tab in the current window")]
    NoActiveTab,

    #[error("No tab owns the {0} context")]
    NoOwnTab(crate::ExecutionContext),
}
