//! Omnibar Core
//!
//! Glue between the pure decision code and the browser host: reads the config
//! snapshot, asks the host for the current tab, classifies or plans, then calls
//! back into the host to create, update or search.

mod config;
mod context;
mod error;
mod host;
mod navigator;

pub use config::Config;
pub use context::ExecutionContext;
pub use error::CoreError;
pub use host::{BrowserHost, MemoryHost, SearchRequest};
pub use navigator::{Dispatch, DispatchAction, Navigator, OpenOptions, NEWTAB_PAGE};

// Re-export the decision crates
pub use omnibar_navigation::{
    classify, classify_without_engines, AddressQuery, ClassifiedAddress, ClassifierConfig,
    NavigationError, Rule, SearchEngine,
};
pub use omnibar_tabs::{
    plan, BrowserInfo, ContextualIdentity, CreateProperties, Tab, TabError, TabId,
    TabPlacementPolicy, TabPlacementResult, TabQuery, UpdateProperties, Window,
    WindowCreateData, WindowId, DEFAULT_COOKIE_STORE_ID,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
