//! Omnibar Tabs
//!
//! Value types for the host tab API and the planner that decides where a freshly
//! opened tab goes relative to the tab that spawned it.

mod container;
mod error;
mod placement;
mod tab;
mod version;

pub use container::{ensure_real_container, ContextualIdentity, DEFAULT_COOKIE_STORE_ID};
pub use error::TabError;
pub use placement::{plan, TabPlacementPolicy, TabPlacementResult};
pub use tab::{
    CreateProperties, Tab, TabId, TabQuery, UpdateProperties, Window, WindowCreateData, WindowId,
};
pub use version::{BrowserInfo, OPENER_ATTRIBUTION_MIN_VERSION};

pub type Result<T> = std::result::Result<T, TabError>;
