//! Browser host capabilities
//!
//! Everything that needs the browser goes through [`BrowserHost`]. Each call is a
//! suspension point; failures come back as errors and are passed on untouched.

mod memory;

pub use memory::MemoryHost;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use omnibar_navigation::SearchEngine;
use omnibar_tabs::{
    BrowserInfo, ContextualIdentity, CreateProperties, Tab, TabId, TabQuery, UpdateProperties,
    Window, WindowCreateData,
};

use crate::Result;

/// Arguments for `search.search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_id: Option<TabId>,
    /// Engine name; `None` searches with the browser default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    pub query: String,
}

impl SearchRequest {
    pub fn with_engine(tab_id: TabId, engine: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            tab_id: Some(tab_id),
            engine: Some(engine.into()),
            query: query.into(),
        }
    }

    pub fn with_default(tab_id: TabId, query: impl Into<String>) -> Self {
        Self {
            tab_id: Some(tab_id),
            engine: None,
            query: query.into(),
        }
    }
}

#[async_trait]
pub trait BrowserHost: Send + Sync {
    async fn query_tabs(&self, query: TabQuery) -> Result<Vec<Tab>>;

    async fn create_tab(&self, props: CreateProperties) -> Result<Tab>;

    async fn update_tab(&self, tab_id: TabId, props: UpdateProperties) -> Result<Tab>;

    async fn create_window(&self, data: WindowCreateData) -> Result<Window>;

    /// Engines in registration order
    async fn search_engines(&self) -> Result<Vec<SearchEngine>>;

    async fn search(&self, request: SearchRequest) -> Result<()>;

    async fn browser_info(&self) -> Result<BrowserInfo>;

    async fn contextual_identity(&self, cookie_store_id: &str) -> Result<ContextualIdentity>;

    /// The tab the calling script runs in, answered by the background page
    async fn own_tab(&self) -> Result<Tab>;
}
