//! Command bar dispatch
//!
//! Each call reads a fresh config snapshot, asks the host for what it needs and
//! runs to completion. Nothing is kept between calls apart from the config.

use parking_lot::RwLock;
use serde::Serialize;

use omnibar_navigation::{classify, classify_without_engines, AddressQuery, ClassifiedAddress};
use omnibar_tabs::{
    ensure_real_container, plan, ContextualIdentity, CreateProperties, Tab, TabId, TabQuery,
    UpdateProperties, Window, WindowCreateData,
};

use crate::config::Config;
use crate::context::ExecutionContext;
use crate::error::CoreError;
use crate::host::{BrowserHost, SearchRequest};
use crate::Result;

/// Built-in page shown when there is nothing to open
pub const NEWTAB_PAGE: &str = "/static/newtab.html";

/// Options for opening a new tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenOptions {
    /// Focus the new tab
    pub active: bool,
    /// Open as if the link was middle-clicked in the current tab
    pub related: bool,
    pub cookie_store_id: Option<String>,
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self {
            active: true,
            related: false,
            cookie_store_id: None,
        }
    }
}

/// What the host was asked to do
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum DispatchAction {
    UpdatedTab { tab: Tab },
    Searched { request: SearchRequest },
}

/// Result of dispatching one command bar query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dispatch {
    pub classified: ClassifiedAddress,
    #[serde(flatten)]
    pub action: DispatchAction,
}

pub struct Navigator<H: BrowserHost> {
    host: H,
    config: RwLock<Config>,
    context: ExecutionContext,
}

impl<H: BrowserHost> Navigator<H> {
    pub fn new(host: H, config: Config, context: ExecutionContext) -> Self {
        tracing::debug!(context = %context, "Navigator created");
        Self {
            host,
            config: RwLock::new(config),
            context,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn context(&self) -> ExecutionContext {
        self.context
    }

    /// Snapshot of the current config
    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    pub fn set_config(&self, config: Config) {
        *self.config.write() = config;
    }

    // === Tab lookups ===

    /// The active tab of the current window
    pub async fn active_tab(&self) -> Result<Tab> {
        self.host
            .query_tabs(TabQuery::active_in_current_window())
            .await?
            .into_iter()
            .next()
            .ok_or(CoreError::NoActiveTab)
    }

    pub async fn active_tab_id(&self) -> Result<TabId> {
        Ok(self.active_tab().await?.id)
    }

    pub async fn active_tab_container_id(&self) -> Result<String> {
        Ok(self.active_tab().await?.cookie_store_id)
    }

    /// Container of the active tab. Tabs outside any container are an error.
    pub async fn active_tab_container(&self) -> Result<ContextualIdentity> {
        let cookie_store_id = self.active_tab_container_id().await?;
        let cookie_store_id = ensure_real_container(&cookie_store_id, "activeTabContainer")?;
        self.host.contextual_identity(cookie_store_id).await
    }

    /// The tab this code runs in
    pub async fn own_tab(&self) -> Result<Tab> {
        if !self.context.has_own_tab() {
            return Err(CoreError::NoOwnTab(self.context));
        }
        self.host.own_tab().await
    }

    pub async fn own_tab_id(&self) -> Result<TabId> {
        Ok(self.own_tab().await?.id)
    }

    pub async fn own_tab_container(&self) -> Result<ContextualIdentity> {
        let tab = self.own_tab().await?;
        let cookie_store_id = ensure_real_container(&tab.cookie_store_id, "ownTabContainer")?;
        self.host.contextual_identity(cookie_store_id).await
    }

    // === Browser version ===

    pub async fn browser_major_version(&self) -> Result<Option<u32>> {
        let info = self.host.browser_info().await?;
        let major = info.major_version();
        if major.is_none() {
            tracing::warn!(version = %info.version, "Unparseable browser version");
        }
        Ok(major)
    }

    pub async fn browser_version_at_least(&self, major: u32) -> Result<bool> {
        let info = self.host.browser_info().await?;
        Ok(info.is_at_least(major))
    }

    // === Opening ===

    /// Open `url` in a new tab placed by `relatedopenpos` or `tabopenpos`.
    pub async fn open_in_new_tab(&self, url: &str, options: OpenOptions) -> Result<Tab> {
        let policy = self.config().placement_policy(options.related);
        let current = self.active_tab().await?;

        // Values a policy does not look at are left at zero
        let tab_count = if policy.needs_tab_count() {
            self.host.query_tabs(TabQuery::current_window()).await?.len()
        } else {
            0
        };
        let browser_major_version = if policy.needs_browser_version(options.related) {
            self.browser_major_version().await?.unwrap_or(0)
        } else {
            0
        };

        let placement = plan(
            policy,
            options.related,
            &current,
            tab_count,
            browser_major_version,
        );

        let mut props = CreateProperties {
            active: Some(options.active),
            url: Some(url.to_string()),
            cookie_store_id: options.cookie_store_id,
            ..Default::default()
        };
        placement.apply(&mut props);

        let tab = self.host.create_tab(props).await?;
        tracing::info!(tab_id = %tab.id, index = tab.index, url = %tab.url, "Opened new tab");
        Ok(tab)
    }

    pub async fn open_in_new_window(&self, data: WindowCreateData) -> Result<Window> {
        let window = self.host.create_window(data).await?;
        tracing::info!(window_id = %window.id, "Opened new window");
        Ok(window)
    }

    /// Classify `args` joined by spaces and carry it out in `tab`.
    pub async fn open_in_tab<S: AsRef<str>>(
        &self,
        tab: &Tab,
        options: UpdateProperties,
        args: &[S],
    ) -> Result<Dispatch> {
        let query = AddressQuery::from_args(args);
        let config = self.config();
        let classifier = config.classifier_config();

        // Engines are only asked for once a rule needs them
        let classified = match classify_without_engines(query.as_str(), &classifier) {
            Some(classified) => classified,
            None => {
                let engines = self.host.search_engines().await?;
                classify(query.as_str(), &classifier, &engines)
            }
        };

        let action = match &classified {
            ClassifiedAddress::Empty => self.navigate(tab.id, options, NEWTAB_PAGE).await?,
            ClassifiedAddress::DirectUrl { url }
            | ClassifiedAddress::ConfiguredSearchUrl { url, .. } => {
                self.navigate(tab.id, options, url.as_str()).await?
            }
            ClassifiedAddress::NamedEngineSearch { engine, query, .. } => {
                self.search(SearchRequest::with_engine(tab.id, engine, query))
                    .await?
            }
            ClassifiedAddress::DefaultEngineSearch { query } => {
                self.search(SearchRequest::with_default(tab.id, query)).await?
            }
        };

        Ok(Dispatch { classified, action })
    }

    async fn navigate(
        &self,
        tab_id: TabId,
        options: UpdateProperties,
        url: &str,
    ) -> Result<DispatchAction> {
        let tab = self.host.update_tab(tab_id, options.or_url(url)).await?;
        tracing::debug!(tab_id = %tab.id, url, "Navigated tab");
        Ok(DispatchAction::UpdatedTab { tab })
    }

    async fn search(&self, request: SearchRequest) -> Result<DispatchAction> {
        self.host.search(request.clone()).await?;
        tracing::debug!(engine = ?request.engine, "Searched");
        Ok(DispatchAction::Searched { request })
    }
}
