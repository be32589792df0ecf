//! In-memory browser host
//!
//! Keeps windows, tabs and engines in a shared table so dispatch can run without
//! a real browser. Used by the CLI and by tests.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use omnibar_navigation::SearchEngine;
use omnibar_tabs::{
    BrowserInfo, ContextualIdentity, CreateProperties, Tab, TabError, TabId, TabQuery,
    UpdateProperties, Window, WindowCreateData, WindowId, DEFAULT_COOKIE_STORE_ID,
};

use super::{BrowserHost, SearchRequest};
use crate::error::CoreError;
use crate::Result;

const BLANK_TAB_URL: &str = "about:newtab";

/// Cookie store of tabs in private windows
const PRIVATE_COOKIE_STORE_ID: &str = "firefox-private";

#[derive(Debug, Clone, Copy)]
struct WindowMeta {
    id: WindowId,
    incognito: bool,
}

#[derive(Debug)]
struct HostState {
    tabs: Vec<Tab>,
    windows: Vec<WindowMeta>,
    current_window: WindowId,
    next_tab_id: u64,
    next_window_id: u64,
    engines: Vec<SearchEngine>,
    containers: HashMap<String, ContextualIdentity>,
    browser: BrowserInfo,
    own_tab: Option<TabId>,
    searches: Vec<SearchRequest>,
}

struct NewTab {
    window: WindowId,
    index: Option<usize>,
    opener: Option<TabId>,
    url: String,
    active: bool,
    cookie_store_id: String,
}

impl HostState {
    /// Cookie store for tabs created in `window` without an explicit one
    fn default_cookie_store(&self, window: WindowId) -> &'static str {
        let incognito = self
            .windows
            .iter()
            .find(|w| w.id == window)
            .is_some_and(|w| w.incognito);
        if incognito {
            PRIVATE_COOKIE_STORE_ID
        } else {
            DEFAULT_COOKIE_STORE_ID
        }
    }

    fn tab_count(&self, window: WindowId) -> usize {
        self.tabs.iter().filter(|t| t.window_id == window).count()
    }

    fn tab(&self, id: TabId) -> Result<&Tab> {
        self.tabs
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| TabError::NotFound(id.to_string()).into())
    }

    fn tab_mut(&mut self, id: TabId) -> Result<&mut Tab> {
        self.tabs
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TabError::NotFound(id.to_string()).into())
    }

    fn activate(&mut self, id: TabId) -> Result<Tab> {
        let window = self.tab(id)?.window_id;
        for tab in self.tabs.iter_mut().filter(|t| t.window_id == window) {
            tab.active = tab.id == id;
        }
        Ok(self.tab(id)?.clone())
    }

    fn insert(&mut self, new: NewTab) -> Tab {
        let count = self.tab_count(new.window);

        // Without an explicit index, tabs with an opener land right after it
        let index = match (new.index, new.opener) {
            (Some(index), _) => index.min(count),
            (None, Some(opener)) => self
                .tab(opener)
                .ok()
                .filter(|t| t.window_id == new.window)
                .map_or(count, |t| t.index + 1),
            (None, None) => count,
        };

        for tab in self
            .tabs
            .iter_mut()
            .filter(|t| t.window_id == new.window && t.index >= index)
        {
            tab.index += 1;
        }

        if new.active || count == 0 {
            for tab in self.tabs.iter_mut().filter(|t| t.window_id == new.window) {
                tab.active = false;
            }
        }

        let tab = Tab {
            id: TabId(self.next_tab_id),
            index,
            window_id: new.window,
            url: new.url,
            active: new.active || count == 0,
            cookie_store_id: new.cookie_store_id,
            opener_tab_id: new.opener,
        };
        self.next_tab_id += 1;
        self.tabs.push(tab.clone());
        tab
    }

    fn ordered(&self) -> Vec<Tab> {
        let mut tabs = self.tabs.clone();
        tabs.sort_by_key(|t| (t.window_id, t.index));
        tabs
    }
}

/// Shared in-memory browser. Clones see the same state.
#[derive(Debug, Clone)]
pub struct MemoryHost {
    state: Arc<RwLock<HostState>>,
}

impl MemoryHost {
    /// One focused, empty window
    pub fn new(browser: BrowserInfo) -> Self {
        let first = WindowId(1);
        Self {
            state: Arc::new(RwLock::new(HostState {
                tabs: Vec::new(),
                windows: vec![WindowMeta {
                    id: first,
                    incognito: false,
                }],
                current_window: first,
                next_tab_id: 1,
                next_window_id: 2,
                engines: Vec::new(),
                containers: HashMap::new(),
                browser,
                own_tab: None,
                searches: Vec::new(),
            })),
        }
    }

    /// A window holding `urls` in order, the first one active
    pub fn with_tabs(browser: BrowserInfo, urls: &[&str]) -> Self {
        let host = Self::new(browser);
        for url in urls {
            host.open_tab(url);
        }
        host
    }

    pub fn with_engine(self, engine: SearchEngine) -> Self {
        self.state.write().engines.push(engine);
        self
    }

    pub fn with_container(self, identity: ContextualIdentity) -> Self {
        self.state
            .write()
            .containers
            .insert(identity.cookie_store_id.clone(), identity);
        self
    }

    /// Append a background tab to the current window
    pub fn open_tab(&self, url: &str) -> Tab {
        let mut state = self.state.write();
        let window = state.current_window;
        state.insert(NewTab {
            window,
            index: None,
            opener: None,
            url: url.to_string(),
            active: false,
            cookie_store_id: DEFAULT_COOKIE_STORE_ID.to_string(),
        })
    }

    pub fn activate_tab(&self, tab_id: TabId) -> Result<Tab> {
        self.state.write().activate(tab_id)
    }

    pub fn set_cookie_store(&self, tab_id: TabId, cookie_store_id: &str) -> Result<()> {
        self.state.write().tab_mut(tab_id)?.cookie_store_id = cookie_store_id.to_string();
        Ok(())
    }

    /// Make `tab_id` the tab the calling script lives in
    pub fn set_own_tab(&self, tab_id: TabId) {
        self.state.write().own_tab = Some(tab_id);
    }

    pub fn set_browser(&self, browser: BrowserInfo) {
        self.state.write().browser = browser;
    }

    /// All tabs ordered by window, then position
    pub fn tabs(&self) -> Vec<Tab> {
        self.state.read().ordered()
    }

    pub fn searches(&self) -> Vec<SearchRequest> {
        self.state.read().searches.clone()
    }

    pub fn current_window(&self) -> WindowId {
        self.state.read().current_window
    }
}

#[async_trait]
impl BrowserHost for MemoryHost {
    async fn query_tabs(&self, query: TabQuery) -> Result<Vec<Tab>> {
        let state = self.state.read();
        Ok(state
            .ordered()
            .into_iter()
            .filter(|tab| query.matches(tab, state.current_window))
            .collect())
    }

    async fn create_tab(&self, props: CreateProperties) -> Result<Tab> {
        let mut state = self.state.write();
        let window = props.window_id.unwrap_or(state.current_window);
        if !state.windows.iter().any(|w| w.id == window) {
            return Err(TabError::WindowNotFound(window.to_string()).into());
        }

        let cookie_store_id = props
            .cookie_store_id
            .unwrap_or_else(|| state.default_cookie_store(window).to_string());
        let tab = state.insert(NewTab {
            window,
            index: props.index,
            opener: props.opener_tab_id,
            url: props.url.unwrap_or_else(|| BLANK_TAB_URL.to_string()),
            active: props.active.unwrap_or(true),
            cookie_store_id,
        });

        tracing::debug!(tab_id = %tab.id, index = tab.index, "Memory host created tab");
        Ok(tab)
    }

    async fn update_tab(&self, tab_id: TabId, props: UpdateProperties) -> Result<Tab> {
        let mut state = self.state.write();

        if let Some(url) = props.url {
            state.tab_mut(tab_id)?.url = url;
        }
        if props.active == Some(true) {
            state.activate(tab_id)?;
        }

        Ok(state.tab(tab_id)?.clone())
    }

    async fn create_window(&self, data: WindowCreateData) -> Result<Window> {
        let mut state = self.state.write();

        let id = WindowId(state.next_window_id);
        state.next_window_id += 1;

        let incognito = data.incognito.unwrap_or(false);
        state.windows.push(WindowMeta { id, incognito });

        let focused = data.focused.unwrap_or(true);
        if focused {
            state.current_window = id;
        }

        let urls = if data.url.is_empty() {
            vec![BLANK_TAB_URL.to_string()]
        } else {
            data.url
        };
        let cookie_store_id = data
            .cookie_store_id
            .unwrap_or_else(|| state.default_cookie_store(id).to_string());

        let tabs = urls
            .into_iter()
            .enumerate()
            .map(|(i, url)| {
                state.insert(NewTab {
                    window: id,
                    index: None,
                    opener: None,
                    url,
                    active: i == 0,
                    cookie_store_id: cookie_store_id.clone(),
                })
            })
            .collect();

        Ok(Window {
            id,
            focused,
            incognito,
            tabs,
        })
    }

    async fn search_engines(&self) -> Result<Vec<SearchEngine>> {
        Ok(self.state.read().engines.clone())
    }

    async fn search(&self, request: SearchRequest) -> Result<()> {
        let mut state = self.state.write();

        if let Some(tab_id) = request.tab_id {
            state.tab(tab_id)?;
        }
        if let Some(engine) = &request.engine {
            if !state.engines.iter().any(|e| &e.name == engine) {
                return Err(CoreError::Host(format!("No search engine named {engine}")));
            }
        }

        state.searches.push(request);
        Ok(())
    }

    async fn browser_info(&self) -> Result<BrowserInfo> {
        Ok(self.state.read().browser.clone())
    }

    async fn contextual_identity(&self, cookie_store_id: &str) -> Result<ContextualIdentity> {
        self.state
            .read()
            .containers
            .get(cookie_store_id)
            .cloned()
            .ok_or_else(|| TabError::ContainerNotFound(cookie_store_id.to_string()).into())
    }

    async fn own_tab(&self) -> Result<Tab> {
        let state = self.state.read();
        let id = state
            .own_tab
            .ok_or_else(|| CoreError::Host("Message sender is not a tab".to_string()))?;
        Ok(state.tab(id)?.clone())
    }
}
