//! Tab and window values exchanged with the host
//!
//! Field names follow the WebExtension tab API so the JSON form matches what a
//! host bridge sends and expects.

use serde::{Deserialize, Serialize};

use crate::container::DEFAULT_COOKIE_STORE_ID;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(pub u64);

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub u64);

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: TabId,
    /// Zero-based position within its window
    pub index: usize,
    pub window_id: WindowId,
    pub url: String,
    pub active: bool,
    /// Container the tab lives in
    #[serde(default = "default_cookie_store")]
    pub cookie_store_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opener_tab_id: Option<TabId>,
}

fn default_cookie_store() -> String {
    DEFAULT_COOKIE_STORE_ID.to_string()
}

impl Tab {
    pub fn in_default_container(&self) -> bool {
        self.cookie_store_id == DEFAULT_COOKIE_STORE_ID
    }
}

/// Filter for `tabs.query`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default)]
    pub current_window: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_id: Option<WindowId>,
}

impl TabQuery {
    pub fn active_in_current_window() -> Self {
        Self {
            active: Some(true),
            current_window: true,
            window_id: None,
        }
    }

    pub fn current_window() -> Self {
        Self {
            current_window: true,
            ..Default::default()
        }
    }

    /// Whether `tab` passes this filter, given which window is current
    pub fn matches(&self, tab: &Tab, current_window: WindowId) -> bool {
        if let Some(active) = self.active {
            if tab.active != active {
                return false;
            }
        }
        if self.current_window && tab.window_id != current_window {
            return false;
        }
        if let Some(window_id) = self.window_id {
            if tab.window_id != window_id {
                return false;
            }
        }
        true
    }
}

/// Options for `tabs.create`. `None` leaves the choice to the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_store_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opener_tab_id: Option<TabId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_id: Option<WindowId>,
}

/// Options for `tabs.update`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_replace: Option<bool>,
}

impl UpdateProperties {
    /// Same options, navigating to `url` unless a url is already set
    pub fn or_url(mut self, url: impl Into<String>) -> Self {
        self.url.get_or_insert_with(|| url.into());
        self
    }
}

/// Options for `windows.create`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowCreateData {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub url: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incognito: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focused: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_store_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    pub id: WindowId,
    pub focused: bool,
    pub incognito: bool,
    #[serde(default)]
    pub tabs: Vec<Tab>,
}
