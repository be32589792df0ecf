//! Browser identification

use serde::{Deserialize, Serialize};

/// First major version that honours `openerTabId` on `tabs.create`
pub const OPENER_ATTRIBUTION_MIN_VERSION: u32 = 57;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserInfo {
    pub name: String,
    pub vendor: String,
    /// Dotted version string such as `128.0.3` or `57.0a1`
    pub version: String,
    #[serde(default)]
    pub build_id: String,
}

impl BrowserInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vendor: String::new(),
            version: version.into(),
            build_id: String::new(),
        }
    }

    /// Numeric part before the first dot, `None` when it is not a number
    pub fn major_version(&self) -> Option<u32> {
        self.version.split('.').next()?.trim().parse().ok()
    }

    /// An unparseable version never counts as new enough
    pub fn is_at_least(&self, major: u32) -> bool {
        self.major_version().is_some_and(|actual| actual >= major)
    }
}
