//! Search engines registered with the browser

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEngine {
    /// Display name, also what the host search API expects
    pub name: String,
    /// Keyword the user may type as the first word
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fav_icon_url: Option<String>,
}

impl SearchEngine {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            is_default: false,
            fav_icon_url: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// First engine whose alias equals `alias`.
///
/// The browser does not keep aliases unique, so registration order decides.
pub fn find_by_alias<'a>(engines: &'a [SearchEngine], alias: &str) -> Option<&'a SearchEngine> {
    engines
        .iter()
        .find(|engine| engine.alias.as_deref() == Some(alias))
}
