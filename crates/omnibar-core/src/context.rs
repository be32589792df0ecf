//! Where the caller runs
//!
//! Extension code runs as a content script inside a page, as the background page,
//! or as an extension page. The caller states which one when building a
//! `Navigator`; nothing is sniffed from globals.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionContext {
    /// Injected into a web page, tab APIs go through the background proxy
    Content,
    /// The background page, no tab of its own
    Background,
    /// An extension page such as the new-tab page
    Extension,
}

impl ExecutionContext {
    pub fn is_content_script(&self) -> bool {
        matches!(self, ExecutionContext::Content)
    }

    /// Only code living in a tab has an "own" tab
    pub fn has_own_tab(&self) -> bool {
        !matches!(self, ExecutionContext::Background)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionContext::Content => "content",
            ExecutionContext::Background => "background",
            ExecutionContext::Extension => "extension",
        }
    }
}

impl std::fmt::Display for ExecutionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
