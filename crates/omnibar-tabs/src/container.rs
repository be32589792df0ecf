//! Contextual identities (containers)

use serde::{Deserialize, Serialize};

use crate::error::TabError;
use crate::Result;

/// Cookie store of tabs that are in no container at all
pub const DEFAULT_COOKIE_STORE_ID: &str = "firefox-default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextualIdentity {
    pub cookie_store_id: String,
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub icon: String,
}

/// Reject the default cookie store before it is looked up as a container.
///
/// `caller` names the operation for the error message.
pub fn ensure_real_container<'a>(cookie_store_id: &'a str, caller: &'static str) -> Result<&'a str> {
    if cookie_store_id == DEFAULT_COOKIE_STORE_ID {
        return Err(TabError::DefaultContainer(cookie_store_id.to_string(), caller));
    }
    Ok(cookie_store_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store_rejected() {
        let err = ensure_real_container("firefox-default", "activeTabContainer").unwrap_err();
        assert_eq!(
            err.to_string(),
            "firefox-default is not a valid contextual identity (activeTabContainer)"
        );
    }

    #[test]
    fn test_real_container_passes() {
        assert_eq!(
            ensure_real_container("firefox-container-1", "activeTabContainer").unwrap(),
            "firefox-container-1"
        );
    }
}
