//! New-tab placement
//!
//! ```text
//! next     index = current + 1, opener only for related opens on >= 57
//! last     index = tab count, never an opener
//! related  opener on >= 57, otherwise index = current + 1
//! ```

use serde::{Deserialize, Serialize};

use crate::error::TabError;
use crate::tab::{CreateProperties, Tab, TabId};
use crate::version::OPENER_ATTRIBUTION_MIN_VERSION;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabPlacementPolicy {
    /// Right after the current tab
    Next,
    /// At the end of the window, disowned from the current tab
    Last,
    /// Wherever the browser puts tabs opened from the current tab
    Related,
}

impl TabPlacementPolicy {
    /// Only `last` needs to know how many tabs the window holds
    pub fn needs_tab_count(&self) -> bool {
        matches!(self, TabPlacementPolicy::Last)
    }

    /// Whether the outcome depends on the browser version
    pub fn needs_browser_version(&self, related: bool) -> bool {
        match self {
            TabPlacementPolicy::Next => related,
            TabPlacementPolicy::Last => false,
            TabPlacementPolicy::Related => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TabPlacementPolicy::Next => "next",
            TabPlacementPolicy::Last => "last",
            TabPlacementPolicy::Related => "related",
        }
    }
}

impl std::fmt::Display for TabPlacementPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TabPlacementPolicy {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "next" => Ok(TabPlacementPolicy::Next),
            "last" => Ok(TabPlacementPolicy::Last),
            "related" => Ok(TabPlacementPolicy::Related),
            _ => Err(TabError::UnknownPlacement(s.to_string())),
        }
    }
}

/// Where the new tab goes. Unset fields are left to the browser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabPlacementResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opener_tab_id: Option<TabId>,
}

impl TabPlacementResult {
    pub fn apply(self, props: &mut CreateProperties) {
        props.index = self.index;
        props.opener_tab_id = self.opener_tab_id;
    }
}

/// Plan the placement of a new tab spawned from `current`.
///
/// `tab_count` is the number of tabs in the current window; since indices are
/// zero-based it is also the append position.
pub fn plan(
    policy: TabPlacementPolicy,
    related: bool,
    current: &Tab,
    tab_count: usize,
    browser_major_version: u32,
) -> TabPlacementResult {
    let supports_opener = browser_major_version >= OPENER_ATTRIBUTION_MIN_VERSION;

    let result = match policy {
        TabPlacementPolicy::Next => TabPlacementResult {
            index: Some(current.index + 1),
            opener_tab_id: (related && supports_opener).then_some(current.id),
        },
        TabPlacementPolicy::Last => TabPlacementResult {
            index: Some(tab_count),
            opener_tab_id: None,
        },
        TabPlacementPolicy::Related if supports_opener => TabPlacementResult {
            index: None,
            opener_tab_id: Some(current.id),
        },
        TabPlacementPolicy::Related => TabPlacementResult {
            index: Some(current.index + 1),
            opener_tab_id: None,
        },
    };

    tracing::debug!(
        policy = %policy,
        related,
        current_tab = %current.id,
        index = ?result.index,
        opener = ?result.opener_tab_id,
        "Planned tab placement"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab::WindowId;

    fn current() -> Tab {
        Tab {
            id: TabId(42),
            index: 2,
            window_id: WindowId(1),
            url: "https://example.com/".to_string(),
            active: true,
            cookie_store_id: "firefox-default".to_string(),
            opener_tab_id: None,
        }
    }

    #[test]
    fn test_next_related_sets_opener_from_57() {
        let result = plan(TabPlacementPolicy::Next, true, &current(), 5, 57);
        assert_eq!(result.index, Some(3));
        assert_eq!(result.opener_tab_id, Some(TabId(42)));

        let result = plan(TabPlacementPolicy::Next, true, &current(), 5, 56);
        assert_eq!(result.index, Some(3));
        assert_eq!(result.opener_tab_id, None);
    }

    #[test]
    fn test_next_unrelated_never_sets_opener() {
        let result = plan(TabPlacementPolicy::Next, false, &current(), 5, 120);
        assert_eq!(
            result,
            TabPlacementResult {
                index: Some(3),
                opener_tab_id: None
            }
        );
    }

    #[test]
    fn test_last_appends_without_opener() {
        for related in [true, false] {
            let result = plan(TabPlacementPolicy::Last, related, &current(), 5, 120);
            assert_eq!(
                result,
                TabPlacementResult {
                    index: Some(5),
                    opener_tab_id: None
                }
            );
        }
    }

    #[test]
    fn test_related_prefers_opener() {
        let result = plan(TabPlacementPolicy::Related, false, &current(), 5, 57);
        assert_eq!(
            result,
            TabPlacementResult {
                index: None,
                opener_tab_id: Some(TabId(42))
            }
        );
    }

    #[test]
    fn test_related_falls_back_to_position() {
        let result = plan(TabPlacementPolicy::Related, true, &current(), 5, 56);
        assert_eq!(
            result,
            TabPlacementResult {
                index: Some(3),
                opener_tab_id: None
            }
        );
    }

    #[test]
    fn test_apply_to_create_properties() {
        let mut props = CreateProperties {
            url: Some("https://a.com/".to_string()),
            ..Default::default()
        };
        plan(TabPlacementPolicy::Related, true, &current(), 5, 60).apply(&mut props);
        assert_eq!(props.index, None);
        assert_eq!(props.opener_tab_id, Some(TabId(42)));
        assert_eq!(props.url.as_deref(), Some("https://a.com/"));
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("next".parse::<TabPlacementPolicy>().unwrap(), TabPlacementPolicy::Next);
        assert_eq!("LAST".parse::<TabPlacementPolicy>().unwrap(), TabPlacementPolicy::Last);
        assert!("first".parse::<TabPlacementPolicy>().is_err());
    }

    #[test]
    fn test_policy_lookups_needed() {
        assert!(TabPlacementPolicy::Last.needs_tab_count());
        assert!(!TabPlacementPolicy::Next.needs_tab_count());
        assert!(TabPlacementPolicy::Next.needs_browser_version(true));
        assert!(!TabPlacementPolicy::Next.needs_browser_version(false));
        assert!(TabPlacementPolicy::Related.needs_browser_version(false));
        assert!(!TabPlacementPolicy::Last.needs_browser_version(true));
    }
}
