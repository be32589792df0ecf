//! Dispatch configuration
//!
//! Keys keep the option names users type (`tabopenpos`, `searchurls`, ...).

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::path::Path;

use omnibar_navigation::ClassifierConfig;
use omnibar_tabs::TabPlacementPolicy;

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Placement for tabs opened explicitly
    #[serde(default = "default_tabopenpos")]
    pub tabopenpos: TabPlacementPolicy,
    /// Placement for tabs opened as if middle-clicked from the current tab
    #[serde(default = "default_relatedopenpos")]
    pub relatedopenpos: TabPlacementPolicy,
    /// Address opened for an empty query; empty means the built-in page
    #[serde(default)]
    pub newtab: String,
    /// Alias → search-URL template. User entries are merged over the defaults,
    /// an empty template disables an alias.
    #[serde(
        default = "default_searchurls",
        deserialize_with = "merge_searchurls"
    )]
    pub searchurls: HashMap<String, String>,
    /// Preferred engine alias; unset means the browser default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub searchengine: Option<String>,
}

fn default_tabopenpos() -> TabPlacementPolicy {
    TabPlacementPolicy::Next
}

fn default_relatedopenpos() -> TabPlacementPolicy {
    TabPlacementPolicy::Related
}

fn default_searchurls() -> HashMap<String, String> {
    [
        ("google", "https://www.google.com/search?q="),
        ("scholar", "https://scholar.google.com/scholar?q="),
        ("bing", "https://www.bing.com/search?q="),
        ("duckduckgo", "https://duckduckgo.com/?q="),
        ("wikipedia", "https://en.wikipedia.org/wiki/Special:Search/"),
        ("youtube", "https://www.youtube.com/results?search_query="),
        ("github", "https://github.com/search?q="),
        ("osm", "https://www.openstreetmap.org/search?query="),
        ("mdn", "https://developer.mozilla.org/en-US/search?q="),
    ]
    .into_iter()
    .map(|(alias, template)| (alias.to_string(), template.to_string()))
    .collect()
}

fn merge_searchurls<'de, D>(deserializer: D) -> std::result::Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let user = HashMap::<String, String>::deserialize(deserializer)?;
    let mut merged = default_searchurls();
    merged.extend(user);
    Ok(merged)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tabopenpos: default_tabopenpos(),
            relatedopenpos: default_relatedopenpos(),
            newtab: String::new(),
            searchurls: default_searchurls(),
            searchengine: None,
        }
    }
}

impl Config {
    /// Load config from a JSON file, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Borrowed view for one classification
    pub fn classifier_config(&self) -> ClassifierConfig<'_> {
        ClassifierConfig {
            newtab: &self.newtab,
            searchurls: &self.searchurls,
            searchengine: self.searchengine.as_deref(),
        }
    }

    pub fn placement_policy(&self, related: bool) -> TabPlacementPolicy {
        if related {
            self.relatedopenpos
        } else {
            self.tabopenpos
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.tabopenpos, TabPlacementPolicy::Next);
        assert_eq!(config.relatedopenpos, TabPlacementPolicy::Related);
        assert!(config.newtab.is_empty());
        assert!(config.searchengine.is_none());
        assert!(config.searchurls.contains_key("google"));
    }

    #[test]
    fn test_config_parse_minimal() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_parse_full() {
        let json = r#"{
            "tabopenpos": "last",
            "relatedopenpos": "next",
            "newtab": "https://start.example.org",
            "searchurls": {
                "crates": "https://crates.io/search?q=%s",
                "google": ""
            },
            "searchengine": "crates"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.tabopenpos, TabPlacementPolicy::Last);
        assert_eq!(config.relatedopenpos, TabPlacementPolicy::Next);
        assert_eq!(config.newtab, "https://start.example.org");
        assert_eq!(config.searchengine.as_deref(), Some("crates"));
        assert_eq!(
            config.searchurls.get("crates").map(String::as_str),
            Some("https://crates.io/search?q=%s")
        );
        // defaults survive, user entries override
        assert!(config.searchurls.contains_key("bing"));
        assert_eq!(config.searchurls.get("google").map(String::as_str), Some(""));
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let result: std::result::Result<Config, _> =
            serde_json::from_str(r#"{"tabopenpos": "first"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_placement_policy_selection() {
        let config = Config {
            tabopenpos: TabPlacementPolicy::Last,
            ..Default::default()
        };
        assert_eq!(config.placement_policy(false), TabPlacementPolicy::Last);
        assert_eq!(config.placement_policy(true), TabPlacementPolicy::Related);
    }

    #[test]
    fn test_classifier_view() {
        let config = Config {
            searchengine: Some("duckduckgo".to_string()),
            ..Default::default()
        };
        let view = config.classifier_config();
        assert_eq!(view.searchengine, Some("duckduckgo"));
        assert_eq!(view.newtab, "");
    }

    #[test]
    fn test_config_load_nonexistent() {
        let config = Config::load(Path::new("/nonexistent/omnibar.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_save_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let config = Config {
            newtab: "about:home".to_string(),
            searchengine: Some("bing".to_string()),
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_load_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(crate::CoreError::Serialization(_))
        ));
    }
}
