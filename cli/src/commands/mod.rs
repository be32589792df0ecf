//! Subcommand implementations

pub mod navigation;
pub mod tabs;

use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;

use omnibar_core::{BrowserInfo, MemoryHost, SearchEngine};

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

impl CommandResult<Value> {
    pub fn from_result<T: Serialize, E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => match serde_json::to_value(data) {
                Ok(value) => CommandResult::ok(value),
                Err(e) => CommandResult::err(e.to_string()),
            },
            Err(e) => CommandResult::err(e.to_string()),
        }
    }
}

/// `--engine ALIAS=NAME`
#[derive(Debug, Clone)]
pub struct EngineArg(pub SearchEngine);

impl FromStr for EngineArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (alias, name) = s
            .split_once('=')
            .ok_or_else(|| format!("Expected ALIAS=NAME, got '{s}'"))?;
        if alias.is_empty() || name.is_empty() {
            return Err(format!("Expected ALIAS=NAME, got '{s}'"));
        }
        Ok(EngineArg(SearchEngine::new(name).with_alias(alias)))
    }
}

/// A window of `tab_count` blank tabs with the given engines registered
pub fn simulated_host(tab_count: usize, browser_version: &str, engines: &[EngineArg]) -> MemoryHost {
    let urls = vec!["about:blank"; tab_count.max(1)];
    engines.iter().fold(
        MemoryHost::with_tabs(BrowserInfo::new("Firefox", browser_version), &urls),
        |host, engine| host.with_engine(engine.0.clone()),
    )
}
