//! Tab placement commands

use serde_json::{json, Value};

use omnibar_core::{
    plan, Config, ExecutionContext, Navigator, OpenOptions, Tab, TabId,
    TabPlacementPolicy, WindowId, DEFAULT_COOKIE_STORE_ID,
};

use super::{simulated_host, CommandResult};

pub fn place(
    policy: TabPlacementPolicy,
    related: bool,
    index: usize,
    id: u64,
    tab_count: usize,
    browser_version: u32,
) -> CommandResult<Value> {
    let current = Tab {
        id: TabId(id),
        index,
        window_id: WindowId(1),
        url: String::new(),
        active: true,
        cookie_store_id: DEFAULT_COOKIE_STORE_ID.to_string(),
        opener_tab_id: None,
    };

    let placement = plan(policy, related, &current, tab_count, browser_version);
    CommandResult::from_result::<_, serde_json::Error>(Ok(placement))
}

pub async fn tabopen(
    config: Config,
    url: &str,
    related: bool,
    active: bool,
    tab_count: usize,
    browser_version: &str,
) -> CommandResult<Value> {
    let host = simulated_host(tab_count, browser_version, &[]);
    let navigator = Navigator::new(host, config, ExecutionContext::Background);

    let options = OpenOptions {
        active,
        related,
        ..Default::default()
    };

    match navigator.open_in_new_tab(url, options).await {
        Ok(tab) => CommandResult::ok(json!({
            "tab": tab,
            "window": navigator.host().tabs(),
        })),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
