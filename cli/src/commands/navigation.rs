//! Address resolution commands

use serde_json::Value;

use omnibar_core::{
    classify, AddressQuery, Config, ExecutionContext, Navigator, SearchEngine, UpdateProperties,
};

use super::{simulated_host, CommandResult, EngineArg};

fn engines(args: &[EngineArg]) -> Vec<SearchEngine> {
    args.iter().map(|arg| arg.0.clone()).collect()
}

pub fn resolve(config: &Config, engine_args: &[EngineArg], query: &[String]) -> CommandResult<Value> {
    let query = AddressQuery::from_args(query);
    let classified = classify(
        query.as_str(),
        &config.classifier_config(),
        &engines(engine_args),
    );
    CommandResult::from_result::<_, serde_json::Error>(Ok(classified))
}

pub async fn open(
    config: Config,
    engine_args: &[EngineArg],
    tab_count: usize,
    query: &[String],
) -> CommandResult<Value> {
    let host = simulated_host(tab_count, "128.0", engine_args);
    let navigator = Navigator::new(host, config, ExecutionContext::Background);

    let result = async {
        let tab = navigator.active_tab().await?;
        navigator
            .open_in_tab(&tab, UpdateProperties::default(), query)
            .await
    }
    .await;

    CommandResult::from_result(result)
}
