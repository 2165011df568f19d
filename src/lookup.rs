//! One-shot lookup for the `lookup` subcommand

use serde_json::{Value, json};

use crate::client::{HttpBackend, LookupBackend, run_search};
use crate::config::Config;
use crate::error::SuggestError;
use crate::suggest::{GroupedResults, SearchRequest, SearchScope};

const LOOKUP_FIELD_ID: &str = "lookup";

/// Run a single search against the configured API
pub fn lookup(
    config: &Config,
    query: &str,
    scope: SearchScope,
) -> Result<GroupedResults, SuggestError> {
    let backend = HttpBackend::from_config(&config.api)?;
    log::info!("looking up {:?} ({}) at {}", query, scope, backend.base_url());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(search_once(&backend, query, scope))
}

pub async fn search_once<B: LookupBackend>(
    backend: &B,
    query: &str,
    scope: SearchScope,
) -> Result<GroupedResults, SuggestError> {
    let request = SearchRequest {
        field_id: LOOKUP_FIELD_ID.to_string(),
        request_id: 1,
        query: query.trim().to_string(),
        scope,
    };
    if request.query.is_empty() {
        return Ok(GroupedResults::default());
    }
    run_search(backend, &request).await
}

/// Sections with one indented row per suggestion and its detail route
pub fn format_text(results: &GroupedResults) -> String {
    if results.is_empty() {
        return "No suggestions\n".to_string();
    }

    let mut out = String::new();
    for group in results.groups() {
        out.push_str(group.label);
        out.push('\n');
        for item in &group.items {
            out.push_str(&format!(
                "  {} {}  {}\n",
                item.kind.icon(),
                item.display,
                item.detail_route()
            ));
        }
    }
    out
}

pub fn format_json(query: &str, scope: SearchScope, results: &GroupedResults) -> Value {
    let groups: Vec<Value> = results
        .groups()
        .iter()
        .map(|group| {
            json!({
                "type": group.kind,
                "label": group.label,
                "items": group.items,
            })
        })
        .collect();

    json!({
        "query": query,
        "scope": scope.to_string(),
        "groups": groups,
    })
}

#[cfg(test)]
#[path = "lookup_tests.rs"]
mod lookup_tests;
