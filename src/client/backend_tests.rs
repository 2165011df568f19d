//! Tests for run_search

use std::time::Duration;

use super::*;
use crate::test_utils::test_helpers::{FakeBackend, bill, member};

fn request(query: &str, scope: SearchScope) -> SearchRequest {
    SearchRequest {
        field_id: "searchInput".to_string(),
        request_id: 1,
        query: query.to_string(),
        scope,
    }
}

#[tokio::test]
async fn test_all_scope_groups_members_then_bills() {
    let backend = FakeBackend::new()
        .with(SuggestionKind::Member, "김", vec![member(1, "김민수", Some("더불어민주당"))])
        .with(SuggestionKind::Bill, "김", vec![bill(9, "김치산업 진흥법")]);

    let results = run_search(&backend, &request("김", SearchScope::All)).await.unwrap();

    let names: Vec<&str> = results.items().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["김민수", "김치산업 진흥법"]);
    assert_eq!(results.groups().len(), 2);
}

#[tokio::test]
async fn test_member_only_hit_yields_single_group() {
    let backend = FakeBackend::new()
        .with(SuggestionKind::Member, "김", vec![member(1, "김민수", Some("더불어민주당"))]);

    let results = run_search(&backend, &request("김", SearchScope::All)).await.unwrap();

    assert_eq!(results.groups().len(), 1);
    assert_eq!(results.groups()[0].label, "국회의원");
    assert_eq!(results.item(0).unwrap().display, "김민수 (더불어민주당)");
}

#[tokio::test]
async fn test_no_hits_is_empty() {
    let backend = FakeBackend::new();
    let results = run_search(&backend, &request("없음", SearchScope::All)).await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_bills_scope_only_queries_bills() {
    let backend = FakeBackend::new()
        .with(SuggestionKind::Member, "민법", vec![member(1, "민법학자", None)])
        .with(SuggestionKind::Bill, "민법", vec![bill(2, "민법 일부개정법률안")]);

    let results = run_search(&backend, &request("민법", SearchScope::Bills)).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(backend.calls(), vec![(SuggestionKind::Bill, "민법".to_string())]);
}

#[tokio::test]
async fn test_members_scope_only_queries_members() {
    let backend = FakeBackend::new();
    run_search(&backend, &request("이", SearchScope::Members)).await.unwrap();
    assert_eq!(backend.calls(), vec![(SuggestionKind::Member, "이".to_string())]);
}

#[tokio::test]
async fn test_one_failing_lookup_fails_search() {
    let backend = FakeBackend::new()
        .with(SuggestionKind::Member, "김", vec![member(1, "김민수", None)])
        .failing(SuggestionKind::Bill, "bills endpoint down");

    let result = run_search(&backend, &request("김", SearchScope::All)).await;
    assert!(matches!(result, Err(SuggestError::Network(msg)) if msg.contains("bills")));
}

#[tokio::test(start_paused = true)]
async fn test_all_scope_lookups_run_concurrently() {
    let backend = FakeBackend::new().delayed("느림", Duration::from_millis(500));

    let started = tokio::time::Instant::now();
    run_search(&backend, &request("느림", SearchScope::All)).await.unwrap();

    // Two 500ms lookups joined together take ~500ms, not ~1000ms.
    assert!(started.elapsed() < Duration::from_millis(900));
    assert_eq!(backend.calls().len(), 2);
}
