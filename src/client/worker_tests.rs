//! Tests for the search worker

use std::time::Duration;

use super::*;
use crate::suggest::{SearchScope, SuggestionKind};
use crate::test_utils::test_helpers::{FakeBackend, bill, member};

const WAIT: Duration = Duration::from_secs(2);

fn request(field_id: &str, request_id: u64, query: &str) -> SearchRequest {
    SearchRequest {
        field_id: field_id.to_string(),
        request_id,
        query: query.to_string(),
        scope: SearchScope::All,
    }
}

#[test]
fn test_worker_returns_grouped_results() {
    let backend = FakeBackend::new()
        .with(SuggestionKind::Member, "김", vec![member(1, "김민수", Some("더불어민주당"))])
        .with(SuggestionKind::Bill, "김", vec![bill(2, "김치산업 진흥법")]);
    let worker = spawn_worker(backend).unwrap();

    assert!(worker.submit(request("searchInput", 1, "김")));
    let outcome = worker.recv_timeout(WAIT).expect("worker should answer");

    assert_eq!(outcome.field_id, "searchInput");
    assert_eq!(outcome.request_id, 1);
    let results = outcome.result.unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results.item(0).unwrap().name, "김민수");
    worker.shutdown();
}

#[test]
fn test_worker_reports_failures() {
    let backend = FakeBackend::new().failing(SuggestionKind::Member, "down");
    let worker = spawn_worker(backend).unwrap();

    worker.submit(request("searchInput", 1, "김"));
    let outcome = worker.recv_timeout(WAIT).unwrap();

    assert!(matches!(outcome.result, Err(SuggestError::Network(_))));
    worker.shutdown();
}

#[test]
fn test_newer_request_cancels_older_for_same_field() {
    let backend = FakeBackend::new()
        .delayed("느린", Duration::from_millis(400))
        .with(SuggestionKind::Member, "빠른", vec![member(1, "빠른사람", None)]);
    let worker = spawn_worker(backend).unwrap();

    worker.submit(request("searchInput", 1, "느린"));
    worker.submit(request("searchInput", 2, "빠른"));

    let outcome = worker.recv_timeout(WAIT).unwrap();
    assert_eq!(outcome.request_id, 2);
    assert!(worker.recv_timeout(Duration::from_millis(700)).is_none());
    worker.shutdown();
}

#[test]
fn test_fields_do_not_cancel_each_other() {
    let backend = FakeBackend::new().delayed("느린", Duration::from_millis(100));
    let worker = spawn_worker(backend).unwrap();

    worker.submit(request("searchInput", 1, "느린"));
    worker.submit(request("target_law", 1, "빠른"));

    let mut fields = vec![
        worker.recv_timeout(WAIT).unwrap().field_id,
        worker.recv_timeout(WAIT).unwrap().field_id,
    ];
    fields.sort();
    assert_eq!(fields, vec!["searchInput".to_string(), "target_law".to_string()]);
    worker.shutdown();
}

#[test]
fn test_cancel_drops_in_flight_search() {
    let backend = FakeBackend::new().delayed("느린", Duration::from_millis(300));
    let worker = spawn_worker(backend).unwrap();

    worker.submit(request("searchInput", 1, "느린"));
    worker.cancel("searchInput");

    assert!(worker.recv_timeout(Duration::from_millis(600)).is_none());
    worker.shutdown();
}

#[test]
fn test_try_recv_empty_when_idle() {
    let worker = spawn_worker(FakeBackend::new()).unwrap();
    assert!(worker.try_recv().is_none());
    worker.shutdown();
}

#[test]
fn test_worker_shuts_down_when_channel_closed() {
    let worker = spawn_worker(FakeBackend::new()).unwrap();
    // shutdown joins the thread; returning at all means the loop exited
    worker.shutdown();
}
