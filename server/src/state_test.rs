use super::test_helpers::{MockBackend, test_app_state};
use crate::backend::{BackendError, Select};

#[tokio::test]
async fn mock_answers_unknown_collections_with_no_rows() {
    let (state, _) = test_app_state(MockBackend::new());
    let rows = state.backend.select(&Select::from("menu_items")).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn mock_records_calls_and_fails_on_request() {
    let (state, mock) = test_app_state(MockBackend::new().with_failure("daily_deals", 503, "down"));
    let err = state.backend.select(&Select::from("daily_deals").eq("is_active", true)).await.unwrap_err();
    assert!(matches!(err, BackendError::Response { status: 503, .. }));
    let calls = mock.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0][0], ("collection".to_owned(), "daily_deals".to_owned()));
    assert!(calls[0].contains(&("is_active".to_owned(), "eq.true".to_owned())));
}

#[test]
fn state_clones_share_backend() {
    let (state, mock) = test_app_state(MockBackend::new());
    let cloned = state.clone();
    assert_eq!(std::sync::Arc::strong_count(&mock), 3);
    drop(cloned);
    assert_eq!(std::sync::Arc::strong_count(&mock), 2);
}
