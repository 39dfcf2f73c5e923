use serde_json::json;

use super::*;
use crate::state::test_helpers::MockBackend;

fn deal(id: &str, day: &str) -> serde_json::Value {
    json!({"id": id, "title": format!("Deal {id}"), "description": "Half price", "day": day, "is_active": true})
}

fn alert(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "item_name": "Guinness",
        "message": "Line cleaning",
        "start_date": "2026-05-01",
        "end_date": null,
        "is_active": true,
    })
}

#[tokio::test]
async fn board_merges_backend_and_static_content() {
    let backend = MockBackend::new()
        .with_rows(DAILY_DEALS, vec![deal("1", "Monday"), deal("2", "Friday")])
        .with_rows(INVENTORY_ALERTS, vec![alert("a")]);
    let board = load_board(&backend).await;
    assert_eq!(board.deals.len(), 2);
    assert_eq!(board.alerts.len(), 1);
    assert_eq!(board.policies.len(), 5);
    assert!(board.unavailable.is_empty());
}

#[tokio::test]
async fn only_active_rows_are_requested_in_order() {
    let backend = MockBackend::new();
    load_board(&backend).await;
    let calls = backend.calls();
    let deals = calls.iter().find(|c| c[0].1 == DAILY_DEALS).unwrap();
    assert!(deals.contains(&("is_active".to_owned(), "eq.true".to_owned())));
    assert!(deals.contains(&("order".to_owned(), "day.asc".to_owned())));
    let alerts = calls.iter().find(|c| c[0].1 == INVENTORY_ALERTS).unwrap();
    assert!(alerts.contains(&("order".to_owned(), "start_date.desc".to_owned())));
}

#[tokio::test]
async fn failed_collection_degrades_independently() {
    let backend = MockBackend::new()
        .with_rows(DAILY_DEALS, vec![deal("1", "Monday")])
        .with_failure(INVENTORY_ALERTS, 500, "boom");
    let board = load_board(&backend).await;
    assert_eq!(board.deals.len(), 1);
    assert!(board.alerts.is_empty());
    assert_eq!(board.unavailable, vec![INVENTORY_ALERTS.to_owned()]);
    assert_eq!(board.weekly_events.len(), 6);
}

#[tokio::test]
async fn malformed_rows_mark_collection_unavailable() {
    let backend = MockBackend::new().with_rows(DAILY_DEALS, vec![json!({"title": "no id"})]);
    let board = load_board(&backend).await;
    assert!(board.deals.is_empty());
    assert_eq!(board.unavailable, vec![DAILY_DEALS.to_owned()]);
}
