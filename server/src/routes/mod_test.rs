use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;
use crate::services::collections::MENU_ITEMS;
use crate::state::test_helpers::{MockBackend, test_app_state};

#[tokio::test]
async fn healthz_is_ok() {
    let (state, _) = test_app_state(MockBackend::new());
    let response = api_routes(state)
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn menu_route_serves_catalog_json() {
    let backend = MockBackend::new().with_rows(
        MENU_ITEMS,
        vec![
            serde_json::json!({"id": "1", "name": "Gin Fizz", "price": 7.0, "category_id": 1, "tags": ["gin"]}),
            serde_json::json!({"id": "2", "name": "Cider", "price": 4.0, "category_id": 2, "tags": ["apple"]}),
        ],
    );
    let (state, _) = test_app_state(backend);
    let response = api_routes(state)
        .oneshot(Request::builder().uri("/api/menu").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let catalog: catalog::MenuCatalog = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(catalog.items.len(), 2);
    assert_eq!(catalog.tags, vec!["apple".to_owned(), "gin".to_owned()]);
}

#[tokio::test]
async fn menu_items_subpath_is_not_served() {
    let (state, _) = test_app_state(MockBackend::new());
    let response = api_routes(state)
        .oneshot(Request::builder().uri("/api/menu/items?q=gin").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_api_path_is_not_found() {
    let (state, _) = test_app_state(MockBackend::new());
    let response = api_routes(state)
        .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
