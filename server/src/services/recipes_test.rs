use serde_json::json;

use super::*;
use crate::state::test_helpers::MockBackend;

fn row(id: &str, menu_item: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "menu_item_id": format!("m-{id}"),
        "ingredients": ["Gin", "Tonic"],
        "instructions": null,
        "glass_type": "Highball",
        "garnish": null,
        "menu_item": menu_item,
    })
}

fn joined(name: &str, category: Option<&str>) -> serde_json::Value {
    json!({
        "id": "m",
        "name": name,
        "description": "House serve",
        "category_id": 1,
        "tags": null,
        "menu_categories": category.map(|c| json!({"name": c})),
    })
}

#[tokio::test]
async fn recipes_decode_with_joined_category() {
    let backend = MockBackend::new().with_rows(RECIPES, vec![row("1", joined("G&T", Some("Cocktails")))]);
    let recipes = load_recipes(&backend).await.unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].menu_item.name, "G&T");
    assert_eq!(recipes[0].category_name(), Some("Cocktails"));
    assert!(recipes[0].instructions.is_empty());
}

#[tokio::test]
async fn rows_without_menu_item_are_skipped() {
    let backend = MockBackend::new().with_rows(
        RECIPES,
        vec![row("1", serde_json::Value::Null), row("2", joined("Latte", None)), json!({"id": "3", "menu_item_id": "m"})],
    );
    let recipes = load_recipes(&backend).await.unwrap();
    let ids: Vec<&str> = recipes.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["2"]);
}

#[tokio::test]
async fn query_requests_the_join() {
    let backend = MockBackend::new();
    load_recipes(&backend).await.unwrap();
    let calls = backend.calls();
    let select = calls[0].iter().find(|(k, _)| k == "select").map(|(_, v)| v.clone()).unwrap();
    assert!(select.starts_with("*,menu_item:menu_item_id(id,name"));
    assert!(select.contains("menu_categories:category_id(name)"));
}

#[tokio::test]
async fn backend_failure_propagates() {
    let backend = MockBackend::new().with_failure(RECIPES, 404, "missing");
    assert!(load_recipes(&backend).await.is_err());
}
