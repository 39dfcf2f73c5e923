use super::*;

#[test]
fn menu_item_decodes_full_row() {
    let row = serde_json::json!({
        "id": "a1",
        "name": "Mojito",
        "description": "Rum, mint, lime",
        "price": 8.5,
        "student_price": 7.0,
        "category_id": 3,
        "tags": ["rum", "classic"],
        "is_available": false,
        "image_url": null
    });
    let item: MenuItem = serde_json::from_value(row).unwrap();
    assert_eq!(item.name, "Mojito");
    assert_eq!(item.student_price, Some(7.0));
    assert_eq!(item.tags, vec!["rum".to_owned(), "classic".to_owned()]);
    assert!(!item.is_available);
    assert!(item.image_url.is_none());
}

#[test]
fn menu_item_normalizes_nulls_and_missing_fields() {
    let row = serde_json::json!({
        "id": "a2",
        "name": "Lager",
        "description": null,
        "price": 5,
        "category_id": 1,
        "tags": null
    });
    let item: MenuItem = serde_json::from_value(row).unwrap();
    assert_eq!(item.description, "");
    assert!(item.tags.is_empty());
    assert!(item.student_price.is_none());
    assert!(item.is_available);
}

#[test]
fn recipe_decodes_joined_row() {
    let row = serde_json::json!({
        "id": "r1",
        "menu_item_id": "a1",
        "ingredients": ["50ml rum", "mint"],
        "instructions": ["Muddle", "Stir"],
        "glass_type": "Highball",
        "garnish": null,
        "menu_item": {
            "id": "a1",
            "name": "Mojito",
            "description": "Fresh",
            "category_id": 3,
            "tags": ["rum"],
            "menu_categories": { "name": "Cocktails" }
        }
    });
    let recipe: Recipe = serde_json::from_value(row).unwrap();
    assert_eq!(recipe.category_name(), Some("Cocktails"));
    assert_eq!(recipe.ingredients.len(), 2);
    assert_eq!(recipe.glass_type.as_deref(), Some("Highball"));
    assert!(recipe.garnish.is_none());
}

#[test]
fn recipe_without_joined_category_has_no_category_name() {
    let row = serde_json::json!({
        "id": "r2",
        "menu_item_id": "a2",
        "ingredients": null,
        "instructions": [],
        "menu_item": { "id": "a2", "name": "Flat White", "menu_categories": null }
    });
    let recipe: Recipe = serde_json::from_value(row).unwrap();
    assert!(recipe.category_name().is_none());
    assert!(recipe.ingredients.is_empty());
}

#[test]
fn event_kind_uses_type_on_the_wire() {
    let event = Event {
        id: "1".to_owned(),
        title: "Quiz".to_owned(),
        description: "Weekly quiz".to_owned(),
        date: "Mon 1st".to_owned(),
        time: "7:00PM".to_owned(),
        kind: "Activity".to_owned(),
        ticketed: false,
        price: None,
    };
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["type"], "Activity");
    assert!(value.get("kind").is_none());
}

#[test]
fn inventory_alert_keeps_optional_end_date() {
    let row = serde_json::json!({
        "id": "x",
        "item_name": "Guinness",
        "message": "Out until Friday",
        "start_date": "2025-05-01",
        "end_date": null,
        "is_active": true
    });
    let alert: InventoryAlert = serde_json::from_value(row).unwrap();
    assert!(alert.end_date.is_none());
    assert_eq!(alert.start_date, "2025-05-01");
}
