use super::*;
use crate::model::{CategoryRef, RecipeMenuItem};

fn recipe(id: &str, name: &str, category: Option<&str>, ingredients: &[&str]) -> Recipe {
    Recipe {
        id: id.to_owned(),
        menu_item_id: format!("m-{id}"),
        ingredients: ingredients.iter().map(|i| (*i).to_owned()).collect(),
        instructions: vec!["Build over ice".to_owned()],
        glass_type: None,
        garnish: None,
        menu_item: RecipeMenuItem {
            id: format!("m-{id}"),
            name: name.to_owned(),
            description: format!("House {name}"),
            category_id: Some(1),
            tags: Vec::new(),
            menu_categories: category.map(|name| CategoryRef { name: name.to_owned() }),
        },
    }
}

fn shelf() -> Vec<Recipe> {
    vec![
        recipe("1", "Mojito", Some("Cocktails"), &["White rum", "Mint", "Lime"]),
        recipe("2", "Virgin Colada", Some("Mocktails"), &["Pineapple", "Coconut cream"]),
        recipe("3", "Flat White", Some("Coffee"), &["Espresso", "Steamed milk"]),
        recipe("4", "Mystery Shot", None, &["Sambuca"]),
    ]
}

fn ids(recipes: &[Recipe]) -> Vec<&str> {
    recipes.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn tab_ids_and_labels_are_fixed() {
    let ids: Vec<&str> = RecipeTab::ALL.iter().map(|t| t.id()).collect();
    assert_eq!(ids, vec!["all", "cocktails", "mocktails", "hot_drinks"]);
    assert_eq!(RecipeTab::HotDrinks.label(), "Hot Drinks");
    assert_eq!(RecipeTab::default(), RecipeTab::All);
}

#[test]
fn hot_drinks_tab_maps_to_coffee_category() {
    assert_eq!(RecipeTab::HotDrinks.category_name(), Some("Coffee"));
    assert_eq!(ids(&filter_recipes(&shelf(), "", RecipeTab::HotDrinks)), vec!["3"]);
}

#[test]
fn all_tab_includes_uncategorized_recipes() {
    assert_eq!(ids(&filter_recipes(&shelf(), "", RecipeTab::All)), vec!["1", "2", "3", "4"]);
    assert!(!RecipeTab::Cocktails.matches(&shelf()[3]));
}

#[test]
fn search_covers_ingredients_case_insensitively() {
    assert_eq!(ids(&filter_recipes(&shelf(), "MINT", RecipeTab::All)), vec!["1"]);
    assert_eq!(ids(&filter_recipes(&shelf(), "milk", RecipeTab::All)), vec!["3"]);
}

#[test]
fn search_covers_name_and_description() {
    assert_eq!(ids(&filter_recipes(&shelf(), "colada", RecipeTab::All)), vec!["2"]);
    assert_eq!(ids(&filter_recipes(&shelf(), "house", RecipeTab::All)).len(), 4);
}

#[test]
fn search_and_tab_combine() {
    assert!(filter_recipes(&shelf(), "mint", RecipeTab::Mocktails).is_empty());
    assert_eq!(ids(&filter_recipes(&shelf(), "co", RecipeTab::Mocktails)), vec!["2"]);
}
