#![allow(clippy::float_cmp)]

use super::*;

fn item(id: &str, name: &str, price: f64, category_id: i64, tags: &[&str]) -> MenuItem {
    MenuItem {
        id: id.to_owned(),
        name: name.to_owned(),
        description: String::new(),
        price,
        student_price: None,
        category_id,
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        is_available: true,
        image_url: None,
    }
}

fn bar_menu() -> Vec<MenuItem> {
    let mut espresso = item("4", "Espresso Martini", 9.0, 2, &["vodka", "coffee"]);
    espresso.description = "Vodka shaken with fresh COFFEE".to_owned();
    vec![
        item("1", "Mojito", 8.0, 2, &["rum"]),
        item("2", "Lager", 5.0, 1, &["beer"]),
        item("3", "Loaded Fries", 6.5, 3, &[]),
        espresso,
        item("5", "Cider", 4.5, 1, &["cider", "beer"]),
        item("6", "Sharing Platter", 24.0, 3, &["sharer"]),
    ]
}

fn names(items: &[MenuItem]) -> Vec<&str> {
    items.iter().map(|i| i.name.as_str()).collect()
}

// =============================================================
// Criteria
// =============================================================

#[test]
fn price_range_example_keeps_only_lager() {
    let items = vec![item("1", "Mojito", 8.0, 2, &["rum"]), item("2", "Lager", 5.0, 1, &["beer"])];
    let filter = MenuFilter { min_price: Some(0.0), max_price: Some(6.0), ..Default::default() };
    assert_eq!(names(&filter_items(&items, &filter)), vec!["Lager"]);
}

#[test]
fn default_filter_is_identity() {
    let items = bar_menu();
    let filter = MenuFilter::default();
    assert!(filter.is_empty());
    assert_eq!(filter_items(&items, &filter), items);
}

#[test]
fn text_matches_name_case_insensitively() {
    let filter = MenuFilter { query: "MOJ".to_owned(), ..Default::default() };
    assert_eq!(names(&filter_items(&bar_menu(), &filter)), vec!["Mojito"]);
}

#[test]
fn text_matches_description() {
    let filter = MenuFilter { query: "coffee".to_owned(), ..Default::default() };
    assert_eq!(names(&filter_items(&bar_menu(), &filter)), vec!["Espresso Martini"]);
}

#[test]
fn category_requires_exact_id() {
    let filter = MenuFilter { category: Some(1), ..Default::default() };
    assert_eq!(names(&filter_items(&bar_menu(), &filter)), vec!["Lager", "Cider"]);
}

#[test]
fn price_bounds_are_inclusive() {
    let filter = MenuFilter { min_price: Some(4.5), max_price: Some(8.0), ..Default::default() };
    assert_eq!(
        names(&filter_items(&bar_menu(), &filter)),
        vec!["Mojito", "Lager", "Loaded Fries", "Cider"]
    );
}

#[test]
fn single_price_bound_leaves_other_side_open() {
    let filter = MenuFilter { min_price: Some(9.0), ..Default::default() };
    assert_eq!(names(&filter_items(&bar_menu(), &filter)), vec!["Espresso Martini", "Sharing Platter"]);
}

#[test]
fn any_selected_tag_matches() {
    let filter = MenuFilter { tags: vec!["rum".to_owned(), "cider".to_owned()], ..Default::default() };
    assert_eq!(names(&filter_items(&bar_menu(), &filter)), vec!["Mojito", "Cider"]);
}

#[test]
fn untagged_item_never_matches_tag_selection() {
    let filter = MenuFilter { tags: vec!["sharer".to_owned()], ..Default::default() };
    let result = filter_items(&bar_menu(), &filter);
    assert!(!names(&result).contains(&"Loaded Fries"));
}

#[test]
fn criteria_combine_with_and() {
    let filter = MenuFilter {
        query: "er".to_owned(),
        category: Some(1),
        max_price: Some(5.0),
        tags: vec!["beer".to_owned()],
        ..Default::default()
    };
    assert_eq!(names(&filter_items(&bar_menu(), &filter)), vec!["Lager", "Cider"]);
}

#[test]
fn price_then_tags_equals_tags_then_price() {
    let items = bar_menu();
    let by_price = MenuFilter { min_price: Some(4.0), max_price: Some(9.0), ..Default::default() };
    let by_tags = MenuFilter { tags: vec!["beer".to_owned(), "vodka".to_owned()], ..Default::default() };

    let price_first = filter_items(&filter_items(&items, &by_price), &by_tags);
    let tags_first = filter_items(&filter_items(&items, &by_tags), &by_price);
    assert_eq!(price_first, tags_first);
    assert_eq!(names(&price_first), vec!["Lager", "Espresso Martini", "Cider"]);
}

#[test]
fn filtering_preserves_input_order() {
    let filter = MenuFilter { max_price: Some(10.0), ..Default::default() };
    let result = filter_items(&bar_menu(), &filter);
    let ids: Vec<&str> = result.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
}

// =============================================================
// Slider and tag selection
// =============================================================

#[test]
fn full_slider_range_clears_bounds() {
    let mut filter = MenuFilter { min_price: Some(2.0), max_price: Some(5.0), ..Default::default() };
    filter.set_slider_range(0.0, PRICE_SLIDER_MAX);
    assert!(filter.min_price.is_none());
    assert!(filter.max_price.is_none());
    assert_eq!(filter.slider_range(), (0.0, PRICE_SLIDER_MAX));
}

#[test]
fn narrowed_slider_range_sets_both_bounds() {
    let mut filter = MenuFilter::default();
    filter.set_slider_range(0.0, 12.0);
    assert_eq!(filter.min_price, Some(0.0));
    assert_eq!(filter.max_price, Some(12.0));
}

#[test]
fn toggle_tag_adds_then_removes() {
    let mut filter = MenuFilter::default();
    filter.toggle_tag("rum");
    filter.toggle_tag("gin");
    assert_eq!(filter.tags, vec!["rum".to_owned(), "gin".to_owned()]);
    filter.toggle_tag("rum");
    assert_eq!(filter.tags, vec!["gin".to_owned()]);
}

// =============================================================
// Derived collections
// =============================================================

#[test]
fn unique_tags_are_sorted_and_deduplicated() {
    assert_eq!(
        unique_tags(&bar_menu()),
        vec!["beer", "cider", "coffee", "rum", "sharer", "vodka"]
    );
}

#[test]
fn tags_containing_the_separator_are_not_offered() {
    let items = vec![item("1", "Dark & Stormy", 8.0, 2, &["rum, dark", "ginger"])];
    assert_eq!(unique_tags(&items), vec!["ginger"]);
    assert!(!is_selectable_tag("rum, dark"));
    assert!(!is_selectable_tag(""));
}

#[test]
fn visible_categories_hide_food_and_offers_and_sort() {
    let categories = vec![
        Category { id: 1, name: "Beers".to_owned(), display_order: 3 },
        Category { id: 2, name: "Food".to_owned(), display_order: 1 },
        Category { id: 3, name: "Cocktails".to_owned(), display_order: 2 },
        Category { id: 4, name: "Special Offers".to_owned(), display_order: 0 },
    ];
    let visible = visible_categories(&categories);
    let names: Vec<&str> = visible.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Cocktails", "Beers"]);
}
