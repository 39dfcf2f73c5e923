//! Display records and API payloads.
//!
//! Rows arrive from a PostgREST backend, so nullable text and array columns
//! are normalized to empty values on decode. None of these records carry
//! invariants beyond their shape.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Deserializer, Serialize};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_true() -> bool {
    true
}

// =============================================================================
// MENU
// =============================================================================

/// A row of `menu_items`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub student_price: Option<f64>,
    pub category_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A row of `menu_categories`. `display_order` is only a sort key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub display_order: i32,
}

/// Everything the menu page needs, loaded in one request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuCatalog {
    pub categories: Vec<Category>,
    pub items: Vec<MenuItem>,
    /// Sorted, de-duplicated tags across `items`.
    pub tags: Vec<String>,
}

// =============================================================================
// RECIPES
// =============================================================================

/// Category name embedded in a joined recipe row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
}

/// The menu item a recipe belongs to, as embedded by the backend join.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecipeMenuItem {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub menu_categories: Option<CategoryRef>,
}

/// A row of `recipesbo` joined with its menu item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub menu_item_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub glass_type: Option<String>,
    #[serde(default)]
    pub garnish: Option<String>,
    pub menu_item: RecipeMenuItem,
}

impl Recipe {
    /// Name of the category the recipe's menu item belongs to, if joined.
    #[must_use]
    pub fn category_name(&self) -> Option<&str> {
        self.menu_item.menu_categories.as_ref().map(|c| c.name.as_str())
    }
}

// =============================================================================
// INFORMATION
// =============================================================================

/// A row of `daily_deals`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub day: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// A house policy. Policies are static content, not a backend collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub title: String,
    pub description: String,
}

/// A row of `inventory_alerts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryAlert {
    pub id: String,
    pub item_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// A one-off upcoming event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub ticketed: bool,
    #[serde(default)]
    pub price: Option<String>,
}

/// A recurring event on a fixed weekday.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyEvent {
    pub day: String,
    pub title: String,
    pub time: String,
    pub description: String,
}

/// Banner for the seasonal festival shown above the events.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Festival {
    pub title: String,
    pub dates: String,
    pub description: String,
}

/// Backend deals and alerts merged with the static information content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InformationBoard {
    pub deals: Vec<Deal>,
    pub alerts: Vec<InventoryAlert>,
    pub policies: Vec<Policy>,
    pub weekly_events: Vec<WeeklyEvent>,
    pub upcoming_events: Vec<Event>,
    pub festival: Festival,
    /// Collections that failed to load; their lists are left empty.
    #[serde(default)]
    pub unavailable: Vec<String>,
}
