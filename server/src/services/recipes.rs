//! Recipe loading.
//!
//! Recipes are stored in `recipesbo` and joined with their menu item and
//! its category name. A recipe whose menu item was deleted comes back with a
//! null join; those rows are dropped rather than failing the whole page.

#[cfg(test)]
#[path = "recipes_test.rs"]
mod recipes_test;

use catalog::Recipe;

use super::collections::RECIPES;
use crate::backend::{Backend, BackendError, Row, Select};

const RECIPE_COLUMNS: &str = "*, menu_item:menu_item_id (
    id, name, description, category_id, tags,
    menu_categories:category_id (name)
)";

fn recipes_query() -> Select {
    Select::from(RECIPES).columns(RECIPE_COLUMNS)
}

fn has_menu_item(row: &Row) -> bool {
    row.get("menu_item").is_some_and(|item| !item.is_null())
}

/// Load every recipe with a live menu item, in backend order.
///
/// # Errors
///
/// Fails if the collection cannot be fetched or a joined row does not decode.
pub async fn load_recipes(backend: &dyn Backend) -> Result<Vec<Recipe>, BackendError> {
    let rows = backend.select(&recipes_query()).await?;
    let total = rows.len();
    let rows: Vec<Row> = rows.into_iter().filter(has_menu_item).collect();
    if rows.len() < total {
        tracing::warn!(dropped = total - rows.len(), "recipes without a menu item skipped");
    }
    Ok(catalog::decode_rows(RECIPES, rows)?)
}
