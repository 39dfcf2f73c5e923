//! Menu catalog loading.
//!
//! Categories and items are fetched together and returned as one
//! [`MenuCatalog`]; the tag list is derived from the items so the filter
//! sheet never offers a tag with no matching item.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use catalog::filter::unique_tags;
use catalog::{Category, MenuCatalog, MenuItem};

use super::collections::{MENU_CATEGORIES, MENU_ITEMS};
use crate::backend::{Backend, BackendError, Select, fetch};

fn categories_query() -> Select {
    Select::from(MENU_CATEGORIES).order("display_order")
}

fn items_query() -> Select {
    Select::from(MENU_ITEMS)
}

/// Load every category and item.
///
/// # Errors
///
/// Fails if either collection cannot be fetched or decoded.
pub async fn load_catalog(backend: &dyn Backend) -> Result<MenuCatalog, BackendError> {
    let categories_q = categories_query();
    let items_q = items_query();
    let (categories, items) = tokio::try_join!(
        fetch::<Category>(backend, &categories_q),
        fetch::<MenuItem>(backend, &items_q),
    )?;
    let tags = unique_tags(&items);
    tracing::debug!(categories = categories.len(), items = items.len(), tags = tags.len(), "menu catalog loaded");
    Ok(MenuCatalog { categories, items, tags })
}
