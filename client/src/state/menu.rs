//! Menu page state.
//!
//! The catalog is fetched once per mount. The active filter is not stored
//! here: it lives in the URL and is re-read on every navigation, so this
//! struct only holds what the URL cannot (fetched data, open dialog, sheet).

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use catalog::filter::{MenuFilter, PRICE_SLIDER_MAX, filter_items, visible_categories};
use catalog::{MenuCatalog, MenuItem};

use super::ListView;

pub const ALL_ITEMS_LABEL: &str = "All Items";

#[derive(Clone, Debug, Default)]
pub struct MenuState {
    pub loading: bool,
    pub error: Option<String>,
    pub catalog: MenuCatalog,
    pub selected: Option<MenuItem>,
    pub sheet_open: bool,
}

impl MenuState {
    #[must_use]
    pub fn new() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Record a finished fetch.
    pub fn finish(&mut self, result: Result<MenuCatalog, String>) {
        self.loading = false;
        match result {
            Ok(catalog) => {
                self.catalog = catalog;
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }

    /// Category tabs: "All Items" first, then visible categories in display order.
    #[must_use]
    pub fn tabs(&self) -> Vec<MenuTab> {
        std::iter::once(MenuTab { category: None, label: ALL_ITEMS_LABEL.to_owned() })
            .chain(
                visible_categories(&self.catalog.categories)
                    .into_iter()
                    .map(|c| MenuTab { category: Some(c.id), label: c.name }),
            )
            .collect()
    }

    #[must_use]
    pub fn view(&self, filter: &MenuFilter) -> ListView<MenuItem> {
        let visible = filter_items(&self.catalog.items, filter);
        ListView::resolve(self.loading, self.error.as_deref(), self.catalog.items.len(), visible)
    }
}

/// One category tab. `category: None` is the "all items" tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuTab {
    pub category: Option<i64>,
    pub label: String,
}

impl MenuTab {
    /// Stable key for keyed rendering and the tab's DOM id.
    #[must_use]
    pub fn key(&self) -> String {
        self.category.map_or_else(|| "all".to_owned(), |id| id.to_string())
    }
}

/// The filter with its category replaced by `tab`'s, other criteria kept.
#[must_use]
pub fn with_tab(filter: &MenuFilter, tab: Option<i64>) -> MenuFilter {
    MenuFilter { category: tab, ..filter.clone() }
}

/// Label above the price slider, e.g. `£2 - £15`.
#[must_use]
pub fn price_range_label(low: f64, high: f64) -> String {
    format!("£{low} - £{high}")
}

/// Tick labels under the price slider.
#[must_use]
pub fn slider_marks() -> Vec<String> {
    (0..=4).map(|i| format!("£{}", f64::from(i) * PRICE_SLIDER_MAX / 4.0)).collect()
}

/// Which end of the price slider moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeHandle {
    Low,
    High,
}

/// Move one slider handle to `value`, never letting the handles cross.
#[must_use]
pub fn adjust_range((low, high): (f64, f64), handle: RangeHandle, value: f64) -> (f64, f64) {
    let value = value.clamp(0.0, PRICE_SLIDER_MAX);
    match handle {
        RangeHandle::Low => (value.min(high), high),
        RangeHandle::High => (low, value.max(low)),
    }
}

/// Filter sheet "Reset": every criterion cleared, search text included, so
/// the page navigates back to its bare path.
#[must_use]
pub fn reset_sheet() -> MenuFilter {
    MenuFilter::default()
}
