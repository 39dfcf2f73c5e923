//! Menu filter criteria and predicates.
//!
//! Each criterion is independent and absent criteria impose no constraint.
//! Active criteria combine with logical AND, so applying them in any order
//! yields the same subset. Filtering is a linear scan that preserves input
//! order; menus are tens of items.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use std::collections::BTreeSet;

use crate::model::{Category, MenuItem};

/// Upper end of the price slider, in pounds.
pub const PRICE_SLIDER_MAX: f64 = 20.0;

/// Categories that never get their own menu tab.
pub const HIDDEN_CATEGORIES: &[&str] = &["Food", "Special Offers"];

/// Active menu filter criteria.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuFilter {
    /// Free-text search over name and description. Empty means no constraint.
    pub query: String,
    /// Exact `category_id` match.
    pub category: Option<i64>,
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    pub max_price: Option<f64>,
    /// Item must carry at least one of these. Empty means no constraint.
    pub tags: Vec<String>,
}

impl MenuFilter {
    /// Whether no criterion is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && self.category.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.tags.is_empty()
    }

    /// Whether `item` satisfies every active criterion.
    #[must_use]
    pub fn matches(&self, item: &MenuItem) -> bool {
        self.matches_text(item)
            && self.matches_category(item)
            && self.matches_price(item)
            && self.matches_tags(item)
    }

    fn matches_text(&self, item: &MenuItem) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        contains_folded(&item.name, &needle) || contains_folded(&item.description, &needle)
    }

    fn matches_category(&self, item: &MenuItem) -> bool {
        self.category.is_none_or(|id| item.category_id == id)
    }

    fn matches_price(&self, item: &MenuItem) -> bool {
        self.min_price.is_none_or(|min| item.price >= min) && self.max_price.is_none_or(|max| item.price <= max)
    }

    fn matches_tags(&self, item: &MenuItem) -> bool {
        self.tags.is_empty() || self.tags.iter().any(|tag| item.tags.contains(tag))
    }

    /// Apply a `[low, high]` slider selection.
    ///
    /// The full slider span clears both bounds; anything narrower sets both.
    pub fn set_slider_range(&mut self, low: f64, high: f64) {
        if low > 0.0 || high < PRICE_SLIDER_MAX {
            self.min_price = Some(low);
            self.max_price = Some(high);
        } else {
            self.min_price = None;
            self.max_price = None;
        }
    }

    /// Current bounds as a slider selection, filling absent bounds with the slider ends.
    #[must_use]
    pub fn slider_range(&self) -> (f64, f64) {
        (
            self.min_price.unwrap_or(0.0),
            self.max_price.unwrap_or(PRICE_SLIDER_MAX),
        )
    }

    /// Add `tag` to the selection, or remove it if already selected.
    ///
    /// Tags that cannot be written to the URL are ignored.
    pub fn toggle_tag(&mut self, tag: &str) {
        if !is_selectable_tag(tag) {
            return;
        }
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_owned());
        }
    }
}

/// Case-insensitive containment where `needle` is already lowercased.
pub(crate) fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Items satisfying `filter`, in input order.
#[must_use]
pub fn filter_items(items: &[MenuItem], filter: &MenuFilter) -> Vec<MenuItem> {
    items.iter().filter(|item| filter.matches(item)).cloned().collect()
}

/// Separator between selected tags in the `tags` URL parameter.
pub const TAG_SEPARATOR: &str = ",";

/// Whether `tag` survives the `tags` URL parameter, i.e. can be offered in the tag picker.
#[must_use]
pub fn is_selectable_tag(tag: &str) -> bool {
    !tag.is_empty() && !tag.contains(TAG_SEPARATOR)
}

/// Sorted, de-duplicated union of every item's selectable tags.
#[must_use]
pub fn unique_tags(items: &[MenuItem]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| item.tags.iter().filter(|t| is_selectable_tag(t)).cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Categories that get a menu tab, sorted by `display_order`.
#[must_use]
pub fn visible_categories(categories: &[Category]) -> Vec<Category> {
    let mut visible: Vec<Category> = categories
        .iter()
        .filter(|c| !HIDDEN_CATEGORIES.contains(&c.name.as_str()))
        .cloned()
        .collect();
    visible.sort_by_key(|c| c.display_order);
    visible
}
