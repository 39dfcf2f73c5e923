//! URL query parameter codec for active filters.
//!
//! The page URL is the persisted form of the menu filter: it is read when the
//! page mounts or navigates and written when filters are applied or reset.
//! Inactive criteria are omitted so a reset URL is the bare path. Tags are
//! joined with [`TAG_SEPARATOR`], so a tag containing it is never selectable
//! (see [`crate::filter::is_selectable_tag`]).

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::filter::{MenuFilter, TAG_SEPARATOR};

pub const PARAM_QUERY: &str = "q";
pub const PARAM_CATEGORY: &str = "category";
pub const PARAM_TAGS: &str = "tags";
pub const PARAM_MIN_PRICE: &str = "minPrice";
pub const PARAM_MAX_PRICE: &str = "maxPrice";

/// Category value meaning "no category constraint".
pub const CATEGORY_ALL: &str = "all";

impl MenuFilter {
    /// Build a filter from decoded query values looked up by key.
    ///
    /// Unknown or malformed values are treated as absent: a non-numeric
    /// category or price imposes no constraint.
    pub fn from_params<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let category = get(PARAM_CATEGORY)
            .filter(|c| !c.is_empty() && c != CATEGORY_ALL)
            .and_then(|c| c.parse::<i64>().ok());
        let tags = get(PARAM_TAGS)
            .map(|raw| {
                raw.split(TAG_SEPARATOR)
                    .filter(|t| !t.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            query: get(PARAM_QUERY).unwrap_or_default(),
            category,
            min_price: parse_price(get(PARAM_MIN_PRICE)),
            max_price: parse_price(get(PARAM_MAX_PRICE)),
            tags,
        }
    }

    /// Active criteria as decoded key/value pairs, in a stable order.
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.query.is_empty() {
            params.push((PARAM_QUERY, self.query.clone()));
        }
        if let Some(category) = self.category {
            params.push((PARAM_CATEGORY, category.to_string()));
        }
        if !self.tags.is_empty() {
            params.push((PARAM_TAGS, self.tags.join(TAG_SEPARATOR)));
        }
        if let Some(min) = self.min_price {
            params.push((PARAM_MIN_PRICE, min.to_string()));
        }
        if let Some(max) = self.max_price {
            params.push((PARAM_MAX_PRICE, max.to_string()));
        }
        params
    }

    /// Percent-encoded query string without the leading `?`. Empty when no criterion is active.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        encode_pairs(&self.to_params())
    }
}

fn parse_price(raw: Option<String>) -> Option<f64> {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

fn encode_pairs(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// `path` with the filter's query string appended, or the bare path when the filter is empty.
#[must_use]
pub fn filter_href(path: &str, filter: &MenuFilter) -> String {
    with_query(path, &filter.to_query_string())
}

/// `path` carrying only a free-text search term, as the recipe page does.
#[must_use]
pub fn search_href(path: &str, query: &str) -> String {
    if query.is_empty() {
        return path.to_owned();
    }
    with_query(path, &encode_pairs(&[(PARAM_QUERY, query.to_owned())]))
}

fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_owned()
    } else {
        format!("{path}?{query}")
    }
}
