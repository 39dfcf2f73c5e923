//! Shared domain model and browse logic for the Bar One site.
//!
//! This crate owns the record types exchanged between `server` and `client`
//! and every piece of logic that decides what a visitor sees: menu filter
//! predicates, the URL query codec that persists them, recipe search and tab
//! remapping, information-board items and the per-kind detail fields shown in
//! dialogs. It has no browser or network dependencies so both sides can use
//! it, and so it can be tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | Display records and API payloads |
//! | [`filter`] | Menu filter criteria and predicates |
//! | [`query`] | URL query parameter codec for active filters |
//! | [`recipe`] | Recipe search and category tab remap |
//! | [`info`] | Information-board items, tabs and static content |
//! | [`detail`] | Field selection for detail dialogs |

pub mod detail;
pub mod filter;
pub mod info;
pub mod model;
pub mod query;
pub mod recipe;

pub use model::{
    Category, CategoryRef, Deal, Event, Festival, InformationBoard, InventoryAlert, MenuCatalog, MenuItem, Policy,
    Recipe, RecipeMenuItem, WeeklyEvent,
};

/// Error returned when backend rows cannot be turned into display records.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A row did not match the expected record shape.
    #[error("failed to decode {collection} row {index}: {source}")]
    Decode {
        collection: String,
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Decode raw JSON rows from `collection` into typed records.
///
/// # Errors
///
/// Returns [`CatalogError::Decode`] naming the first row that does not match `T`.
pub fn decode_rows<T: serde::de::DeserializeOwned>(
    collection: &str,
    rows: Vec<serde_json::Value>,
) -> Result<Vec<T>, CatalogError> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            serde_json::from_value(row).map_err(|source| CatalogError::Decode {
                collection: collection.to_owned(),
                index,
                source,
            })
        })
        .collect()
}
