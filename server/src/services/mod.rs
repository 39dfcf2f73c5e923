//! Read services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the backend queries and record assembly so route
//! handlers can stay focused on protocol translation. Every service takes
//! a `&dyn Backend`, which lets tests run against an in-memory mock.

pub mod information;
pub mod menu;
pub mod recipes;

/// Backend collection names.
pub mod collections {
    pub const MENU_CATEGORIES: &str = "menu_categories";
    pub const MENU_ITEMS: &str = "menu_items";
    pub const RECIPES: &str = "recipesbo";
    pub const DAILY_DEALS: &str = "daily_deals";
    pub const INVENTORY_ALERTS: &str = "inventory_alerts";
}
