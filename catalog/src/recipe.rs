//! Recipe search and category tabs.
//!
//! Recipe tabs are a fixed list that remaps to backend category names rather
//! than mirroring `menu_categories`; hot drinks live under "Coffee".

#[cfg(test)]
#[path = "recipe_test.rs"]
mod recipe_test;

use crate::filter::contains_folded;
use crate::model::Recipe;

/// Fixed recipe tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecipeTab {
    #[default]
    All,
    Cocktails,
    Mocktails,
    HotDrinks,
}

impl RecipeTab {
    pub const ALL: [Self; 4] = [Self::All, Self::Cocktails, Self::Mocktails, Self::HotDrinks];

    /// Stable identifier used for the tab's DOM value.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Cocktails => "cocktails",
            Self::Mocktails => "mocktails",
            Self::HotDrinks => "hot_drinks",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Cocktails => "Cocktails",
            Self::Mocktails => "Mocktails",
            Self::HotDrinks => "Hot Drinks",
        }
    }

    /// Backend category name this tab shows; `None` for the catch-all tab.
    #[must_use]
    pub fn category_name(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Cocktails => Some("Cocktails"),
            Self::Mocktails => Some("Mocktails"),
            Self::HotDrinks => Some("Coffee"),
        }
    }

    #[must_use]
    pub fn matches(self, recipe: &Recipe) -> bool {
        match self.category_name() {
            None => true,
            Some(name) => recipe.category_name() == Some(name),
        }
    }
}

/// Whether `recipe` matches a free-text search over name, description and ingredients.
#[must_use]
pub fn matches_search(recipe: &Recipe, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    contains_folded(&recipe.menu_item.name, &needle)
        || contains_folded(&recipe.menu_item.description, &needle)
        || recipe.ingredients.iter().any(|ing| contains_folded(ing, &needle))
}

/// Recipes matching both the search term and the tab, in input order.
#[must_use]
pub fn filter_recipes(recipes: &[Recipe], query: &str, tab: RecipeTab) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|r| matches_search(r, query) && tab.matches(r))
        .cloned()
        .collect()
}
