//! Recipe browser state.
//!
//! The applied search lives in the URL (`?q=`), like the menu filters. The
//! text box edits a local draft which only reaches the URL on submit. The
//! category tab is local to the page and resets on reload.

#[cfg(test)]
#[path = "recipes_test.rs"]
mod recipes_test;

use catalog::Recipe;
use catalog::query::search_href;
use catalog::recipe::{RecipeTab, filter_recipes};

use super::ListView;

pub const RECIPES_PATH: &str = "/recipes";

#[derive(Clone, Debug, Default)]
pub struct RecipesState {
    pub loading: bool,
    pub error: Option<String>,
    pub recipes: Vec<Recipe>,
    /// Text in the search box, not yet applied.
    pub draft: String,
    pub tab: RecipeTab,
    pub selected: Option<Recipe>,
}

impl RecipesState {
    #[must_use]
    pub fn new() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn finish(&mut self, result: Result<Vec<Recipe>, String>) {
        self.loading = false;
        match result {
            Ok(recipes) => {
                self.recipes = recipes;
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }

    /// URL applying the draft as the active search.
    #[must_use]
    pub fn submit_href(&self) -> String {
        search_href(RECIPES_PATH, self.draft.trim())
    }

    /// Empty the draft and return the bare page URL.
    pub fn clear_search(&mut self) -> String {
        self.draft.clear();
        RECIPES_PATH.to_owned()
    }

    /// Whether the Clear button should show.
    #[must_use]
    pub fn has_search(&self, query: &str) -> bool {
        !query.is_empty() || !self.draft.is_empty()
    }

    #[must_use]
    pub fn view(&self, query: &str) -> ListView<Recipe> {
        let visible = filter_recipes(&self.recipes, query, self.tab);
        ListView::resolve(self.loading, self.error.as_deref(), self.recipes.len(), visible)
    }
}
