//! Recipe page: searchable, tabbed grid of drink recipes.

use catalog::Recipe;
use catalog::detail::recipe_detail;
use catalog::info::grid_class;
use catalog::query::PARAM_QUERY;
use catalog::recipe::RecipeTab;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use super::PendingNavigation;
use crate::components::detail_dialog::DetailDialog;
use crate::components::notice::{Notice, NoticeTone, SkeletonGrid};
use crate::components::recipe_card::RecipeCard;
use crate::components::tab_bar::{TabBar, TabItem};
use crate::state::ListView;
use crate::state::recipes::RecipesState;

#[component]
pub fn RecipesPage() -> impl IntoView {
    let state = RwSignal::new(RecipesState::new());
    let params = use_query_map();
    let query = Memo::new(move |_| params.with(|p| p.get(PARAM_QUERY).unwrap_or_default()));
    let nav = PendingNavigation::install();

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_recipes().await;
            if let Err(e) = &result {
                log::error!("recipe fetch failed: {e}");
            }
            state.update(|s| s.finish(result));
        });
    }

    Effect::new(move || {
        let applied = query.get();
        state.update(|s| s.draft = applied);
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        nav.go(state.with_untracked(RecipesState::submit_href));
    };
    let on_clear = move |_: leptos::ev::MouseEvent| {
        let mut href = String::new();
        state.update(|s| href = s.clear_search());
        nav.go(href);
    };

    let tabs: Vec<TabItem> = RecipeTab::ALL.iter().map(|t| TabItem::new(t.id(), t.label())).collect();
    let active_tab = Signal::derive(move || state.with(|s| s.tab.id().to_owned()));
    let on_tab = Callback::new(move |key: String| {
        if let Some(tab) = RecipeTab::ALL.into_iter().find(|t| t.id() == key) {
            state.update(|s| s.tab = tab);
        }
    });
    let on_open = Callback::new(move |recipe: Recipe| state.update(|s| s.selected = Some(recipe)));
    let on_close = Callback::new(move |()| state.update(|s| s.selected = None));

    view! {
        <div class="page recipes-page">
            <header class="page__header">
                <h1>"Recipes"</h1>
                <p class="page__intro">"How our bartenders build the drinks on the menu."</p>
            </header>

            <form class="search" on:submit=on_search>
                <input
                    class="search__input"
                    type="search"
                    placeholder="Search recipes..."
                    prop:value=move || state.with(|s| s.draft.clone())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        state.update(|s| s.draft = text);
                    }
                />
                <button class="btn btn--primary" type="submit">"Search"</button>
                <Show when=move || state.with(|s| s.has_search(&query.get()))>
                    <button class="btn btn--ghost" type="button" on:click=on_clear>
                        "Clear"
                    </button>
                </Show>
            </form>

            <TabBar tabs=tabs active=active_tab on_select=on_tab />

            {move || match state.with(|s| s.view(&query.get())) {
                ListView::Loading => view! { <SkeletonGrid count=6 /> }.into_any(),
                ListView::Failed(e) => {
                    view! { <Notice tone=NoticeTone::Error title="Could not load recipes" message=e /> }.into_any()
                }
                ListView::Empty | ListView::NoMatches => {
                    view! { <p class="empty-state">"No recipes found matching your criteria."</p> }.into_any()
                }
                ListView::Ready(recipes) => {
                    let grid = grid_class(recipes.len());
                    view! {
                        <div class=grid>
                            {recipes
                                .into_iter()
                                .map(|recipe| view! { <RecipeCard recipe=recipe on_open=on_open /> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}

            {move || {
                state
                    .with(|s| s.selected.clone())
                    .map(|recipe| view! { <DetailDialog detail=recipe_detail(&recipe) on_close=on_close /> })
            }}
        </div>
    }
}
