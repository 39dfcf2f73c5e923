//! Menu page: tabbed, filterable grid of menu items.
//!
//! SYSTEM CONTEXT
//! ==============
//! The URL query is the single source of truth for the active filter. The
//! category tabs, the search box and the filter sheet all navigate to a new
//! URL, and the grid re-derives from it. The catalog is fetched once per
//! mount; filtering never re-fetches.

use catalog::MenuItem;
use catalog::detail::menu_item_detail;
use catalog::filter::{MenuFilter, visible_categories};
use catalog::info::grid_class;
use catalog::query::filter_href;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use super::PendingNavigation;
use crate::components::detail_dialog::DetailDialog;
use crate::components::filter_sheet::FilterSheet;
use crate::components::menu_card::MenuCard;
use crate::components::notice::{Notice, NoticeTone, SkeletonGrid};
use crate::components::tab_bar::{TabBar, TabItem};
use crate::state::ListView;
use crate::state::menu::{MenuState, reset_sheet, with_tab};

pub const MENU_PATH: &str = "/menu";

#[component]
pub fn MenuPage() -> impl IntoView {
    let state = RwSignal::new(MenuState::new());
    let query = use_query_map();
    let filter = Memo::new(move |_| query.with(|q| MenuFilter::from_params(|key| q.get(key))));
    let nav = PendingNavigation::install();

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_menu().await;
            if let Err(e) = &result {
                log::error!("menu fetch failed: {e}");
            }
            state.update(|s| s.finish(result));
        });
    }

    // Search box mirrors the URL until the user edits it.
    let search = RwSignal::new(String::new());
    Effect::new(move || search.set(filter.with(|f| f.query.clone())));

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut next = filter.get_untracked();
        next.query = search.get_untracked().trim().to_owned();
        nav.go(filter_href(MENU_PATH, &next));
    };

    let tabs = Signal::derive(move || {
        state.with(MenuState::tabs).into_iter().map(|t| TabItem::new(t.key(), t.label)).collect::<Vec<_>>()
    });
    let active_tab = Signal::derive(move || filter.with(|f| f.category.map_or_else(|| "all".to_owned(), |c| c.to_string())));
    let on_tab = Callback::new(move |key: String| {
        let next = with_tab(&filter.get_untracked(), key.parse().ok());
        nav.go(filter_href(MENU_PATH, &next));
    });

    let on_apply = Callback::new(move |next: MenuFilter| {
        state.update(|s| s.sheet_open = false);
        nav.go(filter_href(MENU_PATH, &next));
    });
    let on_reset = Callback::new(move |()| {
        state.update(|s| s.sheet_open = false);
        nav.go(filter_href(MENU_PATH, &reset_sheet()));
    });
    let on_close_sheet = Callback::new(move |()| state.update(|s| s.sheet_open = false));
    let on_open = Callback::new(move |item: MenuItem| state.update(|s| s.selected = Some(item)));
    let on_close_detail = Callback::new(move |()| state.update(|s| s.selected = None));

    view! {
        <div class="page menu-page">
            <header class="page__header">
                <h1>"Menu"</h1>
                <p class="page__intro">"Drinks, food and house specials. Student prices on selected items."</p>
            </header>

            <div class="toolbar">
                <form class="search" on:submit=on_search>
                    <input
                        class="search__input"
                        type="search"
                        placeholder="Search menu..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">"Search"</button>
                </form>
                <button class="btn" on:click=move |_| state.update(|s| s.sheet_open = true)>
                    "Filters"
                </button>
                <Show when=move || !filter.with(MenuFilter::is_empty)>
                    <button class="btn btn--ghost" on:click=move |_| nav.go(filter_href(MENU_PATH, &reset_sheet()))>
                        "Clear Filters"
                    </button>
                </Show>
            </div>

            <TabBar tabs=tabs active=active_tab on_select=on_tab />

            {move || match state.with(|s| s.view(&filter.get())) {
                ListView::Loading => view! { <SkeletonGrid count=6 /> }.into_any(),
                ListView::Failed(e) => {
                    view! { <Notice tone=NoticeTone::Error title="Could not load the menu" message=e /> }.into_any()
                }
                ListView::Empty => {
                    view! {
                        <Notice
                            tone=NoticeTone::Info
                            title="No Menu Items Found"
                            message="The menu is empty right now. Please check back later."
                        />
                    }
                        .into_any()
                }
                ListView::NoMatches => {
                    view! { <p class="empty-state">"No items found matching your criteria."</p> }.into_any()
                }
                ListView::Ready(items) => {
                    let grid = grid_class(items.len());
                    view! {
                        <div class=grid>
                            {items
                                .into_iter()
                                .map(|item| view! { <MenuCard item=item on_open=on_open /> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}

            <Show when=move || state.with(|s| s.sheet_open)>
                {move || {
                    let (categories, tags) = state.with_untracked(|s| (visible_categories(&s.catalog.categories), s.catalog.tags.clone()));
                    view! {
                        <FilterSheet
                            filter=filter.get_untracked()
                            categories=categories
                            tags=tags
                            on_apply=on_apply
                            on_reset=on_reset
                            on_close=on_close_sheet
                        />
                    }
                }}
            </Show>

            {move || {
                state
                    .with(|s| s.selected.clone())
                    .map(|item| view! { <DetailDialog detail=menu_item_detail(&item) on_close=on_close_detail /> })
            }}
        </div>
    }
}
