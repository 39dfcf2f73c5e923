//! Information page: deals, events, house policies and stock alerts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Deals and alerts come from the backend; everything else on the board is
//! static content merged in by the server. A partially failed board still
//! renders, with a warning naming what is missing.

use catalog::detail::info_detail;
use catalog::info::{InfoItem, InfoTab, grid_class};
use leptos::prelude::*;

use crate::components::detail_dialog::DetailDialog;
use crate::components::festival_banner::FestivalBanner;
use crate::components::info_card::InfoCard;
use crate::components::notice::{Notice, NoticeTone, SkeletonGrid};
use crate::components::tab_bar::{TabBar, TabItem};
use crate::state::information::{InformationState, empty_message};

fn card_grid(items: Vec<InfoItem>, on_open: Callback<InfoItem>) -> impl IntoView {
    let grid = grid_class(items.len());
    view! {
        <div class=grid>
            {items.into_iter().map(|item| view! { <InfoCard item=item on_open=on_open /> }).collect_view()}
        </div>
    }
}

#[component]
pub fn InformationPage() -> impl IntoView {
    let state = RwSignal::new(InformationState::new());

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_information().await;
            if let Err(e) = &result {
                log::error!("information fetch failed: {e}");
            }
            state.update(|s| s.finish(result));
        });
    }

    let tabs: Vec<TabItem> = InfoTab::ALL.iter().map(|t| TabItem::new(t.id(), t.label())).collect();
    let active_tab = Signal::derive(move || state.with(|s| s.tab.id().to_owned()));
    let on_tab = Callback::new(move |key: String| {
        if let Some(tab) = InfoTab::ALL.into_iter().find(|t| t.id() == key) {
            state.update(|s| s.tab = tab);
        }
    });
    let on_open = Callback::new(move |item: InfoItem| state.update(|s| s.selected = Some(item)));
    let on_close = Callback::new(move |()| state.update(|s| s.selected = None));

    let body = move || {
        let (loading, error, tab) = state.with(|s| (s.loading, s.error.clone(), s.tab));
        if loading {
            return view! { <SkeletonGrid count=3 /> }.into_any();
        }
        if let Some(e) = error {
            return view! { <Notice tone=NoticeTone::Error title="Could not load information" message=e /> }.into_any();
        }
        let Some(board) = state.with(|s| s.board.clone()) else {
            return ().into_any();
        };
        if tab == InfoTab::Events {
            return view! {
                <FestivalBanner festival=board.festival.clone() />
                <h2 class="section-title">"Weekly Events"</h2>
                {card_grid(board.weekly_items(), on_open)}
                <h2 class="section-title">"Upcoming Events"</h2>
                {card_grid(board.special_items(), on_open)}
            }
                .into_any();
        }
        let items = board.items(tab);
        if items.is_empty() {
            return view! { <p class="empty-state">{empty_message(tab)}</p> }.into_any();
        }
        card_grid(items, on_open).into_any()
    };

    view! {
        <div class="page information-page">
            <header class="page__header">
                <h1>"Information"</h1>
                <p class="page__intro">"Deals, events and everything you need to know before you visit."</p>
            </header>

            {move || {
                state
                    .with(InformationState::unavailable_notice)
                    .map(|message| view! { <Notice tone=NoticeTone::Warning title="Partial information" message=message /> })
            }}

            <TabBar tabs=tabs active=active_tab on_select=on_tab />

            {body}

            {move || {
                state
                    .with(|s| s.selected.clone())
                    .map(|item| view! { <DetailDialog detail=info_detail(&item) on_close=on_close /> })
            }}
        </div>
    }
}
