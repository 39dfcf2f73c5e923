//! Bar map page: pan/zoom seating plan with per-table details.
//!
//! The plan is generated in the browser after hydration, so availability is
//! re-rolled on every visit and the server render shows a placeholder.

use floorplan::engine::EngineCore;
use floorplan::layout::Location;
use leptos::prelude::*;

use crate::components::seating_canvas::SeatingCanvas;
use crate::components::tab_bar::{TabBar, TabItem};
use crate::components::table_dialog::TableDialog;
use crate::state::bar_map::{availability_summary, dispatch, engine_for_seed, page_seed};

#[component]
pub fn BarMapPage() -> impl IntoView {
    let engine = RwSignal::new(EngineCore::default());
    let ready = RwSignal::new(false);

    // Effects only run in the browser.
    Effect::new(move || {
        engine.set(engine_for_seed(page_seed()));
        ready.set(true);
    });

    let tabs: Vec<TabItem> = Location::ALL.iter().map(|l| TabItem::new(l.name(), l.label())).collect();
    let active_tab = Signal::derive(move || engine.with(|e| e.location.name().to_owned()));
    let on_tab = Callback::new(move |key: String| {
        if let Some(location) = Location::ALL.into_iter().find(|l| l.name() == key) {
            dispatch(engine, |e| e.set_location(location));
        }
    });
    let on_close = Callback::new(move |()| {
        dispatch(engine, EngineCore::close_dialog);
    });

    let summary = move || engine.with(availability_summary);
    let zoom_label = move || format!("{}%", engine.with(|e| e.camera.zoom_percent()));

    view! {
        <div class="page bar-map-page">
            <header class="page__header">
                <h1>"Bar Map"</h1>
                <p class="page__intro">"See which tables are free right now."</p>
            </header>

            <TabBar tabs=tabs active=active_tab on_select=on_tab />

            <div class="bar-map__controls">
                <div class="legend">
                    <span class="legend__item">
                        <span class="legend__swatch legend__swatch--available"></span>
                        "Available"
                    </span>
                    <span class="legend__item">
                        <span class="legend__swatch legend__swatch--occupied"></span>
                        "Occupied"
                    </span>
                    <Show when=move || ready.get()>
                        <span class="legend__summary">{summary}</span>
                    </Show>
                </div>
                <div class="zoom-controls">
                    <button
                        class="btn"
                        aria-label="Zoom Out"
                        disabled=move || !engine.with(|e| e.camera.can_zoom_out())
                        on:click=move |_| {
                            dispatch(engine, EngineCore::zoom_out);
                        }
                    >
                        "−"
                    </button>
                    <span class="zoom-controls__level">{zoom_label}</span>
                    <button
                        class="btn"
                        aria-label="Zoom In"
                        disabled=move || !engine.with(|e| e.camera.can_zoom_in())
                        on:click=move |_| {
                            dispatch(engine, EngineCore::zoom_in);
                        }
                    >
                        "+"
                    </button>
                    <button
                        class="btn"
                        on:click=move |_| {
                            dispatch(engine, EngineCore::reset_view);
                        }
                    >
                        "Reset View"
                    </button>
                </div>
            </div>

            <Show
                when=move || ready.get()
                fallback=|| view! { <div class="seating-viewport seating-viewport--loading" aria-busy="true"></div> }
            >
                <SeatingCanvas engine=engine />
            </Show>

            <p class="bar-map__tip">
                "Use the zoom controls or drag to navigate the map. Click on a table to see details."
            </p>

            {move || {
                engine
                    .with(|e| e.selected_table().cloned())
                    .map(|table| view! { <TableDialog table=table on_close=on_close /> })
            }}
        </div>
    }
}
