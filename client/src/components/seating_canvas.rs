//! Pan/zoom viewport over the bar floor plan.
//!
//! ARCHITECTURE
//! ============
//! All interaction rules live in `floorplan::engine::EngineCore`. This
//! component only converts DOM pointer events to engine points and renders
//! the tables and landmarks of the current location inside a transformed
//! surface. Events go through [`dispatch`], so pointer moves outside a drag
//! never wake the view. Derived values are memoised so panning does not
//! rebuild the table list.

use floorplan::camera::Point;
use floorplan::engine::EngineCore;
use floorplan::layout::{LandmarkKind, Shape, Table};
use leptos::prelude::*;

use crate::state::bar_map::dispatch;

/// CSS modifier classes for a table's shape and availability.
#[must_use]
pub fn table_class(table: &Table) -> String {
    let shape = match table.shape {
        Shape::Rect => "seat--rect",
        Shape::Circle => "seat--circle",
    };
    let status = if table.is_available { "seat--available" } else { "seat--occupied" };
    format!("seat {shape} {status}")
}

#[must_use]
pub fn landmark_class(kind: LandmarkKind) -> &'static str {
    match kind {
        LandmarkKind::Doorway => "landmark landmark--doorway",
        LandmarkKind::Fixture => "landmark landmark--fixture",
        LandmarkKind::Greenery => "landmark landmark--greenery",
    }
}

fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

#[component]
pub fn SeatingCanvas(engine: RwSignal<EngineCore>) -> impl IntoView {
    let transform = Memo::new(move |_| engine.with(|e| e.camera.css_transform()));
    let location = Memo::new(move |_| engine.with(|e| e.location));
    let dragging = Memo::new(move |_| engine.with(EngineCore::is_dragging));
    let tables = Memo::new(move |_| {
        engine.with(|e| e.visible_tables().into_iter().cloned().collect::<Vec<Table>>())
    });

    let surface_style = move || {
        let (width, height) = location.get().canvas_size();
        format!("width: {width}px; height: {height}px; transform: {};", transform.get())
    };

    view! {
        <div
            class=move || if dragging.get() { "seating-viewport seating-viewport--dragging" } else { "seating-viewport" }
            on:pointerdown=move |ev| {
                dispatch(engine, |e| e.on_pointer_down(pointer_point(&ev)));
            }
            on:pointermove=move |ev| {
                dispatch(engine, |e| e.on_pointer_move(pointer_point(&ev)));
            }
            on:pointerup=move |_| {
                dispatch(engine, EngineCore::on_pointer_up);
            }
            on:pointerleave=move |_| {
                dispatch(engine, EngineCore::on_pointer_leave);
            }
        >
            <div class="seating-surface" style=surface_style>
                {move || {
                    engine
                        .with(|e| e.visible_landmarks())
                        .iter()
                        .map(|landmark| {
                            view! {
                                <div class=landmark_class(landmark.kind) style=landmark.css_style()>
                                    <span>{landmark.label}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
                {move || {
                    tables
                        .get()
                        .into_iter()
                        .map(|table| {
                            let id = table.id.clone();
                            view! {
                                <button
                                    class=table_class(&table)
                                    style=table.css_style()
                                    title={format!("{} ({})", table.name, table.status_label())}
                                    on:click=move |_| {
                                        dispatch(engine, |e| e.activate_table(&id));
                                    }
                                >
                                    <span class="seat__name">{table.name.clone()}</span>
                                    <span class="seat__capacity">{table.capacity}</span>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
