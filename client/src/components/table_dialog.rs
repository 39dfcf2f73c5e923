//! Dialog for the selected seating-map table.

use floorplan::layout::Table;
use leptos::prelude::*;

#[component]
pub fn TableDialog(table: Table, on_close: Callback<()>) -> impl IntoView {
    let status_class = if table.is_available { "badge badge-available" } else { "badge badge-occupied" };
    let rows = table.detail_rows();
    let action_class = if table.is_available { "btn btn--primary" } else { "btn" };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog table-dialog"
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        on_close.run(());
                    }
                }
            >
                <div class="dialog__header">
                    <h2>{table.name.clone()}</h2>
                    <button class="dialog__close" title="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <p class="dialog__description">{table.availability_sentence()}</p>
                <dl class="dialog__rows">
                    <div class="dialog__row">
                        <dt>"Status"</dt>
                        <dd>
                            <span class=status_class>{table.status_label()}</span>
                        </dd>
                    </div>
                    {rows
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="dialog__row">
                                    <dt>{label}</dt>
                                    <dd>{value}</dd>
                                </div>
                            }
                        })
                        .collect_view()}
                </dl>
                <div class="dialog__actions">
                    <button class=action_class on:click=move |_| on_close.run(())>
                        {table.action_label()}
                    </button>
                </div>
            </div>
        </div>
    }
}
