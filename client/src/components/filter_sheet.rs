//! Side sheet editing the menu's category, price range and tags.
//!
//! The sheet edits a local draft; nothing reaches the URL until "Apply
//! Filters" or "Reset" is pressed. Both hand the page a filter to navigate to.

use catalog::filter::{MenuFilter, PRICE_SLIDER_MAX};
use catalog::query::CATEGORY_ALL;
use catalog::Category;
use leptos::prelude::*;

use crate::state::menu::{RangeHandle, adjust_range, price_range_label, reset_sheet, slider_marks};

#[component]
pub fn FilterSheet(
    filter: MenuFilter,
    categories: Vec<Category>,
    tags: Vec<String>,
    on_apply: Callback<MenuFilter>,
    on_reset: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(filter);

    let on_category = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        let category = if value == CATEGORY_ALL { None } else { value.parse().ok() };
        draft.update(|f| f.category = category);
    };
    let on_slider = move |handle: RangeHandle, raw: String| {
        if let Ok(value) = raw.parse::<f64>() {
            draft.update(|f| {
                let (low, high) = adjust_range(f.slider_range(), handle, value);
                f.set_slider_range(low, high);
            });
        }
    };
    let range_label = move || {
        let (low, high) = draft.with(MenuFilter::slider_range);
        price_range_label(low, high)
    };
    let max = PRICE_SLIDER_MAX.to_string();
    let max_high = max.clone();

    view! {
        <div class="sheet-backdrop" on:click=move |_| on_close.run(())>
            <aside
                class="sheet filter-sheet"
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        on_close.run(());
                    }
                }
            >
                <div class="sheet__header">
                    <h2>"Filter Menu"</h2>
                    <p>"Refine your menu options with these filters."</p>
                </div>

                <label class="filter-sheet__field">
                    "Category"
                    <select class="filter-sheet__select" on:change=on_category>
                        <option value=CATEGORY_ALL selected=move || draft.with(|f| f.category.is_none())>
                            "All Categories"
                        </option>
                        {categories
                            .into_iter()
                            .map(|c| {
                                let id = c.id;
                                view! {
                                    <option
                                        value=id.to_string()
                                        selected=move || draft.with(|f| f.category == Some(id))
                                    >
                                        {c.name}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>

                <div class="filter-sheet__field">
                    <div class="filter-sheet__range-header">
                        <span>"Price Range"</span>
                        <span class="filter-sheet__range-value">{range_label}</span>
                    </div>
                    <div class="range">
                        <input
                            type="range"
                            class="range__input"
                            aria-label="Minimum price"
                            min="0"
                            max=max
                            step="1"
                            prop:value=move || draft.with(|f| f.slider_range().0.to_string())
                            on:input=move |ev| on_slider(RangeHandle::Low, event_target_value(&ev))
                        />
                        <input
                            type="range"
                            class="range__input"
                            aria-label="Maximum price"
                            min="0"
                            max=max_high
                            step="1"
                            prop:value=move || draft.with(|f| f.slider_range().1.to_string())
                            on:input=move |ev| on_slider(RangeHandle::High, event_target_value(&ev))
                        />
                    </div>
                    <div class="range__marks">
                        {slider_marks().into_iter().map(|mark| view! { <span>{mark}</span> }).collect_view()}
                    </div>
                </div>

                <div class="filter-sheet__field">
                    <span>"Tags"</span>
                    <div class="badge-row">
                        {tags
                            .into_iter()
                            .map(|tag| {
                                let toggle = tag.clone();
                                let probe = tag.clone();
                                let selected = Memo::new(move |_| draft.with(|f| f.tags.contains(&probe)));
                                view! {
                                    <button
                                        class=move || {
                                            if selected.get() { "badge badge-tag badge--selected" } else { "badge badge-tag" }
                                        }
                                        aria-pressed=move || selected.get().to_string()
                                        on:click=move |_| draft.update(|f| f.toggle_tag(&toggle))
                                    >
                                        {tag}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="sheet__actions">
                    <button
                        class="btn"
                        on:click=move |_| {
                            draft.set(reset_sheet());
                            on_reset.run(());
                        }
                    >
                        "Reset"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_apply.run(draft.get_untracked())>
                        "Apply Filters"
                    </button>
                </div>
            </aside>
        </div>
    }
}
