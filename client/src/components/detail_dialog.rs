//! Modal showing one record's [`DetailView`].
//!
//! Menu items, recipes and information cards all open this dialog; the
//! catalog crate decides which rows, sections and badges each kind shows.

use catalog::detail::{DetailSection, DetailView};
use leptos::prelude::*;

#[component]
pub fn DetailDialog(
    detail: DetailView,
    on_close: Callback<()>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let DetailView { title, description, rows, sections, badges } = detail;
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog detail-dialog"
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="dialog__header">
                    <h2>{title}</h2>
                    <button class="dialog__close" title="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                {(!description.is_empty()).then(|| view! { <p class="dialog__description">{description}</p> })}
                {(!rows.is_empty())
                    .then(|| {
                        view! {
                            <dl class="dialog__rows">
                                {rows
                                    .into_iter()
                                    .map(|row| {
                                        view! {
                                            <div class="dialog__row">
                                                <dt>{row.label}</dt>
                                                <dd>{row.value}</dd>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </dl>
                        }
                    })}
                {sections.into_iter().map(section_view).collect_view()}
                {(!badges.is_empty())
                    .then(|| {
                        view! {
                            <div class="badge-row">
                                {badges
                                    .into_iter()
                                    .map(|badge| {
                        let class = badge.class();
                        view! { <span class=class>{badge.label}</span> }
                    })
                                    .collect_view()}
                            </div>
                        }
                    })}
                {children.map(|children| view! { <div class="dialog__actions">{children()}</div> })}
            </div>
        </div>
    }
}

fn section_view(section: DetailSection) -> impl IntoView {
    let entries = section.entries.into_iter().map(|entry| view! { <li>{entry}</li> }).collect_view();
    let list = if section.ordered {
        view! { <ol class="dialog__list dialog__list--ordered">{entries}</ol> }.into_any()
    } else {
        view! { <ul class="dialog__list">{entries}</ul> }.into_any()
    };
    view! {
        <section class="dialog__section">
            <div class="dialog__section-header">
                <h3>{section.heading}</h3>
                <span class="dialog__section-summary">{section.summary}</span>
            </div>
            {list}
        </section>
    }
}
