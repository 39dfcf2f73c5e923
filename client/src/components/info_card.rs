//! Card for one information-board item.

use catalog::detail::info_detail;
use catalog::info::{InfoIcon, InfoItem};
use leptos::prelude::*;

#[must_use]
pub fn icon_glyph(icon: InfoIcon) -> &'static str {
    match icon {
        InfoIcon::Calendar => "📅",
        InfoIcon::Music => "🎵",
        InfoIcon::Alert => "⚠",
        InfoIcon::Info => "ℹ",
    }
}

#[component]
pub fn InfoCard(item: InfoItem, on_open: Callback<InfoItem>) -> impl IntoView {
    let detail = info_detail(&item);
    let glyph = icon_glyph(item.icon());
    let time = item.time().map(str::to_owned);
    let key_item = item.clone();

    view! {
        <article
            class="card info-card"
            role="button"
            tabindex="0"
            on:click=move |_| on_open.run(item.clone())
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Enter" || ev.key() == " " {
                    ev.prevent_default();
                    on_open.run(key_item.clone());
                }
            }
        >
            <div class="card__header">
                <span class="info-card__icon" aria-hidden="true">{glyph}</span>
                <h3 class="card__title">{detail.title}</h3>
            </div>
            <p class="card__description">{detail.description}</p>
            {time.map(|t| view! { <p class="info-card__time">{t}</p> })}
            <div class="badge-row">
                {detail
                    .badges
                    .into_iter()
                    .map(|badge| {
                        let class = badge.class();
                        view! { <span class=class>{badge.label}</span> }
                    })
                    .collect_view()}
            </div>
        </article>
    }
}
