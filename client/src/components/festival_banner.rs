//! Festival highlight at the top of the events tab.

use catalog::Festival;
use leptos::prelude::*;

#[component]
pub fn FestivalBanner(festival: Festival) -> impl IntoView {
    view! {
        <section class="festival-banner">
            <h2 class="festival-banner__title">{festival.title}</h2>
            <p class="festival-banner__dates">{festival.dates}</p>
            <p class="festival-banner__description">{festival.description}</p>
        </section>
    }
}
