//! Fallback route.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page not-found-page">
            <h1>"Page not found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <a class="btn btn--primary" href="/">"Back to Home"</a>
        </div>
    }
}
