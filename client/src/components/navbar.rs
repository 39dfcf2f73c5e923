//! Site header with desktop links, centred logo and a mobile sheet.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Scroll distance after which the header gets its solid background.
pub const SCROLL_THRESHOLD: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Links left of the logo, and the "Main" column of the mobile sheet.
pub const MAIN_LINKS: [NavLink; 3] = [
    NavLink { href: "/", label: "Home" },
    NavLink { href: "/menu", label: "Menu" },
    NavLink { href: "/recipes", label: "Recipes" },
];

/// Links right of the logo, and the "More" column of the mobile sheet.
pub const MORE_LINKS: [NavLink; 4] = [
    NavLink { href: "/bar-map", label: "Bar Map" },
    NavLink { href: "/information", label: "Information" },
    NavLink { href: "/stats", label: "Stats" },
    NavLink { href: "/about", label: "About" },
];

#[must_use]
pub fn is_active(pathname: &str, href: &str) -> bool {
    pathname == href
}

#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

#[must_use]
pub fn header_class(scrolled: bool) -> &'static str {
    if scrolled { "navbar navbar--scrolled" } else { "navbar" }
}

fn link_class(active: bool) -> &'static str {
    if active { "navbar__link navbar__link--active" } else { "navbar__link" }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let scrolled = RwSignal::new(false);
    let sheet_open = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            scrolled.set(is_scrolled(y));
        });
        on_cleanup(move || handle.remove());
    }

    let render_link = move |link: NavLink| {
        let active = Memo::new(move |_| is_active(&pathname.get(), link.href));
        view! {
            <a
                href=link.href
                class=move || link_class(active.get())
                aria-current=move || active.get().then_some("page")
                on:click=move |_| sheet_open.set(false)
            >
                {link.label}
            </a>
        }
    };

    view! {
        <header class=move || header_class(scrolled.get())>
            <nav class="navbar__inner">
                <div class="navbar__group navbar__group--left">
                    {MAIN_LINKS.into_iter().map(render_link).collect_view()}
                </div>
                <a href="/" class="navbar__logo">"Bar One"</a>
                <div class="navbar__group navbar__group--right">
                    {MORE_LINKS.into_iter().map(render_link).collect_view()}
                </div>
                <button
                    class="navbar__toggle"
                    aria-label="Open navigation"
                    aria-expanded=move || sheet_open.get().to_string()
                    on:click=move |_| sheet_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
            </nav>
            <Show when=move || sheet_open.get()>
                <div class="sheet-backdrop" on:click=move |_| sheet_open.set(false)>
                    <div class="sheet navbar__sheet" on:click=move |ev| ev.stop_propagation()>
                        <div class="navbar__sheet-column">
                            <h3>"Main"</h3>
                            {MAIN_LINKS.into_iter().map(render_link).collect_view()}
                        </div>
                        <div class="navbar__sheet-column">
                            <h3>"More"</h3>
                            {MORE_LINKS.into_iter().map(render_link).collect_view()}
                        </div>
                    </div>
                </div>
            </Show>
        </header>
    }
}
