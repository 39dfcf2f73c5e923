//! Landing page: hero banner and a scrollable strip of feature cards.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

/// Pixels the arrows scroll the card strip by.
pub const SCROLL_STEP: f64 = 300.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub text: &'static str,
    pub badge: &'static str,
    pub href: &'static str,
    pub action: &'static str,
}

pub const FEATURES: [FeatureCard; 6] = [
    FeatureCard {
        title: "Today's Special",
        text: "2 for 1 Cocktails All Night!",
        badge: "Limited Time",
        href: "/information",
        action: "View All Deals",
    },
    FeatureCard {
        title: "Live Jazz Night",
        text: "June 5, 2025 • 8:00 PM - 11:00 PM",
        badge: "Upcoming Event",
        href: "/information",
        action: "All Events",
    },
    FeatureCard {
        title: "Find a Table",
        text: "Check availability and reserve your spot",
        badge: "Bar Map",
        href: "/bar-map",
        action: "View Map",
    },
    FeatureCard {
        title: "Full Menu",
        text: "Explore our drinks and food offerings",
        badge: "Menu",
        href: "/menu",
        action: "Browse Menu",
    },
    FeatureCard {
        title: "Opening Hours",
        text: "Mon-Thu: 4pm-12am • Fri-Sat: 12pm-2am • Sun: 12pm-10pm",
        badge: "Information",
        href: "/information",
        action: "More Info",
    },
    FeatureCard {
        title: "About Us",
        text: "Learn about Bar One's story and mission",
        badge: "About",
        href: "/about",
        action: "Read More",
    },
];

/// Which scroll arrows to show as (left, right) for a strip's scroll metrics.
#[must_use]
pub fn arrow_visibility(scroll_left: f64, scroll_width: f64, client_width: f64) -> (bool, bool) {
    let left = scroll_left > 0.0;
    let right = scroll_left + client_width < scroll_width - 1.0;
    (left, right)
}

#[component]
pub fn HomePage() -> impl IntoView {
    let strip = NodeRef::<leptos::html::Div>::new();
    let arrows = RwSignal::new((false, true));

    let refresh_arrows = move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = strip.get_untracked() {
                arrows.set(arrow_visibility(
                    f64::from(el.scroll_left()),
                    f64::from(el.scroll_width()),
                    f64::from(el.client_width()),
                ));
            }
        }
    };
    let scroll_by = move |delta: f64| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = strip.get_untracked() {
                let options = web_sys::ScrollToOptions::new();
                options.set_left(delta);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                el.scroll_by_with_scroll_to_options(&options);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = delta;
        }
    };

    Effect::new(move || {
        if strip.get().is_some() {
            refresh_arrows();
        }
    });

    view! {
        <div class="page home-page">
            <section class="hero">
                <h1 class="hero__title">"Welcome to Bar One"</h1>
                <p class="hero__subtitle">
                    "Your favorite neighborhood bar with the best drinks, food, and atmosphere. Join us for an unforgettable experience."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="/menu">"Explore Menu"</a>
                    <a class="btn" href="/information">"Information"</a>
                </div>
            </section>

            <section class="feature-strip">
                <Show when=move || arrows.get().0>
                    <button
                        class="feature-strip__arrow feature-strip__arrow--left"
                        aria-label="Scroll left"
                        on:click=move |_| scroll_by(-SCROLL_STEP)
                    >
                        "‹"
                    </button>
                </Show>
                <div class="feature-strip__track" node_ref=strip on:scroll=move |_| refresh_arrows()>
                    {FEATURES
                        .iter()
                        .map(|card| {
                            view! {
                                <article class="card feature-card">
                                    <span class="badge badge-tag">{card.badge}</span>
                                    <h3 class="card__title">{card.title}</h3>
                                    <p class="card__description">{card.text}</p>
                                    <a class="feature-card__link" href=card.href>
                                        {card.action}
                                        " →"
                                    </a>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
                <Show when=move || arrows.get().1>
                    <button
                        class="feature-strip__arrow feature-strip__arrow--right"
                        aria-label="Scroll right"
                        on:click=move |_| scroll_by(SCROLL_STEP)
                    >
                        "›"
                    </button>
                </Show>
            </section>
        </div>
    }
}
