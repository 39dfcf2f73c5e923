//! About page: the project story, its inspirations and a short user guide.

use leptos::prelude::*;

use crate::components::tab_bar::{TabBar, TabItem};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AboutTab {
    #[default]
    Creator,
    Inspiration,
    Guide,
}

impl AboutTab {
    pub const ALL: [Self; 3] = [Self::Creator, Self::Inspiration, Self::Guide];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Creator => "about",
            Self::Inspiration => "inspiration",
            Self::Guide => "how-to-use",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Creator => "About Me",
            Self::Inspiration => "Inspiration",
            Self::Guide => "How To Use",
        }
    }
}

const SKILLS: [&str; 6] = [
    "Rust & Leptos",
    "Axum web services",
    "PostgREST / Supabase (PostgreSQL)",
    "UI/UX Design",
    "Responsive Web Development",
    "Data Visualization",
];

const INSPIRATIONS: [&str; 5] = [
    "Neighbourhood bars where the staff know your order",
    "Printed menus that are easy to scan at a busy bar",
    "Seating charts used by front-of-house teams",
    "Event boards and chalkboard specials",
    "Dashboards that make numbers easy to read",
];

const FEATURES: [(&str, &str); 5] = [
    ("Menu", "Browse every drink and dish, search by name, and filter by category, price and tags."),
    ("Recipes", "See how each drink is built: ingredients, method, glass and garnish."),
    ("Bar Map", "Drag and zoom around the floor plan and check which tables are free."),
    ("Information", "Find current deals, weekly and upcoming events, house policies and stock alerts."),
    ("Stats", "Explore sample charts of sales, traffic and staff performance."),
];

fn creator() -> impl IntoView {
    view! {
        <section class="card about-card">
            <h2 class="card__title">"About the Creator"</h2>
            <p>
                "Bar One started as a side project: a way to build a complete, fast website for a real kind of business, end to end."
            </p>
            <p>
                "The site is written in Rust. Pages are rendered on the server with Leptos and hydrated in the browser, and a small Axum service reads menu, recipe and promotion data from a hosted PostgreSQL backend."
            </p>
            <p>"The aim is a site that feels as welcoming as the bar itself: quick to load and easy to use on a phone."</p>
            <h3>"Skills"</h3>
            <ul class="about-card__list">{SKILLS.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}</ul>
        </section>
    }
}

fn inspiration() -> impl IntoView {
    view! {
        <section class="card about-card">
            <h2 class="card__title">"Project Inspiration"</h2>
            <p>"Most bar websites are a PDF menu and an opening-hours line. Bar One asks what a guest actually wants to know before and during a visit."</p>
            <p>"What is on tonight, what does it cost, is there a table free, and what goes into that cocktail?"</p>
            <p>"Each page answers one of those questions."</p>
            <h3>"Key Inspirations"</h3>
            <ul class="about-card__list">{INSPIRATIONS.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}</ul>
        </section>
    }
}

fn guide() -> impl IntoView {
    view! {
        <section class="card about-card">
            <h2 class="card__title">"How To Use"</h2>
            <h3>"Navigation"</h3>
            <p>"Use the links in the header to move between pages. On small screens, open the menu button for the full list."</p>
            <h3>"Key Features"</h3>
            <dl class="about-card__features">
                {FEATURES
                    .iter()
                    .map(|(name, text)| {
                        view! {
                            <dt>{*name}</dt>
                            <dd>{*text}</dd>
                        }
                    })
                    .collect_view()}
            </dl>
        </section>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let tab = RwSignal::new(AboutTab::default());
    let tabs: Vec<TabItem> = AboutTab::ALL.iter().map(|t| TabItem::new(t.id(), t.label())).collect();
    let active = Signal::derive(move || tab.get().id().to_owned());
    let on_select = Callback::new(move |key: String| {
        if let Some(next) = AboutTab::ALL.into_iter().find(|t| t.id() == key) {
            tab.set(next);
        }
    });

    view! {
        <div class="page about-page">
            <header class="page__header">
                <h1>"About Bar One"</h1>
            </header>
            <TabBar tabs=tabs active=active on_select=on_select />
            {move || match tab.get() {
                AboutTab::Creator => creator().into_any(),
                AboutTab::Inspiration => inspiration().into_any(),
                AboutTab::Guide => guide().into_any(),
            }}
        </div>
    }
}
