//! Root application component with the page shell and routing.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::{
    about::AboutPage, bar_map::BarMapPage, home::HomePage, information::InformationPage, menu::MenuPage,
    not_found::NotFoundPage, recipes::RecipesPage, stats::StatsPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Pages own their state, so no contexts are provided here beyond the
/// router and meta tags.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/bar-one.css"/>
        <Title text="Bar One"/>
        <Meta name="description" content="Drinks, food, events and table availability at Bar One."/>

        <Router>
            <Navbar/>
            <main class="site-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("menu") view=MenuPage/>
                    <Route path=StaticSegment("recipes") view=RecipesPage/>
                    <Route path=StaticSegment("bar-map") view=BarMapPage/>
                    <Route path=StaticSegment("information") view=InformationPage/>
                    <Route path=StaticSegment("stats") view=StatsPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
