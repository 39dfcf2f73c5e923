//! Site footer.

use leptos::prelude::*;

use crate::util::time::current_year;

#[must_use]
pub fn copyright_line(year: i64) -> String {
    format!("© {year} Bar One. All rights reserved.")
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>{copyright_line(current_year())}</p>
        </footer>
    }
}
