//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch on mount, URL reads and
//! writes, dialog state) and delegates rendering details to `components`.

pub mod about;
pub mod bar_map;
pub mod home;
pub mod information;
pub mod menu;
pub mod not_found;
pub mod recipes;
pub mod stats;

/// Client-side navigation requested from a callback.
///
/// Callbacks must be `Send + Sync`, so they record the target here and an
/// effect owned by the page performs the navigation.
#[derive(Clone, Copy)]
pub(crate) struct PendingNavigation(leptos::prelude::RwSignal<Option<String>>);

impl PendingNavigation {
    /// Install the navigating effect for the current page.
    pub(crate) fn install() -> Self {
        use leptos::prelude::*;
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;

        let target = RwSignal::new(None::<String>);
        let navigate = use_navigate();
        Effect::new(move || {
            if let Some(href) = target.get() {
                target.set(None);
                navigate(&href, NavigateOptions::default());
            }
        });
        Self(target)
    }

    pub(crate) fn go(self, href: String) {
        use leptos::prelude::Set;
        self.0.set(Some(href));
    }
}
