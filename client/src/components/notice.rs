//! Alerts and loading placeholders shared by the data pages.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeTone {
    Info,
    Warning,
    Error,
}

impl NoticeTone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "notice notice--info",
            Self::Warning => "notice notice--warning",
            Self::Error => "notice notice--error",
        }
    }
}

#[component]
pub fn Notice(
    tone: NoticeTone,
    #[prop(into)] title: String,
    #[prop(into, optional)] message: String,
) -> impl IntoView {
    let role = if tone == NoticeTone::Error { "alert" } else { "status" };
    view! {
        <div class=tone.class() role=role>
            <strong class="notice__title">{title}</strong>
            {(!message.is_empty()).then(|| view! { <p class="notice__message">{message}</p> })}
        </div>
    }
}

/// Grid of pulsing card placeholders.
#[component]
pub fn SkeletonGrid(count: usize) -> impl IntoView {
    view! {
        <div class="grid grid-3" aria-busy="true">
            {(0..count)
                .map(|_| {
                    view! {
                        <div class="card card--skeleton">
                            <div class="skeleton skeleton--title"></div>
                            <div class="skeleton skeleton--line"></div>
                            <div class="skeleton skeleton--line skeleton--short"></div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
