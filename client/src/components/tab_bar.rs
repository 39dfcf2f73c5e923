//! Horizontal tab strip.

use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabItem {
    pub key: String,
    pub label: String,
}

impl TabItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self { key: key.into(), label: label.into() }
    }
}

/// Tabs are keyed by string so every page can map its own tab enum onto them.
#[component]
pub fn TabBar(
    #[prop(into)] tabs: Signal<Vec<TabItem>>,
    #[prop(into)] active: Signal<String>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="tab-bar" role="tablist">
            {move || {
                tabs.get()
                    .into_iter()
                    .map(|tab| {
                        let key = tab.key.clone();
                        let selected = Memo::new(move |_| active.get() == key);
                        let key = tab.key;
                        view! {
                            <button
                                class=move || {
                                    if selected.get() { "tab-bar__tab tab-bar__tab--active" } else { "tab-bar__tab" }
                                }
                                role="tab"
                                aria-selected=move || selected.get().to_string()
                                on:click=move |_| on_select.run(key.clone())
                            >
                                {tab.label}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
