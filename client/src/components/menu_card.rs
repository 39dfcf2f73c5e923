//! Card for one menu item.

use catalog::MenuItem;
use catalog::detail::format_price;
use leptos::prelude::*;

/// "Student: £x.xx" when the item has a student price.
#[must_use]
pub fn student_label(item: &MenuItem) -> Option<String> {
    item.student_price.map(|p| format!("Student: {}", format_price(p)))
}

#[component]
pub fn MenuCard(item: MenuItem, on_open: Callback<MenuItem>) -> impl IntoView {
    let price = format_price(item.price);
    let student = student_label(&item);
    let class = if item.is_available { "card menu-card" } else { "card menu-card menu-card--unavailable" };
    let tags = item.tags.clone();
    let available = item.is_available;
    let open_item = item.clone();
    let key_item = item.clone();

    view! {
        <article
            class=class
            role="button"
            tabindex="0"
            on:click=move |_| on_open.run(open_item.clone())
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Enter" || ev.key() == " " {
                    ev.prevent_default();
                    on_open.run(key_item.clone());
                }
            }
        >
            <div class="card__header">
                <h3 class="card__title">{item.name}</h3>
                <span class="menu-card__price">{price}</span>
            </div>
            <p class="card__description">{item.description}</p>
            {student.map(|label| view! { <p class="menu-card__student">{label}</p> })}
            <div class="badge-row">
                {tags.into_iter().map(|tag| view! { <span class="badge badge-tag">{tag}</span> }).collect_view()}
                {(!available).then(|| view! { <span class="badge badge-warning">"Out of Stock"</span> })}
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_label_only_when_priced() {
        let mut item = MenuItem {
            id: "1".to_owned(),
            name: "Cider".to_owned(),
            description: String::new(),
            price: 5.0,
            student_price: Some(4.2),
            category_id: 1,
            tags: Vec::new(),
            is_available: true,
            image_url: None,
        };
        assert_eq!(student_label(&item).as_deref(), Some("Student: £4.20"));
        item.student_price = None;
        assert!(student_label(&item).is_none());
    }
}
