//! Card for one recipe.

use catalog::Recipe;
use catalog::detail::ingredient_badge;
use leptos::prelude::*;

#[component]
pub fn RecipeCard(recipe: Recipe, on_open: Callback<Recipe>) -> impl IntoView {
    let count = ingredient_badge(&recipe);
    let category = recipe.category_name().map(str::to_owned);
    let tags = recipe.menu_item.tags.clone();
    let name = recipe.menu_item.name.clone();
    let description = recipe.menu_item.description.clone();
    let key_recipe = recipe.clone();
    let count_class = count.class();

    view! {
        <article
            class="card recipe-card"
            role="button"
            tabindex="0"
            on:click=move |_| on_open.run(recipe.clone())
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Enter" || ev.key() == " " {
                    ev.prevent_default();
                    on_open.run(key_recipe.clone());
                }
            }
        >
            <div class="card__header">
                <h3 class="card__title">{name}</h3>
                {category.map(|c| view! { <span class="recipe-card__category">{c}</span> })}
            </div>
            <p class="card__description">{description}</p>
            <div class="badge-row">
                {tags.into_iter().map(|tag| view! { <span class="badge badge-tag">{tag}</span> }).collect_view()}
                <span class=count_class>{count.label}</span>
            </div>
        </article>
    }
}
