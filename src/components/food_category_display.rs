//! Food Category Display Component
//!
//! Customer-facing menu: the flat catalog partitioned into one section per
//! category, recomputed whenever the catalog changes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::error;

use super::FoodItemCard;
use crate::api;
use crate::context::AppContext;
use crate::menu::{group_by_category, section_id};
use crate::store::{store_replace_food_items, use_app_store, AppStateStoreFields};

#[component]
pub fn FoodCategoryDisplay() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    // Fetch the catalog on mount; the menu is public, no credential involved
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_food_items(&ctx.api()).await {
                Ok(items) => store_replace_food_items(&store, items),
                Err(err) => {
                    error!("failed to load the food catalog: {err}");
                    ctx.notify_error(err.to_string());
                }
            }
        });
    });

    let groups = Memo::new(move |_| group_by_category(&store.food_items().get()));

    view! {
        <div class="food-menu">
            <For
                each=move || groups.get()
                key=|group| group.category.clone()
                children=move |group| {
                    view! {
                        <section id=section_id(&group.category) class="food-category-section">
                            <h2 class="food-category-title">{group.category.clone()}</h2>
                            <ul class="food-grid">
                                {group.items.iter().map(|item| view! {
                                    <FoodItemCard item=item.clone() />
                                }).collect_view()}
                            </ul>
                        </section>
                    }
                }
            />
        </div>
    }
}
