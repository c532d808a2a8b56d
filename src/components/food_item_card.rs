//! Food Item Card Component
//!
//! Menu card with image, description, price, a click-to-rate star row, and
//! the add-to-cart button.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::FoodItem;
use crate::store::{store_add_to_cart, use_app_store};

#[component]
pub fn FoodItemCard(item: FoodItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    // Rating is cosmetic and local to the card
    let (rating, set_rating) = signal(0u8);

    let item_id = item.id.clone();
    let add_to_cart = move |_| {
        store_add_to_cart(&store, &item_id);
        ctx.notify_success("Item added to cart");
    };

    view! {
        <li class="food-card">
            <img src=item.image.clone() class="food-card-image" alt=item.name.clone() />
            <div class="food-card-body">
                <h5 class="food-card-name">{item.name.clone()}</h5>
                <p class="food-card-description">{item.description.clone()}</p>

                <div class="food-card-rating">
                    {(1..=5u8).map(|star| view! {
                        <button
                            class=move || if star <= rating.get() { "star-btn filled" } else { "star-btn" }
                            on:click=move |_| set_rating.set(star)
                        >
                            "★"
                        </button>
                    }).collect_view()}
                    <span class="rating-badge">{move || format!("{}.0", rating.get())}</span>
                </div>

                <div class="food-card-footer">
                    <span class="food-card-price">{format!("Rs. {}", item.price)}</span>
                    <button class="add-to-cart-btn" on:click=add_to_cart>
                        "Add To Cart"
                    </button>
                </div>
            </div>
        </li>
    }
}
