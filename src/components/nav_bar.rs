//! Nav Bar Component
//!
//! Top navigation with page tabs and the cart badge.

use leptos::prelude::*;

use crate::store::{cart_total, use_app_store, AppStateStoreFields};

/// Which page the app is showing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Menu,
    Admin,
}

#[component]
pub fn NavBar(page: ReadSignal<Page>, set_page: WriteSignal<Page>) -> impl IntoView {
    let store = use_app_store();
    let cart_count = Memo::new(move |_| cart_total(&store.cart().get()));

    let tab_class = move |target: Page| {
        if page.get() == target {
            "nav-tab active"
        } else {
            "nav-tab"
        }
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-brand">"Food Menu"</span>
            <div class="nav-tabs">
                <button class=move || tab_class(Page::Menu) on:click=move |_| set_page.set(Page::Menu)>
                    "Menu"
                </button>
                <button class=move || tab_class(Page::Admin) on:click=move |_| set_page.set(Page::Admin)>
                    "Admin"
                </button>
            </div>
            <span class="cart-badge" title="Items in cart">
                "Cart (" {move || cart_count.get()} ")"
            </span>
        </nav>
    }
}
