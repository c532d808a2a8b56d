//! Food Menu Frontend App
//!
//! Main application component: context and store wiring, page switching
//! between the customer menu and the admin category table.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{CategoryTable, FoodCategoryDisplay, NavBar, Page, Toasts};
use crate::context::{stored_auth_token, AppContext};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Menu);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new(
        ApiClient::default(),
        stored_auth_token(),
        (reload_trigger, set_reload_trigger),
    ));
    provide_context(Store::new(AppState::default()));

    view! {
        <div class="app-layout">
            <NavBar page=page set_page=set_page />

            <main class="main-content">
                {move || match page.get() {
                    Page::Menu => view! { <FoodCategoryDisplay /> }.into_any(),
                    Page::Admin => view! { <CategoryTable /> }.into_any(),
                }}
            </main>

            <Toasts />
        </div>
    }
}
