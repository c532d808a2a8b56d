//! Category Table Component
//!
//! Admin table of food categories: list with manual refresh, add/edit via
//! the shared modal, and inline delete confirmation. The local list is only
//! touched after the matching request succeeded.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::info;
use wasm_bindgen::JsCast;

use super::{CategoryModal, DeleteConfirmButton};
use crate::api;
use crate::context::AppContext;
use crate::store::{
    store_append_category, store_remove_category, store_rename_category,
    store_replace_categories, use_app_store, AppStateStoreFields,
};

/// What the modal is currently editing
#[derive(Clone, Debug, PartialEq)]
enum ModalMode {
    Add,
    Edit { id: String, previous: String },
}

#[component]
pub fn CategoryTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (loading, set_loading) = signal(false);
    let (submitting, set_submitting) = signal(false);
    let (modal_mode, set_modal_mode) = signal::<Option<ModalMode>>(None);
    let load_seq = StoredValue::new(0u64);

    // Load categories whenever the credential or the reload trigger changes.
    // Responses are applied only if no newer load was issued meanwhile, so a
    // slow stale request cannot overwrite fresher data.
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let Some(token) = ctx.auth_token.get() else {
            return;
        };
        let seq = load_seq.with_value(|s| *s) + 1;
        load_seq.set_value(seq);
        set_loading.set(true);

        spawn_local(async move {
            let result = api::list_categories(&ctx.api(), &token).await;
            // Bail if the table was torn down or a newer load owns the list
            if load_seq.try_get_value() != Some(seq) {
                return;
            }
            match result {
                Ok(categories) => {
                    info!("loaded {} categories", categories.len());
                    store_replace_categories(&store, categories);
                }
                Err(err) => ctx.notify_error(err.to_string()),
            }
            set_loading.set(false);
        });
    });

    // Shared by the add and edit flows; the modal stays open on failure so
    // the input is not lost.
    let on_submit = Callback::new(move |name: String| {
        let Some(token) = ctx.auth_token.get_untracked() else {
            return;
        };
        let Some(mode) = modal_mode.get_untracked() else {
            return;
        };
        set_submitting.set(true);

        spawn_local(async move {
            let api = ctx.api();
            match mode {
                ModalMode::Add => match api::create_category(&api, &token, &name).await {
                    Ok(created) => {
                        ctx.notify_success(created.message);
                        store_append_category(&store, created.category);
                        set_modal_mode.try_set(None);
                    }
                    Err(err) => ctx.notify_error(err.to_string()),
                },
                ModalMode::Edit { id, .. } => {
                    match api::update_category(&api, &token, &id, &name).await {
                        Ok(message) => {
                            ctx.notify_success(message);
                            store_rename_category(&store, &id, &name);
                            set_modal_mode.try_set(None);
                        }
                        Err(err) => ctx.notify_error(err.to_string()),
                    }
                }
            }
            set_submitting.try_set(false);
        });
    });

    let on_delete = move |id: String| {
        let Some(token) = ctx.auth_token.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::delete_category(&ctx.api(), &token, &id).await {
                Ok(message) => {
                    ctx.notify_success(message);
                    store_remove_category(&store, &id);
                }
                Err(err) => ctx.notify_error(err.to_string()),
            }
        });
    };

    view! {
        <section class="category-admin">
            <div class="category-admin-header">
                <h2>"Food Categories"</h2>
                <div class="category-admin-actions">
                    <button class="refresh-btn" title="Refresh" on:click=move |_| ctx.reload()>
                        "⟳"
                    </button>
                    <button
                        class="add-category-btn"
                        on:click=move |_| set_modal_mode.set(Some(ModalMode::Add))
                    >
                        "Add New Category"
                    </button>
                </div>
            </div>

            <Show
                when=move || ctx.auth_token.get().is_some()
                fallback=|| view! { <AuthTokenPrompt /> }
            >
                <table class="category-table">
                    <thead>
                        <tr>
                            <th>"Category Name"</th>
                            <th>"Number of Items"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || loading.get()>
                            <tr class="category-loading-row">
                                <td colspan="3">"Loading..."</td>
                            </tr>
                        </Show>
                        <For
                            each=move || store.categories().get()
                            key=|category| category.id.clone()
                            children=move |category| {
                                let delete_id = category.id.clone();
                                let edit_id = category.id.clone();
                                let edit_name = category.name.clone();
                                view! {
                                    <tr class="category-row">
                                        <th class="category-name">{category.name.clone()}</th>
                                        <td class="category-count">{category.item_count}</td>
                                        <td class="category-actions">
                                            <button
                                                class="edit-btn"
                                                on:click=move |_| set_modal_mode.set(Some(ModalMode::Edit {
                                                    id: edit_id.clone(),
                                                    previous: edit_name.clone(),
                                                }))
                                            >
                                                "Edit"
                                            </button>
                                            <DeleteConfirmButton
                                                button_class="delete-btn"
                                                on_confirm=Callback::new(move |_| on_delete(delete_id.clone()))
                                            />
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>

            {move || modal_mode.get().map(|mode| {
                let (title, initial) = match &mode {
                    ModalMode::Add => ("Add New Category", String::new()),
                    ModalMode::Edit { previous, .. } => ("Edit Category", previous.clone()),
                };
                view! {
                    <CategoryModal
                        title=title
                        initial=initial
                        submitting=submitting
                        on_submit=on_submit
                        on_close=Callback::new(move |_| set_modal_mode.set(None))
                    />
                }
            })}
        </section>
    }
}

/// Credential prompt shown while no admin token is present. Entering one
/// stores it and thereby triggers the first category load.
#[component]
fn AuthTokenPrompt() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (token, set_token) = signal(String::new());

    let unlock = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = token.get();
        if value.is_empty() {
            return;
        }
        ctx.set_auth_token(Some(value));
    };

    view! {
        <form class="auth-token-form" on:submit=unlock>
            <p>"Paste an admin token to manage the menu."</p>
            <input
                type="password"
                placeholder="Admin token..."
                prop:value=move || token.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_token.set(input.value());
                }
            />
            <button type="submit">"Unlock"</button>
        </form>
    }
}
