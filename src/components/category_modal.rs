//! Category Modal Component
//!
//! Shared add/edit dialog for category names. The submit button is disabled
//! while a call is in flight; closing is left to the parent so the dialog
//! survives a rejected submission.

use leptos::prelude::*;

#[component]
pub fn CategoryModal(
    #[prop(into)] title: String,
    #[prop(into)] initial: String,
    submitting: ReadSignal<bool>,
    on_submit: Callback<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let (name, set_name) = signal(initial);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        // No client-side trimming or validation: the server decides what a
        // valid name is and its message is what the user sees.
        on_submit.run(name.get());
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>{title}</h3>
                    <button class="modal-close-btn" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <form class="modal-form" on:submit=submit>
                    <input
                        type="text"
                        name="categoryName"
                        placeholder="Category name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Saving..." } else { "Save" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
