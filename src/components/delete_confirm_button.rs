//! Delete Confirm Button Component
//!
//! Inline two-step delete confirmation. The destructive callback only runs
//! after an explicit confirm; cancelling disarms with no side effect.

use leptos::prelude::*;

/// Two-state delete button: idle -> armed -> confirmed/cancelled
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `on_confirm` - Callback run when the user confirms the deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);

    view! {
        <Show when=move || !armed.get()>
            <button
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_armed.set(true);
                }
            >
                "Delete"
            </button>
        </Show>
        <Show when=move || armed.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Are you sure?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes, delete it!"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                    }
                >
                    "Cancel"
                </button>
            </span>
        </Show>
    }
}
