//! Toast Component
//!
//! Transient notification stack fed by AppContext. Notices dismiss
//! themselves after a few seconds, or on click.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::NoticeKind;

#[component]
pub fn Toasts() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="toast-stack">
            <For
                each=move || ctx.notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let class = match notice.kind {
                        NoticeKind::Success => "toast success",
                        NoticeKind::Error => "toast error",
                    };
                    let id = notice.id;
                    view! {
                        <div class=class on:click=move |_| ctx.dismiss_notice(id)>
                            {notice.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
