//! Application Context
//!
//! Shared state provided via Leptos Context API: the API client, the
//! ambient admin credential, the category reload trigger, and the toast
//! notification stack.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::models::{Notice, NoticeKind};

const TOKEN_STORAGE_KEY: &str = "auth-token";
const NOTICE_LIFETIME_MS: u32 = 4_000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Shared REST client
    api: StoredValue<ApiClient>,
    /// Admin credential; `None` means no admin request is ever issued
    pub auth_token: RwSignal<Option<String>>,
    /// Trigger to reload categories from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload categories from the backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Visible toast notifications
    pub notices: RwSignal<Vec<Notice>>,
    next_notice_id: StoredValue<u64>,
}

impl AppContext {
    pub fn new(
        api: ApiClient,
        auth_token: Option<String>,
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            api: StoredValue::new(api),
            auth_token: RwSignal::new(auth_token),
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            notices: RwSignal::new(Vec::new()),
            next_notice_id: StoredValue::new(0),
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    /// Trigger a reload of the category list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Set or clear the admin credential, persisting it across sessions
    pub fn set_auth_token(&self, token: Option<String>) {
        if let Some(storage) = local_storage() {
            let persisted = match &token {
                Some(value) => storage.set_item(TOKEN_STORAGE_KEY, value),
                None => storage.remove_item(TOKEN_STORAGE_KEY),
            };
            if persisted.is_err() {
                log::warn!("failed to persist auth token");
            }
        }
        self.auth_token.set(token);
    }

    pub fn notify_success(&self, text: impl Into<String>) {
        self.push_notice(NoticeKind::Success, text.into());
    }

    pub fn notify_error(&self, text: impl Into<String>) {
        self.push_notice(NoticeKind::Error, text.into());
    }

    pub fn dismiss_notice(&self, id: u64) {
        self.notices.update(|notices| notices.retain(|n| n.id != id));
    }

    fn push_notice(&self, kind: NoticeKind, text: String) {
        let id = self.next_notice_id.with_value(|n| *n);
        self.next_notice_id.set_value(id + 1);
        self.notices.update(|notices| notices.push(Notice { id, kind, text }));

        // Auto-dismiss once the toast has been on screen long enough
        let notices = self.notices;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_LIFETIME_MS).await;
            notices.update(|ns| ns.retain(|n| n.id != id));
        });
    }
}

/// Credential left behind by a previous session, if any
pub fn stored_auth_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
