//! Transient, non-blocking notifications (toasts).

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::config::app_config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub text: String,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NotificationKind::Success, text.into());
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(NotificationKind::Info, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        let text = text.into();
        log::warn!("notify error: {}", text);
        self.push(NotificationKind::Error, text);
    }

    pub fn dismiss(&self, id: u64) {
        // The host may already be gone when a timer fires.
        let _ = self.items.try_update(|items| items.retain(|n| n.id != id));
    }

    fn push(&self, kind: NotificationKind, text: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| items.push(Notification { id, kind, text }));

        let this = *self;
        let timeout = app_config().notification_timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            this.dismiss(id);
        });
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not found in context")
}

/// Renders the active notifications in the corner of the screen.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notifications">
            <For
                each=move || service.items.get()
                key=|n| n.id
                children=move |n: Notification| {
                    let intent = match n.kind {
                        NotificationKind::Success => MessageBarIntent::Success,
                        NotificationKind::Info => MessageBarIntent::Info,
                        NotificationKind::Error => MessageBarIntent::Error,
                    };
                    let id = n.id;
                    view! {
                        <div class="notifications__item" on:click=move |_| service.dismiss(id)>
                            <MessageBar intent=intent>
                                <MessageBarBody>{n.text}</MessageBarBody>
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}
