use std::time::Duration;

use dioxus::prelude::*;
use uuid::Uuid;
use crate::notifications::{Notification, Severity};

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub notification: Notification,
}

/// Handle to the app-wide toast surface, shared through context.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    default_duration: Duration,
}

impl Toasts {
    pub fn new(items: Signal<Vec<Toast>>, default_duration: Duration) -> Self {
        Self { items, default_duration }
    }

    pub fn push(&mut self, notification: Notification) {
        let id = Uuid::new_v4();
        let duration = notification.duration.unwrap_or(self.default_duration);
        log::debug!("Toast: {} - {}", notification.title, notification.description);
        self.items.write().push(Toast { id, notification });
        
        // root scope, so the dismissal survives the screen that raised it
        let mut items = self.items;
        spawn_forever(async move {
            tokio::time::sleep(duration).await;
            items.write().retain(|toast| toast.id != id);
        });
    }

    pub fn extend(&mut self, notifications: impl IntoIterator<Item = Notification>) {
        for notification in notifications {
            self.push(notification);
        }
    }

    fn dismiss(&mut self, id: Uuid) {
        self.items.write().retain(|toast| toast.id != id);
    }
}

#[component]
pub fn ToastStack() -> Element {
    let toasts = use_context::<Toasts>();
    let items = toasts.items.read().clone();
    
    rsx! {
        div {
            class: "toast-stack",
            for toast in items {
                div {
                    key: "{toast.id}",
                    class: match toast.notification.severity {
                        Severity::Default => "toast",
                        Severity::Destructive => "toast toast-destructive",
                    },
                    onclick: move |_| {
                        let mut toasts = toasts;
                        toasts.dismiss(toast.id);
                    },
                    div { class: "toast-title", "{toast.notification.title}" }
                    div { class: "toast-description", "{toast.notification.description}" }
                }
            }
        }
    }
}
