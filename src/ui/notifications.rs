//! Toast notifications
//!
//! One [`NotificationManager`] is provided by the app shell and a single
//! [`Toaster`] renders it in the bottom-right corner.

use crate::core::notification::{Notification, NotificationItem, NotificationKind, NotificationQueue};
use crate::ui::common::{Tooltip, TooltipPosition};
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Handle for raising toasts from anywhere below the app shell
#[derive(Clone, Copy)]
pub struct NotificationManager {
    queue: RwSignal<NotificationQueue>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::new()),
        }
    }

    /// Add a notification
    pub fn notify(&self, notification: Notification) {
        self.queue.update(|queue| {
            queue.push(notification);
        });
    }

    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notification::info(title, message));
    }

    pub fn warning(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notification::warning(title, message));
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| queue.dismiss(id));
    }

    fn items(&self) -> Vec<NotificationItem> {
        self.queue.with(|queue| queue.items().cloned().collect())
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_notifications() -> NotificationManager {
    let manager = NotificationManager::new();
    provide_context(manager);
    manager
}

pub fn use_notifications() -> NotificationManager {
    expect_context::<NotificationManager>()
}

/// Renders the visible toasts
#[component]
pub fn Toaster() -> impl IntoView {
    let manager = use_notifications();

    view! {
        <div class="fixed bottom-4 right-4 z-[100] flex flex-col gap-2 w-full max-w-sm" role="region" aria-label="Notifications">
            <For
                each=move || manager.items()
                key=|item| item.id
                let(item)
            >
                <Toast item=item manager=manager />
            </For>
        </div>
    }
}

#[component]
fn Toast(item: NotificationItem, manager: NotificationManager) -> impl IntoView {
    let id = item.id;
    let notification = item.notification;
    let (is_exiting, _set_is_exiting) = signal(false);

    if let Some(_ms) = notification.auto_dismiss_ms {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use leptos::task::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                // The toast may already be gone, dismissed by hand
                if _set_is_exiting.try_set(true).is_some() {
                    return;
                }
                TimeoutFuture::new(300).await;
                manager.dismiss(id);
            });
        }
    }

    let (accent, icon) = match notification.kind {
        NotificationKind::Info => ("border-primary/20 text-primary", icons::INFO),
        NotificationKind::Warning => ("border-gold/40 text-gold", icons::ALERT_TRIANGLE),
    };

    view! {
        <div
            class=format!("flex items-start gap-3 p-4 rounded-lg border bg-card shadow-book transition-all duration-300 {accent}")
            style=move || if is_exiting.get() { "opacity: 0; transform: translateX(1rem);" } else { "opacity: 1; transform: translateX(0);" }
            role="status"
        >
            <Icon name=icon class="w-5 h-5 mt-0.5 flex-shrink-0" />
            <div class="flex-1 min-w-0">
                <h4 class="text-sm font-semibold text-foreground">{notification.title}</h4>
                <p class="text-xs text-muted-foreground mt-0.5">{notification.message}</p>
            </div>
            <Tooltip text="Dismiss".to_string() position=TooltipPosition::Left>
                <button
                    class="text-muted-foreground hover:text-foreground transition-colors"
                    aria-label="Dismiss"
                    on:click=move |_| manager.dismiss(id)
                >
                    <Icon name=icons::X class="w-4 h-4" />
                </button>
            </Tooltip>
        </div>
    }
}
