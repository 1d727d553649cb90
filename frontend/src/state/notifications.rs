use leptos::*;

use crate::form::effects::Notifier;

#[cfg(target_arch = "wasm32")]
const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub text: String,
}

/// Transient toast queue. `Copy`; copies share the same signals.
#[derive(Clone, Copy)]
pub struct NotificationState {
    items: RwSignal<Vec<Notification>>,
    next_id: RwSignal<u64>,
}

impl NotificationState {
    fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            next_id: create_rw_signal(0),
        }
    }

    pub fn items(&self) -> RwSignal<Vec<Notification>> {
        self.items
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|item| item.id != id));
    }

    fn push(&self, level: NotificationLevel, text: &str) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| {
            items.push(Notification {
                id,
                level,
                text: text.to_string(),
            })
        });

        #[cfg(target_arch = "wasm32")]
        {
            let items = self.items;
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
                items.update(|items| items.retain(|item| item.id != id));
            });
        }
    }
}

impl Notifier for NotificationState {
    fn success(&self, text: &str) {
        self.push(NotificationLevel::Success, text);
    }

    fn error(&self, text: &str) {
        self.push(NotificationLevel::Error, text);
    }

    fn info(&self, text: &str) {
        self.push(NotificationLevel::Info, text);
    }
}

pub fn provide_notifications() -> NotificationState {
    if let Some(existing) = use_context::<NotificationState>() {
        return existing;
    }
    let state = NotificationState::new();
    provide_context(state);
    state
}

pub fn use_notifications() -> NotificationState {
    use_context::<NotificationState>().unwrap_or_else(NotificationState::new)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn push_appends_with_increasing_ids() {
        with_runtime(|| {
            let state = NotificationState::new();
            state.success("saved");
            state.error("broke");

            let items = state.items().get();
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].level, NotificationLevel::Success);
            assert_eq!(items[1].level, NotificationLevel::Error);
            assert!(items[0].id < items[1].id);
        });
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        with_runtime(|| {
            let state = NotificationState::new();
            state.info("first");
            state.info("second");

            let first_id = state.items().get()[0].id;
            state.dismiss(first_id);

            let items = state.items().get();
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].text, "second");
        });
    }
}
