use leptos::*;

use crate::state::notifications::{use_notifications, Notification, NotificationLevel};

fn level_classes(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Success => "border-emerald-500/40 bg-emerald-50 text-emerald-700",
        NotificationLevel::Error => "border-red-500/40 bg-red-50 text-red-700",
        NotificationLevel::Info => "border-line bg-background text-main",
    }
}

/// Renders the transient notification queue, top-center. A toast
/// dismisses itself after a few seconds or on click.
#[component]
pub fn Toaster() -> impl IntoView {
    let notifications = use_notifications();
    let items = notifications.items();

    view! {
        <div class="fixed top-6 left-1/2 -translate-x-1/2 z-50 flex flex-col items-center gap-2 pointer-events-none">
            <For
                each=move || items.get()
                key=|item| item.id
                children=move |item: Notification| {
                    let id = item.id;
                    view! {
                        <div
                            class=format!(
                                "pointer-events-auto min-w-[16rem] max-w-md rounded-xl border px-4 py-3 text-sm shadow-lg {}",
                                level_classes(item.level)
                            )
                            on:click=move |_| notifications.dismiss(id)
                        >
                            {item.text}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::form::effects::Notifier;
    use crate::state::notifications::provide_notifications;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_pushed_notifications() {
        let html = render_to_string(|| {
            let state = provide_notifications();
            state.success("Welcome back!");
            view! { <Toaster/> }
        });
        assert!(html.contains("Welcome back!"));
        assert!(html.contains("bg-emerald-50"));
    }
}
