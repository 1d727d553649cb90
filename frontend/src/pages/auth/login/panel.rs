use leptos::{ev::SubmitEvent, Callback, *};

use super::components::form::LoginForm;
use super::view_model::{login_submission, use_login_view_model};
use crate::form::effects::Notifier;
use crate::state::notifications::use_notifications;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let notifications = use_notifications();

    let email = vm.email;
    let password = vm.password;
    let submit_action = vm.submit_action;
    let pending = submit_action.pending();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        match login_submission(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => submit_action.dispatch(credentials),
            // One combined message instead of per-field errors.
            Err(message) => notifications.error(&message),
        }
    });

    view! {
        <LoginForm
            email=email
            password=password
            pending=pending
            on_submit=handle_submit
        />
    }
}
