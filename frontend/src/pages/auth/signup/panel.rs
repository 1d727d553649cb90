use leptos::{ev::SubmitEvent, Callback, *};

use super::components::form::SignupForm;
use super::view_model::{signup_submission, use_signup_view_model};

#[component]
pub fn SignupPanel() -> impl IntoView {
    let vm = use_signup_view_model();

    let fields = vm.fields;
    let submit_action = vm.submit_action;
    let pending = submit_action.pending();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        let snapshot = fields.get_untracked();
        match signup_submission(&snapshot) {
            Ok(payload) => submit_action.dispatch(payload),
            Err(errors) => fields.update(|store| store.set_errors(errors)),
        }
    });

    let handle_input = Callback::new(move |(name, value): (&'static str, String)| {
        fields.update(|store| {
            store
                .set_field(name, value)
                .expect("signup field names are declared");
        });
    });

    view! {
        <SignupForm
            fields=fields
            pending=pending
            on_input=handle_input
            on_submit=handle_submit
        />
    }
}
