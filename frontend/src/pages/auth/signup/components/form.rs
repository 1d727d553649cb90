use leptos::{ev::SubmitEvent, *};

use super::requirements::PasswordRequirements;
use crate::components::common::Button;
use crate::components::error::FieldErrorText;
use crate::form::fields::{FieldStore, CONFIRM_PASSWORD, EMAIL, PASSWORD, USERNAME};

fn field_value(fields: RwSignal<FieldStore>, name: &'static str) -> Signal<String> {
    Signal::derive(move || fields.with(|store| store.value(name).to_string()))
}

fn field_error(fields: RwSignal<FieldStore>, name: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || fields.with(|store| store.error(name).map(str::to_string)))
}

#[component]
fn SignupField(
    fields: RwSignal<FieldStore>,
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    on_input: Callback<(&'static str, String)>,
) -> impl IntoView {
    let value = field_value(fields, name);
    let error = field_error(fields, name);

    view! {
        <div>
            <label for=name class="block text-sm font-medium text-main mb-2">
                {label}
            </label>
            <input
                id=name
                name=name
                type=input_type
                placeholder=placeholder
                class=move || {
                    format!(
                        "w-full h-12 px-4 rounded-xl bg-background border {} focus:border-primary focus:ring-2 focus:ring-primary/20 transition-all text-main placeholder:text-muted/50",
                        if error.get().is_some() { "border-red-500" } else { "border-line" }
                    )
                }
                prop:value=value
                on:input=move |ev| on_input.call((name, event_target_value(&ev)))
            />
            <FieldErrorText error=error/>
        </div>
    }
}

#[component]
pub fn SignupForm(
    fields: RwSignal<FieldStore>,
    #[prop(into)] pending: Signal<bool>,
    on_input: Callback<(&'static str, String)>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let password = field_value(fields, PASSWORD);

    view! {
        <div class="min-h-screen flex items-center justify-center bg-background px-4 py-8">
            <div class="w-full max-w-md">
                <div class="text-center mb-8">
                    <h1 class="text-2xl font-bold text-main mb-2">"Create your account"</h1>
                    <p class="text-muted">"Start chatting with your AI assistant"</p>
                </div>

                <div class="bg-card border border-line rounded-2xl p-8 shadow-sm">
                    <form class="space-y-6" on:submit=move |ev| on_submit.call(ev)>
                        <SignupField
                            fields=fields
                            name=USERNAME
                            label="Username"
                            input_type="text"
                            placeholder="Enter your username"
                            on_input=on_input
                        />
                        <SignupField
                            fields=fields
                            name=EMAIL
                            label="Email Address"
                            input_type="email"
                            placeholder="Enter your email"
                            on_input=on_input
                        />
                        <div>
                            <SignupField
                                fields=fields
                                name=PASSWORD
                                label="Password"
                                input_type="password"
                                placeholder="Create a password"
                                on_input=on_input
                            />
                            <Show when=move || !password.get().is_empty() fallback=|| ()>
                                <PasswordRequirements password=password/>
                            </Show>
                        </div>
                        <SignupField
                            fields=fields
                            name=CONFIRM_PASSWORD
                            label="Confirm Password"
                            input_type="password"
                            placeholder="Confirm your password"
                            on_input=on_input
                        />

                        <Button class="w-full h-12" loading=pending attr:type="submit">
                            {move || if pending.get() { "Creating account..." } else { "Create Account" }}
                        </Button>
                    </form>

                    <div class="text-center mt-6">
                        <p class="text-muted">
                            "Already have an account? "
                            <a href="/login" class="text-primary font-semibold hover:text-primary/80">
                                "Sign in"
                            </a>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
