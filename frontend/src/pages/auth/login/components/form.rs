use leptos::{ev::SubmitEvent, *};

use crate::components::common::Button;

#[component]
pub fn LoginForm(
    email: RwSignal<String>,
    password: RwSignal<String>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-background px-4 py-8">
            <div class="w-full max-w-md">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold text-main mb-2">"Welcome Back"</h1>
                    <p class="text-muted">"Sign in to your NovaAI account"</p>
                </div>

                <div class="bg-card border border-line rounded-2xl p-6 shadow-lg">
                    <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
                        <div>
                            <label for="email" class="sr-only">"Email"</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                placeholder="Enter your email"
                                autocomplete="email"
                                disabled=pending
                                class="w-full px-4 py-3 bg-background border border-line rounded-lg focus:outline-none focus:ring-2 focus:ring-primary focus:border-transparent disabled:opacity-50"
                                prop:value=email
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="password" class="sr-only">"Password"</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                placeholder="Enter your password"
                                autocomplete="current-password"
                                disabled=pending
                                class="w-full px-4 py-3 bg-background border border-line rounded-lg focus:outline-none focus:ring-2 focus:ring-primary focus:border-transparent disabled:opacity-50"
                                prop:value=password
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </div>

                        <Button class="w-full py-3" loading=pending attr:type="submit">
                            {move || if pending.get() { "Signing In..." } else { "Sign In" }}
                        </Button>
                    </form>

                    <div class="mt-6 text-center text-sm">
                        <span class="text-muted">"Don't have an account? "</span>
                        <a href="/signup" class="text-primary hover:text-primary/80 font-medium">
                            "Sign up"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
