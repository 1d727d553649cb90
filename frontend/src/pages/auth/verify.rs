use leptos::*;
use leptos_meta::Title;

/// Post-registration screen; purely informational.
#[component]
pub fn VerifyPage() -> impl IntoView {
    view! {
        <Title text="Verify Your Email - NovaAI"/>
        <div class="min-h-screen flex items-center justify-center bg-background px-4">
            <div class="w-full max-w-md bg-card border border-line p-8 rounded-2xl text-center space-y-6">
                <div class="w-20 h-20 bg-background rounded-full flex items-center justify-center mx-auto border border-line text-primary text-3xl">
                    <i class="fas fa-envelope-open"></i>
                </div>

                <div class="space-y-2">
                    <h1 class="text-2xl font-bold text-main">"Check your email"</h1>
                    <p class="text-muted text-sm leading-relaxed">
                        "We sent a verification link to your email address. Please click the link to activate your account."
                    </p>
                </div>

                <div class="pt-4">
                    <a
                        href="/login"
                        class="inline-block w-full px-6 py-3 rounded-xl text-sm bg-primary text-white font-semibold hover:bg-primary/90"
                    >
                        "Back to Login"
                    </a>
                </div>
            </div>
        </div>
    }
}
