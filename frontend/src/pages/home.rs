use leptos::*;
use leptos_meta::Title;

use crate::components::theme::ThemeToggle;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="NovaAI - Your AI assistant"/>
        <div class="min-h-screen bg-background text-main">
            <header class="max-w-[1200px] mx-auto px-6 py-4 flex items-center justify-between">
                <span class="font-bold text-lg">"NovaAI"</span>
                <nav class="flex items-center gap-3">
                    <ThemeToggle/>
                    <a
                        href="/login"
                        class="px-5 py-2 text-sm font-medium hover:bg-secondary rounded-full transition-colors"
                    >
                        "Log in"
                    </a>
                    <a
                        href="/signup"
                        class="px-5 py-2 text-sm font-semibold bg-primary text-white rounded-full hover:shadow-lg transition-all active:scale-95"
                    >
                        "Sign Up"
                    </a>
                </nav>
            </header>

            <section class="pt-24 pb-20 text-center px-4">
                <div class="max-w-3xl mx-auto space-y-6">
                    <h1 class="text-5xl md:text-7xl font-bold tracking-tight leading-[1.05]">
                        "Talk to your AI assistant"
                    </h1>
                    <p class="text-lg md:text-xl text-muted leading-relaxed">
                        "Ask questions, get answers, brainstorm ideas, or just have a conversation with your AI."
                    </p>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4 pt-6">
                        <a
                            href="/signup"
                            class="h-14 px-8 rounded-full bg-primary text-white font-bold text-lg hover:opacity-90 transition-all flex items-center justify-center"
                        >
                            "Get Started"
                        </a>
                        <a
                            href="#features"
                            class="h-14 px-8 rounded-full border border-line hover:bg-secondary/50 font-medium transition-all flex items-center justify-center"
                        >
                            "See Features"
                        </a>
                    </div>
                </div>
            </section>

            <section id="features" class="py-24 px-4 max-w-5xl mx-auto grid md:grid-cols-3 gap-8 text-center">
                <div class="p-8 bg-card rounded-2xl border border-line hover:shadow-lg transition-shadow">
                    <h3 class="text-xl font-bold mb-2">"Instant Answers"</h3>
                    <p class="text-muted text-sm">"Get accurate responses instantly on any topic."</p>
                </div>
                <div class="p-8 bg-card rounded-2xl border border-line hover:shadow-lg transition-shadow">
                    <h3 class="text-xl font-bold mb-2">"Creative Assistance"</h3>
                    <p class="text-muted text-sm">"Generate text, ideas, or content with ease."</p>
                </div>
                <div class="p-8 bg-card rounded-2xl border border-line hover:shadow-lg transition-shadow">
                    <h3 class="text-xl font-bold mb-2">"Learning & Research"</h3>
                    <p class="text-muted text-sm">"Explore new subjects with a patient tutor."</p>
                </div>
            </section>
        </div>
    }
}
