use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-background text-main space-y-4">
            <h1 class="text-6xl font-bold">"404"</h1>
            <p class="text-muted">"The page you are looking for does not exist."</p>
            <a href="/" class="text-primary font-medium hover:underline">
                "Back to home"
            </a>
        </div>
    }
}
