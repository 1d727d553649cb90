use leptos::*;

use crate::state::theme::{use_theme, Theme};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme_state = use_theme();
    let current = theme_state.current();

    view! {
        <button
            type="button"
            class="p-2 rounded-full text-muted hover:text-main hover:bg-secondary transition-colors"
            aria-label="Toggle theme"
            on:click=move |_| theme_state.toggle()
        >
            <Show
                when=move || current.get() == Theme::Dark
                fallback=|| view! { <i class="fas fa-sun"></i> }
            >
                <i class="fas fa-moon"></i>
            </Show>
        </button>
    }
}
