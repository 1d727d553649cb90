use leptos::*;
use leptos_meta::Title;

pub mod components;
pub mod view_model;

mod panel;

pub use panel::SignupPanel;

#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <Title text="Create Account - NovaAI"/>
        <SignupPanel />
    }
}
