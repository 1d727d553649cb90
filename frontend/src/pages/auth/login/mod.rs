use leptos::*;
use leptos_meta::Title;

pub mod components;
pub mod view_model;

mod panel;

pub use panel::LoginPanel;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <Title text="Sign In - NovaAI"/>
        <LoginPanel />
    }
}
