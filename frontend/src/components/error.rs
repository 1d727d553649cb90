use leptos::*;

/// Inline validation message rendered under the offending field.
#[component]
pub fn FieldErrorText(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <p class="text-red-500 text-sm mt-2">{move || error.get().unwrap_or_default()}</p>
        </Show>
    }
}
