use leptos::*;

use crate::form::requirements::password_requirements;

/// Live checklist under the password field. Advisory only; it never
/// blocks submission on its own.
#[component]
pub fn PasswordRequirements(#[prop(into)] password: Signal<String>) -> impl IntoView {
    view! {
        <div class="mt-3 space-y-2">
            {move || {
                password_requirements(&password.get())
                    .into_iter()
                    .map(|requirement| {
                        let classes = if requirement.satisfied {
                            "text-green-500"
                        } else {
                            "text-muted"
                        };
                        let glyph = if requirement.satisfied { "✓" } else { "✗" };
                        view! {
                            <div class="flex items-center gap-2 text-xs">
                                <span class=classes>{glyph}</span>
                                <span class=classes>{requirement.description}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn lists_every_requirement() {
        let html = render_to_string(|| {
            let password = create_rw_signal("pass".to_string());
            view! { <PasswordRequirements password=password/> }
        });
        assert!(html.contains("At least 8 characters"));
        assert!(html.contains("Contains uppercase letter"));
        assert!(html.contains("Contains lowercase letter"));
        assert!(html.contains("Contains number"));
    }
}
