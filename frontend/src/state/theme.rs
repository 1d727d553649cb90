use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }

    fn detect() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let prefers_dark = web_sys::window()
                .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
                .flatten()
                .map(|media| media.matches())
                .unwrap_or(false);
            if prefers_dark {
                return Theme::Dark;
            }
        }
        Theme::Light
    }
}

#[derive(Clone, Copy)]
pub struct ThemeState {
    theme: RwSignal<Theme>,
}

impl ThemeState {
    fn new() -> Self {
        Self {
            theme: create_rw_signal(Theme::detect()),
        }
    }

    pub fn current(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        self.apply_to_dom();
    }

    pub fn toggle(&self) {
        let next = match self.theme.get_untracked() {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.set_theme(next);
    }

    fn apply_to_dom(&self) {
        #[cfg(target_arch = "wasm32")]
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let class_list = root.class_list();
            let _ = class_list.remove_1("dark");
            let class = self.theme.get_untracked().as_class();
            if !class.is_empty() {
                let _ = class_list.add_1(class);
            }
        }
    }
}

pub fn provide_theme() -> ThemeState {
    if let Some(existing) = use_context::<ThemeState>() {
        return existing;
    }
    let state = ThemeState::new();
    provide_context(state);
    state.apply_to_dom();
    state
}

pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>().unwrap_or_else(ThemeState::new)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn dark_theme_maps_to_the_dark_class() {
        assert_eq!(Theme::Light.as_class(), "");
        assert_eq!(Theme::Dark.as_class(), "dark");
    }

    #[test]
    fn toggle_flips_the_theme() {
        with_runtime(|| {
            let state = ThemeState::new();
            let start = state.current().get_untracked();
            state.toggle();
            assert_ne!(state.current().get_untracked(), start);
            state.toggle();
            assert_eq!(state.current().get_untracked(), start);
        });
    }
}
