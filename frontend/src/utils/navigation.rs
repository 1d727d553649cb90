use crate::form::effects::Navigator;

/// Full-page navigation via `window.location`. Destinations may point
/// outside this bundle (the chat app ships separately).
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn go_to(&self, path: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if window.location().set_href(path).is_err() {
                    log::warn!("navigation to {path} failed");
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            log::debug!("navigation outside a browser ignored: {path}");
        }
    }
}
