pub mod api;
pub mod components;
pub mod config;
pub mod form;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("Starting NovaAI frontend (wasm)");

    // Kick off the runtime config load from ./config.json
    // (non-blocking). If window.__NOVA_ENV is present (env.js), it
    // takes precedence.
    leptos::spawn_local(async move {
        config::init().await;
        log::debug!("runtime config initialized");
    });

    router::mount_app();
}
