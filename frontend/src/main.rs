use novaai_frontend::{config, router};

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting NovaAI frontend: initializing runtime config");

    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
        log::debug!("runtime config initialized");
        router::mount_app();
    });
}
