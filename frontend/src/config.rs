use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_POST_LOGIN_PATH: &str = "/chat";
pub const DEFAULT_POST_SIGNUP_PATH: &str = "/verify";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub post_login_path: Option<String>,
    pub post_signup_path: Option<String>,
}

/// Post-authentication destinations, resolved with compiled defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destinations {
    pub post_login: String,
    pub post_signup: String,
}

static CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn string_prop(obj: &js_sys::Object, key: &str) -> Option<String> {
    js_sys::Reflect::get(obj, &key.into())
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
        .and_then(|value| value.as_string())
}

#[cfg(target_arch = "wasm32")]
fn global_object(name: &str) -> Option<js_sys::Object> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    Some(js_sys::Object::from(any))
}

// Expect optional globals: window.__NOVA_CONFIG = { api_base_url,
// post_login_path, post_signup_path }, and window.__NOVA_ENV =
// { API_BASE_URL } (env.js, takes precedence for the base URL).
#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    let config = global_object("__NOVA_CONFIG").map(|obj| RuntimeConfig {
        api_base_url: string_prop(&obj, "api_base_url"),
        post_login_path: string_prop(&obj, "post_login_path"),
        post_signup_path: string_prop(&obj, "post_signup_path"),
    });

    if let Some(url) = global_object("__NOVA_ENV").and_then(|env| string_prop(&env, "API_BASE_URL"))
    {
        let mut config = config.unwrap_or_default();
        config.api_base_url = Some(url);
        return Some(config);
    }
    config
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    None
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn init() {
    if CONFIG.get().is_some() {
        return;
    }
    let config = match snapshot_from_globals() {
        Some(config) => config,
        None => fetch_runtime_config().await.unwrap_or_default(),
    };
    if config.api_base_url.is_none() {
        log::warn!("no api_base_url configured, falling back to {DEFAULT_API_BASE_URL}");
    }
    let _ = CONFIG.set(config);
}

pub async fn await_api_base_url() -> String {
    init().await;
    CONFIG
        .get()
        .and_then(|config| config.api_base_url.clone())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

/// Non-blocking read of the cached config; before `init` completes (or
/// on the host) this yields the compiled defaults.
pub fn destinations() -> Destinations {
    let config = CONFIG.get();
    Destinations {
        post_login: config
            .and_then(|c| c.post_login_path.clone())
            .unwrap_or_else(|| DEFAULT_POST_LOGIN_PATH.to_string()),
        post_signup: config
            .and_then(|c| c.post_signup_path.clone())
            .unwrap_or_else(|| DEFAULT_POST_SIGNUP_PATH.to_string()),
    }
}
