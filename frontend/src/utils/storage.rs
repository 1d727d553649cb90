#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .ok_or_else(|| "No window object".to_string())?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn local_storage() -> Result<web_sys::Storage, String> {
    Err("No window object".to_string())
}
