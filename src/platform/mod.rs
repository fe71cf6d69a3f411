//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Logger setup
//! - Seed entropy
//! - High score storage backend

/// Install the logger for this platform. Safe to call more than once.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Install the logger and panic hook for this platform. Safe to call more than once.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// WASM module entry: logger and panic hook
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    init_logging();
    log::info!("Water Catch core loaded");
}

/// Fresh spawner seed from OS / browser entropy
pub fn entropy_seed() -> u64 {
    rand::random::<u64>()
}

/// High score backend for this platform
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultStore = crate::persistence::JsonFileStore;
/// High score backend for this platform
#[cfg(target_arch = "wasm32")]
pub type DefaultStore = crate::persistence::LocalStorageStore;

/// Default high score backend for this platform
pub fn default_store() -> DefaultStore {
    DefaultStore::default()
}

/// Browser LocalStorage, or why it can't be reached
#[cfg(target_arch = "wasm32")]
pub(crate) fn local_storage() -> Result<web_sys::Storage, crate::PersistError> {
    web_sys::window()
        .ok_or(crate::PersistError::Unavailable("no window"))?
        .local_storage()
        .ok()
        .flatten()
        .ok_or(crate::PersistError::Unavailable("LocalStorage disabled"))
}
