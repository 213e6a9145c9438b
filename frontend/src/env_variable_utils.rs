//! Runtime settings from the `window.ENV_CONFIG` object that env-config.js
//! defines before the wasm bundle starts.

use js_sys::Reflect;
use konten_analysis::{parse_flag, Endpoints};
use lazy_static::lazy_static;
use wasm_bindgen::JsValue;

const DEFAULT_APP_NAME: &str = "Analisa Konten YouTube";

lazy_static! {
    pub static ref ENDPOINTS: Endpoints =
        Endpoints::resolve(get_env_var("BACKEND_URL").as_deref());
}

fn env_config() -> Option<JsValue> {
    let window = web_sys::window()?;
    let config = Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;
    if config.is_undefined() {
        log::warn!("window.ENV_CONFIG missing, using built-in defaults");
        return None;
    }
    Some(config)
}

pub fn get_env_var(key: &str) -> Option<String> {
    let value = Reflect::get(&env_config()?, &key.into()).ok()?;
    if value.is_undefined() {
        log::debug!("ENV_CONFIG.{key} not set");
        return None;
    }
    value.as_string()
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string())
}

pub fn is_debug_mode() -> bool {
    parse_flag(get_env_var("DEBUG_MODE").as_deref())
}
