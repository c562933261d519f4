use wasm_bindgen::JsValue;
use web_sys::js_sys::Reflect;

pub const REQUIRED_FEATURES: [&str; 3] = ["IntersectionObserver", "fetch", "Promise"];

pub const UNSUPPORTED_WARNING: &str =
    "Your browser may not support all features. Please update for the best experience.";

pub fn missing_features(has: impl Fn(&str) -> bool) -> Vec<&'static str> {
    REQUIRED_FEATURES.into_iter().filter(|name| !has(name)).collect()
}

/// Warning to show once at startup, if the browser lacks anything we use.
pub fn check_browser() -> Option<&'static str> {
    let window = web_sys::window()?;
    let missing = missing_features(|name| {
        Reflect::has(&window, &JsValue::from_str(name)).unwrap_or(false)
    });
    if missing.is_empty() {
        None
    } else {
        log::warn!("Missing browser features: {}", missing.join(", "));
        Some(UNSUPPORTED_WARNING)
    }
}
