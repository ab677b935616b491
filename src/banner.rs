//! Styled welcome message in the developer console.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use crate::config::BannerConfig;

/// `console.log` argument pairs: a `%c`-prefixed message and its CSS.
#[must_use]
pub fn banner_lines(config: &BannerConfig) -> [(String, &str); 2] {
    [
        (format!("%c{}", config.headline), config.headline_style.as_str()),
        (format!("%c{}", config.subtitle), config.subtitle_style.as_str()),
    ]
}

#[cfg(feature = "hydrate")]
pub fn print(config: &BannerConfig) {
    use wasm_bindgen::JsValue;

    for (message, style) in banner_lines(config) {
        web_sys::console::log_2(&JsValue::from_str(&message), &JsValue::from_str(style));
    }
}
