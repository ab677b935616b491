//! Error type shared by every component's mount path.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure while mounting a component or loading configuration.
///
/// Missing optional targets are not errors; components skip those silently.
#[derive(Debug, thiserror::Error)]
pub enum BehaviorError {
    /// No global `window` (not running in a browser).
    #[error("window is not available")]
    NoWindow,
    /// The window has no `document`.
    #[error("document is not available")]
    NoDocument,
    /// A required structural element (`<body>`, `<head>`) is missing.
    #[error("document has no <{0}> element")]
    MissingElement(&'static str),
    /// A node was found but is not of the expected interface.
    #[error("element is not a {0}")]
    WrongType(&'static str),
    /// A DOM call threw a JavaScript exception.
    #[error("javascript error: {0}")]
    Js(String),
    /// The configuration block is not valid JSON for [`crate::config::PageConfig`].
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for BehaviorError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
