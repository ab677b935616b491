//! Keyboard shortcut: press `t` to jump back to the top.

#[cfg(test)]
#[path = "shortcut_test.rs"]
mod shortcut_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use web_sys::{Document, Element, KeyboardEvent, Window};

#[cfg(feature = "hydrate")]
use crate::config::ShortcutConfig;
#[cfg(feature = "hydrate")]
use crate::dom::{self, Listener};
#[cfg(feature = "hydrate")]
use crate::error::BehaviorError;

/// Elements whose focus means the user is typing, not navigating.
pub const TEXT_ENTRY_SELECTOR: &str = "input, textarea";

/// Whether a keypress should scroll to the top.
///
/// Matches `shortcut` case-insensitively and never fires while typing.
#[must_use]
pub fn triggers_scroll_top(key: &str, shortcut: &str, typing: bool) -> bool {
    !typing && !shortcut.is_empty() && key.eq_ignore_ascii_case(shortcut)
}

#[cfg(feature = "hydrate")]
pub struct KeyboardShortcut {
    _listener: Listener,
}

#[cfg(feature = "hydrate")]
impl KeyboardShortcut {
    pub fn mount(window: &Window, document: &Document, config: &ShortcutConfig) -> Result<Self, BehaviorError> {
        let window = window.clone();
        let shortcut = config.scroll_top_key.clone();
        let listener = Listener::new(document, "keydown", move |event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let typing = event
                .target()
                .and_then(|t| t.dyn_ref::<Element>().map(|el| el.matches(TEXT_ENTRY_SELECTOR).unwrap_or(false)))
                .unwrap_or(false);
            if triggers_scroll_top(&key_event.key(), &shortcut, typing) {
                dom::smooth_scroll_to(&window, 0.0);
            }
        })?;
        Ok(Self { _listener: listener })
    }
}
