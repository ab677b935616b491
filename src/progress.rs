//! Scroll progress bar pinned to the top of the viewport.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

#[cfg(feature = "hydrate")]
use web_sys::{Document, Window};

#[cfg(feature = "hydrate")]
use crate::config::ProgressConfig;
#[cfg(feature = "hydrate")]
use crate::dom::{self, Listener};
#[cfg(feature = "hydrate")]
use crate::error::BehaviorError;

pub const BAR_CSS: &str = "position: fixed; top: 0; left: 0; height: 4px; \
     background: linear-gradient(90deg, #667eea, #764ba2, #ec4899); width: 0%; z-index: 9999; \
     transition: width 0.1s ease;";

/// Percentage of the scrollable distance already scrolled.
///
/// Unclamped: a page that cannot scroll gives `NaN` (at offset 0) or an
/// infinity, and overscroll can exceed 100 or go negative.
#[must_use]
pub fn progress_percent(scroll_y: f64, scroll_height: f64, client_height: f64) -> f64 {
    scroll_y / (scroll_height - client_height) * 100.0
}

/// CSS `width` value for a percentage.
///
/// Non-finite values are spelled the way JavaScript stringifies them, which
/// the style engine rejects, leaving the previous width in place.
#[must_use]
pub fn width_css(percent: f64, clamp: bool) -> String {
    let percent = if clamp {
        if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 100.0) }
    } else {
        percent
    };
    if percent.is_nan() {
        "NaN%".to_owned()
    } else if percent.is_infinite() {
        if percent > 0.0 { "Infinity%".to_owned() } else { "-Infinity%".to_owned() }
    } else {
        format!("{percent}%")
    }
}

#[cfg(feature = "hydrate")]
pub struct ScrollProgressBar {
    _listener: Listener,
}

#[cfg(feature = "hydrate")]
impl ScrollProgressBar {
    pub fn mount(window: &Window, document: &Document, config: &ProgressConfig) -> Result<Self, BehaviorError> {
        let bar = dom::html(document.create_element("div")?)?;
        bar.style().set_css_text(BAR_CSS);
        dom::body(document)?.append_child(&bar)?;

        let root = document.document_element().ok_or(BehaviorError::MissingElement("html"))?;
        let window_for_cb = window.clone();
        let clamp = config.clamp;
        let listener = Listener::new(window, "scroll", move |_| {
            let percent = progress_percent(
                dom::scroll_y(&window_for_cb),
                f64::from(root.scroll_height()),
                f64::from(root.client_height()),
            );
            dom::set_style(&bar, "width", &width_css(percent, clamp));
        })?;
        Ok(Self { _listener: listener })
    }
}
