//! Floating "back to top" button.

#[cfg(test)]
#[path = "back_to_top_test.rs"]
mod back_to_top_test;

#[cfg(feature = "hydrate")]
use web_sys::{Document, HtmlElement, Window};

#[cfg(feature = "hydrate")]
use crate::config::BackToTopConfig;
#[cfg(feature = "hydrate")]
use crate::dom::{self, Listener};
#[cfg(feature = "hydrate")]
use crate::error::BehaviorError;

/// Initial inline style; the button starts hidden.
pub const BUTTON_CSS: &str = "position: fixed; bottom: 30px; right: 30px; width: 50px; height: 50px; \
     border-radius: 50%; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; \
     border: none; font-size: 24px; cursor: pointer; opacity: 0; visibility: hidden; \
     transition: all 0.3s ease; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2); z-index: 1000;";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVisibility {
    Shown,
    Hidden,
}

impl ButtonVisibility {
    /// Shown strictly past `threshold_px`.
    #[must_use]
    pub fn for_scroll(scroll_y: f64, threshold_px: f64) -> Self {
        if scroll_y > threshold_px { Self::Shown } else { Self::Hidden }
    }

    #[must_use]
    pub fn opacity(self) -> &'static str {
        match self {
            Self::Shown => "1",
            Self::Hidden => "0",
        }
    }

    /// Hidden buttons are also taken out of hit-testing.
    #[must_use]
    pub fn visibility(self) -> &'static str {
        match self {
            Self::Shown => "visible",
            Self::Hidden => "hidden",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverPose {
    Raised,
    Resting,
}

impl HoverPose {
    #[must_use]
    pub fn transform(self) -> &'static str {
        match self {
            Self::Raised => "scale(1.1) translateY(-3px)",
            Self::Resting => "scale(1) translateY(0)",
        }
    }

    #[must_use]
    pub fn box_shadow(self) -> &'static str {
        match self {
            Self::Raised => "0 6px 20px rgba(0, 0, 0, 0.3)",
            Self::Resting => "0 4px 12px rgba(0, 0, 0, 0.2)",
        }
    }
}

#[cfg(feature = "hydrate")]
pub struct BackToTopButton {
    _listeners: Vec<Listener>,
}

#[cfg(feature = "hydrate")]
impl BackToTopButton {
    /// Create the button, append it to `<body>`, and wire its listeners.
    pub fn mount(window: &Window, document: &Document, config: &BackToTopConfig) -> Result<Self, BehaviorError> {
        let button = dom::html(document.create_element("button")?)?;
        button.set_inner_html("↑");
        button.set_attribute("aria-label", "Back to top")?;
        button.style().set_css_text(BUTTON_CSS);
        dom::body(document)?.append_child(&button)?;

        let mut listeners = Vec::with_capacity(4);
        {
            let window_for_cb = window.clone();
            let button = button.clone();
            let threshold = config.threshold_px;
            listeners.push(Listener::new(window, "scroll", move |_| {
                let state = ButtonVisibility::for_scroll(dom::scroll_y(&window_for_cb), threshold);
                dom::set_style(&button, "opacity", state.opacity());
                dom::set_style(&button, "visibility", state.visibility());
            })?);
        }
        {
            let window = window.clone();
            listeners.push(Listener::new(&button, "click", move |_| dom::smooth_scroll_to(&window, 0.0))?);
        }
        listeners.push(hover(&button, "mouseenter", HoverPose::Raised)?);
        listeners.push(hover(&button, "mouseleave", HoverPose::Resting)?);
        Ok(Self { _listeners: listeners })
    }
}

#[cfg(feature = "hydrate")]
fn hover(button: &HtmlElement, event: &'static str, pose: HoverPose) -> Result<Listener, BehaviorError> {
    let target = button.clone();
    Listener::new(button, event, move |_| {
        dom::set_style(&target, "transform", pose.transform());
        dom::set_style(&target, "box-shadow", pose.box_shadow());
    })
}
