//! Mobile navigation toggle.
//!
//! The panel's state class is the source of truth: every activation reads it,
//! computes the next [`NavState`], and writes the class, `aria-expanded`, and
//! the toggle's rotation back together so they can never disagree.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[cfg(feature = "hydrate")]
use web_sys::{Document, Element, HtmlElement, Window};

#[cfg(feature = "hydrate")]
use crate::config::NavConfig;
#[cfg(feature = "hydrate")]
use crate::dom::{self, Listener};
#[cfg(feature = "hydrate")]
use crate::error::BehaviorError;

/// Open/closed state of the navigation panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavState {
    #[default]
    Collapsed,
    Expanded,
}

impl NavState {
    #[must_use]
    pub fn from_expanded(expanded: bool) -> Self {
        if expanded { Self::Expanded } else { Self::Collapsed }
    }

    #[must_use]
    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }

    /// State after the toggle control is activated.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    /// State to apply after a link inside the panel is activated.
    ///
    /// `None` means leave the panel alone: the viewport is wider than the
    /// breakpoint (or its width is unknown).
    #[must_use]
    pub fn after_link(viewport_width: Option<f64>, breakpoint_px: f64) -> Option<Self> {
        match viewport_width {
            Some(width) if width <= breakpoint_px => Some(Self::Collapsed),
            _ => None,
        }
    }

    /// Value for the toggle's `aria-expanded` attribute.
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.is_expanded() { "true" } else { "false" }
    }

    /// Inline `transform` for the toggle control.
    #[must_use]
    pub fn toggle_transform(self) -> &'static str {
        if self.is_expanded() { "rotate(90deg)" } else { "rotate(0deg)" }
    }
}

/// Wires the toggle control and the panel's links.
#[cfg(feature = "hydrate")]
pub struct NavToggleController {
    _listeners: Vec<Listener>,
}

#[cfg(feature = "hydrate")]
impl NavToggleController {
    /// Returns `Ok(None)` when either the toggle or the panel is missing.
    pub fn mount(window: &Window, document: &Document, config: &NavConfig) -> Result<Option<Self>, BehaviorError> {
        let (Some(toggle), Some(panel)) =
            (document.get_element_by_id(&config.toggle_id), document.get_element_by_id(&config.list_id))
        else {
            log::debug!("nav: #{} or #{} missing", config.toggle_id, config.list_id);
            return Ok(None);
        };
        let toggle = dom::html(toggle)?;

        let mut listeners = Vec::new();
        {
            let toggle_for_cb = toggle.clone();
            let panel = panel.clone();
            let class = config.active_class.clone();
            listeners.push(Listener::new(&toggle, "click", move |_| {
                let current = NavState::from_expanded(panel.class_list().contains(&class));
                apply(current.toggled(), &toggle_for_cb, &panel, &class);
            })?);
        }

        for link in dom::elements(&panel.query_selector_all("a")?) {
            let window = window.clone();
            let toggle = toggle.clone();
            let panel = panel.clone();
            let class = config.active_class.clone();
            let breakpoint = config.mobile_breakpoint_px;
            listeners.push(Listener::new(&link, "click", move |_| {
                if let Some(next) = NavState::after_link(dom::inner_width(&window), breakpoint) {
                    apply(next, &toggle, &panel, &class);
                }
            })?);
        }

        Ok(Some(Self { _listeners: listeners }))
    }
}

#[cfg(feature = "hydrate")]
fn apply(state: NavState, toggle: &HtmlElement, panel: &Element, class: &str) {
    let classes = panel.class_list();
    let result = if state.is_expanded() { classes.add_1(class) } else { classes.remove_1(class) };
    dom::report(result, "nav class");
    dom::report(toggle.set_attribute("aria-expanded", state.aria_expanded()), "aria-expanded");
    dom::set_style(toggle, "transform", state.toggle_transform());
}
