//! Click ripple on links and badges.

#[cfg(test)]
#[path = "ripple_test.rs"]
mod ripple_test;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use web_sys::{Document, HtmlElement, MouseEvent};

#[cfg(feature = "hydrate")]
use crate::config::RippleConfig;
#[cfg(feature = "hydrate")]
use crate::dom::{self, Listener};
#[cfg(feature = "hydrate")]
use crate::error::BehaviorError;

/// Keyframes injected once into `<head>`; overlays reference them by name.
pub const RIPPLE_KEYFRAMES: &str = "@keyframes ripple { to { transform: scale(4); opacity: 0; } }";

/// Static part of every overlay's inline style.
pub const RIPPLE_STYLE: [(&str, &str); 6] = [
    ("position", "absolute"),
    ("border-radius", "50%"),
    ("background", "rgba(255, 255, 255, 0.6)"),
    ("transform", "scale(0)"),
    ("animation", "ripple 0.6s ease-out"),
    ("pointer-events", "none"),
];

/// Viewport-relative box of the clicked element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Size and offset of a ripple overlay inside its host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    /// Diameter: the host's larger dimension.
    pub size: f64,
    /// Offset from the host's left edge.
    pub left: f64,
    /// Offset from the host's top edge.
    pub top: f64,
}

impl RippleGeometry {
    /// Center a circle of the host's larger dimension on the click point.
    #[must_use]
    pub fn new(host: Rect, client_x: f64, client_y: f64) -> Self {
        let size = host.width.max(host.height);
        Self {
            size,
            left: client_x - host.left - size / 2.0,
            top: client_y - host.top - size / 2.0,
        }
    }
}

#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}

#[cfg(feature = "hydrate")]
pub struct RippleEffect {
    _listeners: Vec<Listener>,
}

#[cfg(feature = "hydrate")]
impl RippleEffect {
    pub fn mount(document: &Document, config: &RippleConfig) -> Result<Self, BehaviorError> {
        inject_keyframes(document)?;

        let hosts = dom::query_all(document, &config.selector)?;
        let mut listeners = Vec::with_capacity(hosts.len());
        for host in hosts {
            let Ok(host) = host.dyn_into::<HtmlElement>() else {
                continue;
            };
            let host_for_cb = host.clone();
            let document = document.clone();
            let duration_ms = config.duration_ms;
            listeners.push(Listener::new(&host, "click", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                if let Err(err) = spawn(&document, &host_for_cb, event, duration_ms) {
                    log::debug!("ripple: {err}");
                }
            })?);
        }
        Ok(Self { _listeners: listeners })
    }
}

#[cfg(feature = "hydrate")]
fn inject_keyframes(document: &Document) -> Result<(), BehaviorError> {
    let style = document.create_element("style")?;
    style.set_text_content(Some(RIPPLE_KEYFRAMES));
    let head = document.head().ok_or(BehaviorError::MissingElement("head"))?;
    head.append_child(&style)?;
    Ok(())
}

#[cfg(feature = "hydrate")]
fn spawn(document: &Document, host: &HtmlElement, event: &MouseEvent, duration_ms: u32) -> Result<(), BehaviorError> {
    let rect = host.get_bounding_client_rect();
    let geometry = RippleGeometry::new(
        Rect { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() },
        f64::from(event.client_x()),
        f64::from(event.client_y()),
    );

    let ripple = dom::html(document.create_element("span")?)?;
    let size = px(geometry.size);
    dom::set_style(&ripple, "width", &size);
    dom::set_style(&ripple, "height", &size);
    dom::set_style(&ripple, "left", &px(geometry.left));
    dom::set_style(&ripple, "top", &px(geometry.top));
    for (property, value) in RIPPLE_STYLE {
        dom::set_style(&ripple, property, value);
    }

    dom::set_style(host, "position", "relative");
    dom::set_style(host, "overflow", "hidden");
    host.append_child(&ripple)?;

    Timeout::new(duration_ms, move || ripple.remove()).forget();
    Ok(())
}
