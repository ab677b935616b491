//! Thin browser helpers shared by the components.
//!
//! Only compiled with the `hydrate` feature. Everything here either returns a
//! [`BehaviorError`] or logs and carries on; nothing panics.

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, ScrollBehavior, ScrollToOptions, Window};

use crate::error::BehaviorError;

pub fn window() -> Result<Window, BehaviorError> {
    web_sys::window().ok_or(BehaviorError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, BehaviorError> {
    window.document().ok_or(BehaviorError::NoDocument)
}

pub fn body(document: &Document) -> Result<HtmlElement, BehaviorError> {
    document.body().ok_or(BehaviorError::MissingElement("body"))
}

/// Every element in `list`, in document order.
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| match node.dyn_into::<Element>() {
            Ok(element) => Some(element),
            Err(node) => {
                log::trace!("skipping non-element node: {node:?}");
                None
            }
        })
        .collect()
}

/// All elements under `document` matching `selector`.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, BehaviorError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

pub fn html(element: Element) -> Result<HtmlElement, BehaviorError> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| BehaviorError::WrongType("HtmlElement"))
}

/// Set one inline style property, logging failures.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    report(element.style().set_property(property, value), property);
}

/// Current vertical scroll offset, or 0 if the browser refuses to say.
pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Viewport width in CSS pixels.
pub fn inner_width(window: &Window) -> Option<f64> {
    window.inner_width().map(|w| w.as_f64()).unwrap_or(None)
}

/// Animate the window scroll position to `top` with the platform easing.
pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Log a failed DOM call at debug level.
pub fn report(result: Result<(), JsValue>, what: &str) {
    if let Err(err) = result {
        log::debug!("{what} failed: {err:?}");
    }
}

/// A registered DOM event listener.
///
/// Owns the JS closure backing the callback and unregisters it on drop, so a
/// component's listeners live exactly as long as the component.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, BehaviorError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        report(
            self.target
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref()),
            self.event,
        );
    }
}
