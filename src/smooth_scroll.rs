//! In-page anchor navigation with a smooth scroll that clears the fixed header.

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

#[cfg(feature = "hydrate")]
use web_sys::{Document, Window};

#[cfg(feature = "hydrate")]
use crate::config::SmoothScrollConfig;
#[cfg(feature = "hydrate")]
use crate::dom::{self, Listener};
#[cfg(feature = "hydrate")]
use crate::error::BehaviorError;

/// Where a fragment link should scroll to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FragmentTarget<'a> {
    /// Absolute position 0.
    Top,
    /// The element with this id.
    Element(&'a str),
}

/// Classify an anchor `href`.
///
/// Returns `None` for anything that is not an in-page fragment. The bare `#`
/// and any configured alias resolve to [`FragmentTarget::Top`].
#[must_use]
pub fn resolve_fragment<'a>(href: &'a str, top_fragments: &[String]) -> Option<FragmentTarget<'a>> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() || top_fragments.iter().any(|alias| alias == href) {
        return Some(FragmentTarget::Top);
    }
    Some(FragmentTarget::Element(id))
}

/// Document scroll offset that puts an element's top just below the header.
///
/// `element_top` is relative to the viewport, as `getBoundingClientRect` reports.
#[must_use]
pub fn scroll_offset(element_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    element_top + scroll_y - header_offset
}

/// Intercepts clicks on every `a[href^="#"]`.
#[cfg(feature = "hydrate")]
pub struct SmoothScrollRouter {
    _listeners: Vec<Listener>,
}

#[cfg(feature = "hydrate")]
impl SmoothScrollRouter {
    pub fn mount(window: &Window, document: &Document, config: &SmoothScrollConfig) -> Result<Self, BehaviorError> {
        let anchors = dom::query_all(document, r##"a[href^="#"]"##)?;
        let mut listeners = Vec::with_capacity(anchors.len());
        for anchor in anchors {
            let window = window.clone();
            let document = document.clone();
            let anchor_for_cb = anchor.clone();
            let config = config.clone();
            listeners.push(Listener::new(&anchor, "click", move |event| {
                event.prevent_default();
                let Some(href) = anchor_for_cb.get_attribute("href") else {
                    return;
                };
                match resolve_fragment(&href, &config.top_fragments) {
                    Some(FragmentTarget::Top) => dom::smooth_scroll_to(&window, 0.0),
                    Some(FragmentTarget::Element(id)) => {
                        let Some(target) = document.get_element_by_id(id) else {
                            log::debug!("smooth scroll: no #{id}");
                            return;
                        };
                        let top = target.get_bounding_client_rect().top();
                        let offset = scroll_offset(top, dom::scroll_y(&window), config.header_offset_px);
                        dom::smooth_scroll_to(&window, offset);
                    }
                    None => {}
                }
            })?);
        }
        Ok(Self { _listeners: listeners })
    }
}
