//! Highlights the navigation link of the section currently being read.
//!
//! Recomputed from scratch on every scroll event; nothing is cached between
//! events.

#[cfg(test)]
#[path = "section_highlight_test.rs"]
mod section_highlight_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use web_sys::{Document, HtmlElement, Window};

#[cfg(feature = "hydrate")]
use crate::config::SectionHighlightConfig;
#[cfg(feature = "hydrate")]
use crate::dom::{self, Listener};
#[cfg(feature = "hydrate")]
use crate::error::BehaviorError;

/// Pick the current section from `(id, offset_top)` pairs in document order.
///
/// A section counts as passed once `scroll_y >= offset_top - lead_px`; the
/// last passed section wins.
#[must_use]
pub fn current_section<'a, I>(sections: I, scroll_y: f64, lead_px: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    sections
        .into_iter()
        .filter(|(_, top)| scroll_y >= top - lead_px)
        .last()
        .map(|(id, _)| id)
}

/// `(id, offset_top)` pairs for section candidates, in document order.
///
/// Candidates without a layout offset (SVG and other non-HTML elements that
/// carry an id) are dropped; they can never be the current section.
#[must_use]
pub fn section_offsets<I>(candidates: I) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = (String, Option<i32>)>,
{
    candidates
        .into_iter()
        .filter_map(|(id, top)| Some((id, f64::from(top?))))
        .collect()
}

/// Whether a navigation link points at the current section.
///
/// With no current section the target id is empty, so a bare `#` link
/// matches.
#[must_use]
pub fn is_current_link(href: Option<&str>, current: Option<&str>) -> bool {
    let Some(fragment) = href.and_then(|h| h.strip_prefix('#')) else {
        return false;
    };
    fragment == current.unwrap_or_default()
}

#[cfg(feature = "hydrate")]
pub struct SectionHighlighter {
    _listener: Listener,
}

#[cfg(feature = "hydrate")]
impl SectionHighlighter {
    pub fn mount(window: &Window, document: &Document, config: &SectionHighlightConfig) -> Result<Self, BehaviorError> {
        let window_for_cb = window.clone();
        let document = document.clone();
        let config = config.clone();
        let listener = Listener::new(window, "scroll", move |_| {
            if let Err(err) = highlight(&window_for_cb, &document, &config) {
                log::debug!("section highlight: {err}");
            }
        })?;
        Ok(Self { _listener: listener })
    }
}

#[cfg(feature = "hydrate")]
fn highlight(window: &Window, document: &Document, config: &SectionHighlightConfig) -> Result<(), BehaviorError> {
    let sections = section_offsets(
        dom::query_all(document, &config.section_selector)?
            .into_iter()
            .map(|el| (el.id(), el.dyn_ref::<HtmlElement>().map(HtmlElement::offset_top))),
    );
    let current = current_section(
        sections.iter().map(|(id, top)| (id.as_str(), *top)),
        dom::scroll_y(window),
        config.lead_px,
    );

    for link in dom::query_all(document, &config.link_selector)? {
        let Ok(link) = link.dyn_into::<HtmlElement>() else {
            continue;
        };
        dom::set_style(&link, "background", "");
        if is_current_link(link.get_attribute("href").as_deref(), current) {
            dom::set_style(&link, "background", &config.background);
        }
    }
    Ok(())
}
