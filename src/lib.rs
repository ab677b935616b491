//! # page-behaviors
//!
//! Client-side behaviors for a static course page, compiled to WebAssembly.
//! The crate attaches to an already-rendered HTML document: it does not render
//! markup itself, it only reads the DOM and mutates text, inline styles,
//! classes, and attributes in response to browser events.
//!
//! Every module keeps its decisions (state machines, geometry, formatting,
//! thresholds) in plain Rust that is unit-tested natively, and its DOM wiring
//! behind the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`clock`] | Live clock, refreshed every second |
//! | [`last_updated`] | "Last updated" date stamp |
//! | [`nav`] | Mobile navigation toggle state machine |
//! | [`smooth_scroll`] | Fragment links with header-aware smooth scrolling |
//! | [`fade_in`] | One-shot fade-in on first visibility |
//! | [`section_highlight`] | Highlights the nav link of the current section |
//! | [`row_hover`] | Table row hover lift |
//! | [`ripple`] | Click ripple on links and badges |
//! | [`back_to_top`] | Floating back-to-top button |
//! | [`progress`] | Scroll progress bar |
//! | [`shortcut`] | `t` scrolls to the top |
//! | [`banner`] | Console welcome banner |
//! | [`page`] | Mounts every component and isolates failures |
//! | [`config`] | Optional per-page JSON configuration |
//! | [`consts`] | Default values for the configuration |

pub mod back_to_top;
pub mod banner;
pub mod clock;
pub mod config;
pub mod consts;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod fade_in;
pub mod last_updated;
pub mod nav;
pub mod page;
pub mod progress;
pub mod ripple;
pub mod row_hover;
pub mod section_highlight;
pub mod shortcut;
pub mod smooth_scroll;

pub use config::PageConfig;
pub use error::BehaviorError;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, prelude::*};

/// WASM entry point.
///
/// Mounts immediately when the document has finished parsing, otherwise waits
/// for `DOMContentLoaded`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (window, document) = match dom::window().and_then(|w| dom::document(&w).map(|d| (w, d))) {
        Ok(pair) => pair,
        Err(err) => {
            web_sys::console::error_1(&JsValue::from_str(&err.to_string()));
            return;
        }
    };

    let (config, config_error) = match PageConfig::load(&document) {
        Ok(config) => (config, None),
        Err(err) => (PageConfig::default(), Some(err)),
    };
    if let Err(err) = console_log::init_with_level(config.level()) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger already set: {err}")));
    }
    if let Some(err) = config_error {
        log::warn!("ignoring #{}: {err}", consts::CONFIG_ELEMENT_ID);
    }

    if document.ready_state() == "loading" {
        let document_for_cb = document.clone();
        let on_ready = Closure::once_into_js(move || mount(&window, &document_for_cb, &config));
        dom::report(
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()),
            "DOMContentLoaded",
        );
    } else {
        mount(&window, &document, &config);
    }
}

#[cfg(feature = "hydrate")]
fn mount(window: &web_sys::Window, document: &web_sys::Document, config: &PageConfig) {
    let (page, report) = page::Page::mount(window, document, config);
    log::info!("page behaviors ready: {} mounted, {} failed", report.mounted(), report.failed());
    page.install();
}
