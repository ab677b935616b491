//! Live clock display.
//!
//! Renders the current local time into one element, immediately on mount and
//! then on a fixed interval. The interval is owned by [`ClockUpdater`] and
//! stops when it is dropped.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use chrono::NaiveDateTime;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;
#[cfg(feature = "hydrate")]
use web_sys::{Document, Element};

#[cfg(feature = "hydrate")]
use crate::config::ClockConfig;

/// Format a local time the way en-US `toLocaleString` does with short
/// weekday/month, numeric day/year, two-digit h:m:s, and a 12-hour clock.
///
/// `2026-10-19 21:05:03` renders as `Mon, Oct 19, 2026, 09:05:03 PM`.
#[must_use]
pub fn format_clock(now: NaiveDateTime) -> String {
    now.format("%a, %b %-d, %Y, %I:%M:%S %p").to_string()
}

/// One clock refresh: write the formatted time into `target` if it exists.
///
/// The target is looked up by the caller on every tick, so an element added
/// or replaced after mount is picked up on the next refresh. Returns whether
/// anything was written.
pub fn tick<T>(target: Option<T>, now: NaiveDateTime, write: impl FnOnce(&T, &str)) -> bool {
    let Some(target) = target else {
        return false;
    };
    write(&target, &format_clock(now));
    true
}

/// Keeps the clock element's text in sync with the wall clock.
#[cfg(feature = "hydrate")]
pub struct ClockUpdater {
    _interval: Interval,
}

#[cfg(feature = "hydrate")]
impl ClockUpdater {
    /// Render once now and schedule a refresh every `interval_ms`.
    ///
    /// The element is resolved on each tick; while it is absent the tick is a
    /// no-op.
    pub fn mount(document: &Document, config: &ClockConfig) -> Self {
        render(document, &config.element_id);
        let document = document.clone();
        let element_id = config.element_id.clone();
        let interval = Interval::new(config.interval_ms, move || render(&document, &element_id));
        Self { _interval: interval }
    }
}

#[cfg(feature = "hydrate")]
fn render(document: &Document, element_id: &str) {
    let now = chrono::Local::now().naive_local();
    let written = tick(document.get_element_by_id(element_id), now, |el: &Element, text| {
        el.set_text_content(Some(text));
    });
    if !written {
        log::trace!("clock: no #{element_id} element");
    }
}
