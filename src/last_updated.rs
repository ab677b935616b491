//! "Last updated" date stamp.

#[cfg(test)]
#[path = "last_updated_test.rs"]
mod last_updated_test;

use chrono::NaiveDate;

#[cfg(feature = "hydrate")]
use web_sys::Document;

#[cfg(feature = "hydrate")]
use crate::config::LastUpdatedConfig;
#[cfg(feature = "hydrate")]
use crate::dom;
#[cfg(feature = "hydrate")]
use crate::error::BehaviorError;

/// Long-month date, e.g. `October 19, 2026`.
#[must_use]
pub fn format_last_updated(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Write today's date into every element matching the marker selector.
///
/// Returns how many elements were stamped. All of them receive the same text.
#[cfg(feature = "hydrate")]
pub fn stamp(document: &Document, config: &LastUpdatedConfig) -> Result<usize, BehaviorError> {
    let text = format_last_updated(chrono::Local::now().date_naive());
    let targets = dom::query_all(document, &config.selector)?;
    for target in &targets {
        target.set_text_content(Some(&text));
    }
    Ok(targets.len())
}
