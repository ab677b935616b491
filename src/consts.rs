//! Default constants shared by the page behaviors.
//!
//! Each value is the default for the matching [`crate::config`] field; the
//! components read the configured value, never these directly.

// ── Clock ───────────────────────────────────────────────────────

/// Element id of the live clock display.
pub const CLOCK_ELEMENT_ID: &str = "txt";

/// Clock refresh period in milliseconds.
pub const CLOCK_INTERVAL_MS: u32 = 1_000;

/// Selector for every "last updated" marker.
pub const LAST_UPDATED_SELECTOR: &str = "#lastUpdatedVal";

// ── Navigation ──────────────────────────────────────────────────

pub const NAV_TOGGLE_ID: &str = "navToggle";
pub const NAV_LIST_ID: &str = "navList";

/// Class marking the navigation panel as expanded.
pub const NAV_ACTIVE_CLASS: &str = "active";

/// Widest viewport, in CSS pixels, that collapses the menu on link activation.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// ── Scrolling ───────────────────────────────────────────────────

/// Height reserved for the fixed page header when scrolling to a section.
pub const HEADER_OFFSET_PX: f64 = 100.0;

/// Fragments that always mean "page top".
pub const TOP_FRAGMENTS: [&str; 2] = ["#", "#home"];

/// Distance above a section's top at which it becomes the current section.
pub const SECTION_LEAD_PX: f64 = 150.0;

pub const SECTION_SELECTOR: &str = "[id]";
pub const NAV_LINK_SELECTOR: &str = ".main-nav a";
pub const HIGHLIGHT_BACKGROUND: &str = "rgba(255, 255, 255, 0.25)";

/// Scroll offset past which the back-to-top button shows.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

// ── Fade-in ─────────────────────────────────────────────────────

pub const FADE_IN_SELECTOR: &str = "table";

/// Fraction of a target that must be visible to reveal it.
pub const FADE_IN_THRESHOLD: f64 = 0.1;

/// Observer root margin; shrinks the viewport by 50px at the bottom.
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Delay between the hidden pose and the start of the transition.
pub const FADE_IN_DELAY_MS: u32 = 100;

// ── Effects ─────────────────────────────────────────────────────

pub const ROW_SELECTOR: &str = "table tr";
pub const RIPPLE_SELECTOR: &str = ".badge-link, a[href]";

/// Lifetime of a ripple overlay; matches the keyframe animation length.
pub const RIPPLE_DURATION_MS: u32 = 600;

/// Element id of the optional JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "page-behaviors-config";
