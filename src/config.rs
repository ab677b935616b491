//! Page configuration.
//!
//! Every field has a default matching [`crate::consts`], so a page needs no
//! configuration at all. A page may override any subset by embedding a JSON
//! block:
//!
//! ```html
//! <script type="application/json" id="page-behaviors-config">
//!   { "back_to_top": { "threshold_px": 500 }, "banner": null }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::*;
use crate::error::BehaviorError;

/// Top-level configuration, one section per component.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// `log` level name (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    pub clock: ClockConfig,
    pub last_updated: LastUpdatedConfig,
    pub nav: NavConfig,
    pub smooth_scroll: SmoothScrollConfig,
    pub fade_in: FadeInConfig,
    pub section_highlight: SectionHighlightConfig,
    pub row_hover: RowHoverConfig,
    pub ripple: RippleConfig,
    pub back_to_top: BackToTopConfig,
    pub progress: ProgressConfig,
    pub shortcut: ShortcutConfig,
    /// `None` disables the console banner.
    pub banner: Option<BannerConfig>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            clock: ClockConfig::default(),
            last_updated: LastUpdatedConfig::default(),
            nav: NavConfig::default(),
            smooth_scroll: SmoothScrollConfig::default(),
            fade_in: FadeInConfig::default(),
            section_highlight: SectionHighlightConfig::default(),
            row_hover: RowHoverConfig::default(),
            ripple: RippleConfig::default(),
            back_to_top: BackToTopConfig::default(),
            progress: ProgressConfig::default(),
            shortcut: ShortcutConfig::default(),
            banner: Some(BannerConfig::default()),
        }
    }
}

impl PageConfig {
    /// Parse a configuration document. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, BehaviorError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The configured log level, falling back to `Info` for unknown names.
    #[must_use]
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Configuration from the text of an optional config block.
    ///
    /// No block yields defaults; a block that does not parse is an error the
    /// caller reports once logging is up.
    pub fn from_block(raw: Option<&str>) -> Result<Self, BehaviorError> {
        raw.map_or_else(|| Ok(Self::default()), Self::from_json)
    }

    /// Read the configuration block from `document`.
    #[cfg(feature = "hydrate")]
    pub fn load(document: &web_sys::Document) -> Result<Self, BehaviorError> {
        let raw = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        Self::from_block(raw.as_deref())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub element_id: String,
    pub interval_ms: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self { element_id: CLOCK_ELEMENT_ID.to_owned(), interval_ms: CLOCK_INTERVAL_MS }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LastUpdatedConfig {
    pub selector: String,
}

impl Default for LastUpdatedConfig {
    fn default() -> Self {
        Self { selector: LAST_UPDATED_SELECTOR.to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub toggle_id: String,
    pub list_id: String,
    pub active_class: String,
    pub mobile_breakpoint_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            toggle_id: NAV_TOGGLE_ID.to_owned(),
            list_id: NAV_LIST_ID.to_owned(),
            active_class: NAV_ACTIVE_CLASS.to_owned(),
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SmoothScrollConfig {
    pub header_offset_px: f64,
    /// Fragments that scroll to the page top instead of an element.
    pub top_fragments: Vec<String>,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            header_offset_px: HEADER_OFFSET_PX,
            top_fragments: TOP_FRAGMENTS.iter().map(|f| (*f).to_owned()).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FadeInConfig {
    pub selector: String,
    pub threshold: f64,
    pub root_margin: String,
    pub delay_ms: u32,
}

impl Default for FadeInConfig {
    fn default() -> Self {
        Self {
            selector: FADE_IN_SELECTOR.to_owned(),
            threshold: FADE_IN_THRESHOLD,
            root_margin: FADE_IN_ROOT_MARGIN.to_owned(),
            delay_ms: FADE_IN_DELAY_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SectionHighlightConfig {
    pub section_selector: String,
    pub link_selector: String,
    pub lead_px: f64,
    pub background: String,
}

impl Default for SectionHighlightConfig {
    fn default() -> Self {
        Self {
            section_selector: SECTION_SELECTOR.to_owned(),
            link_selector: NAV_LINK_SELECTOR.to_owned(),
            lead_px: SECTION_LEAD_PX,
            background: HIGHLIGHT_BACKGROUND.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RowHoverConfig {
    pub selector: String,
}

impl Default for RowHoverConfig {
    fn default() -> Self {
        Self { selector: ROW_SELECTOR.to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RippleConfig {
    pub selector: String,
    pub duration_ms: u32,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self { selector: RIPPLE_SELECTOR.to_owned(), duration_ms: RIPPLE_DURATION_MS }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackToTopConfig {
    pub threshold_px: f64,
}

impl Default for BackToTopConfig {
    fn default() -> Self {
        Self { threshold_px: BACK_TO_TOP_THRESHOLD_PX }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Clamp the bar to `0..=100` instead of passing raw ratios through.
    pub clamp: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShortcutConfig {
    /// Key (case-insensitive) that scrolls to the top.
    pub scroll_top_key: String,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self { scroll_top_key: "t".to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    pub headline: String,
    pub headline_style: String,
    pub subtitle: String,
    pub subtitle_style: String,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            headline: "🎓 Welcome to CS6.302 - Software System Development! ".to_owned(),
            headline_style: "background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; \
                             font-size: 16px; padding: 10px 20px; border-radius: 8px;"
                .to_owned(),
            subtitle: "IIIT Hyderabad | Monsoon 2025".to_owned(),
            subtitle_style: "color: #6366f1; font-size: 14px; font-weight: bold;".to_owned(),
        }
    }
}
