//! Mounting every component onto the page.
//!
//! Components are mounted independently: one failing (or finding nothing to
//! attach to) never stops the rest. [`MountReport`] records the outcome of
//! each so start-up logs say exactly what is live.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;

#[cfg(feature = "hydrate")]
use web_sys::{Document, Window};

#[cfg(feature = "hydrate")]
use crate::back_to_top::BackToTopButton;
#[cfg(feature = "hydrate")]
use crate::clock::ClockUpdater;
#[cfg(feature = "hydrate")]
use crate::config::PageConfig;
#[cfg(feature = "hydrate")]
use crate::fade_in::FadeInObserver;
#[cfg(feature = "hydrate")]
use crate::nav::NavToggleController;
#[cfg(feature = "hydrate")]
use crate::progress::ScrollProgressBar;
#[cfg(feature = "hydrate")]
use crate::ripple::RippleEffect;
#[cfg(feature = "hydrate")]
use crate::row_hover::RowHoverEffect;
#[cfg(feature = "hydrate")]
use crate::section_highlight::SectionHighlighter;
#[cfg(feature = "hydrate")]
use crate::shortcut::KeyboardShortcut;
#[cfg(feature = "hydrate")]
use crate::smooth_scroll::SmoothScrollRouter;
#[cfg(feature = "hydrate")]
use crate::{banner, last_updated};

use crate::error::BehaviorError;

/// Outcome of mounting one component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MountOutcome {
    Mounted,
    /// Nothing on the page to attach to.
    Skipped,
    Failed(String),
}

/// Per-component mount outcomes, in mount order.
#[derive(Clone, Debug, Default)]
pub struct MountReport {
    entries: Vec<(&'static str, MountOutcome)>,
}

impl MountReport {
    /// Record a mount result and pass the component through.
    ///
    /// Errors are logged at `warn` and swallowed so the caller can keep going.
    pub fn record<T>(&mut self, name: &'static str, result: Result<Option<T>, BehaviorError>) -> Option<T> {
        match result {
            Ok(Some(component)) => {
                log::debug!("{name}: mounted");
                self.entries.push((name, MountOutcome::Mounted));
                Some(component)
            }
            Ok(None) => {
                log::debug!("{name}: skipped");
                self.entries.push((name, MountOutcome::Skipped));
                None
            }
            Err(err) => {
                log::warn!("{name}: {err}");
                self.entries.push((name, MountOutcome::Failed(err.to_string())));
                None
            }
        }
    }

    #[must_use]
    pub fn outcome(&self, name: &str) -> Option<&MountOutcome> {
        self.entries.iter().find(|(n, _)| *n == name).map(|(_, outcome)| outcome)
    }

    #[must_use]
    pub fn mounted(&self) -> usize {
        self.count(|o| *o == MountOutcome::Mounted)
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, MountOutcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&MountOutcome) -> bool) -> usize {
        self.entries.iter().filter(|(_, o)| pred(o)).count()
    }
}

/// Every live component. Dropping it unregisters all listeners and timers.
#[cfg(feature = "hydrate")]
pub struct Page {
    _clock: Option<ClockUpdater>,
    _nav: Option<NavToggleController>,
    _smooth_scroll: Option<SmoothScrollRouter>,
    _fade_in: Option<FadeInObserver>,
    _section_highlight: Option<SectionHighlighter>,
    _row_hover: Option<RowHoverEffect>,
    _ripple: Option<RippleEffect>,
    _back_to_top: Option<BackToTopButton>,
    _progress: Option<ScrollProgressBar>,
    _shortcut: Option<KeyboardShortcut>,
}

#[cfg(feature = "hydrate")]
thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[cfg(feature = "hydrate")]
impl Page {
    pub fn mount(window: &Window, document: &Document, config: &PageConfig) -> (Self, MountReport) {
        let mut report = MountReport::default();

        let clock = report.record("clock", Ok(Some(ClockUpdater::mount(document, &config.clock))));
        report.record(
            "last_updated",
            last_updated::stamp(document, &config.last_updated).map(|n| (n > 0).then_some(n)),
        );
        let nav = report.record("nav", NavToggleController::mount(window, document, &config.nav));
        let smooth_scroll =
            report.record("smooth_scroll", SmoothScrollRouter::mount(window, document, &config.smooth_scroll).map(Some));
        let fade_in = report.record("fade_in", FadeInObserver::mount(document, &config.fade_in).map(Some));
        let section_highlight = report.record(
            "section_highlight",
            SectionHighlighter::mount(window, document, &config.section_highlight).map(Some),
        );
        let row_hover = report.record("row_hover", RowHoverEffect::mount(document, &config.row_hover).map(Some));
        let ripple = report.record("ripple", RippleEffect::mount(document, &config.ripple).map(Some));
        let back_to_top =
            report.record("back_to_top", BackToTopButton::mount(window, document, &config.back_to_top).map(Some));
        let progress = report.record("progress", ScrollProgressBar::mount(window, document, &config.progress).map(Some));
        let shortcut = report.record("shortcut", KeyboardShortcut::mount(window, document, &config.shortcut).map(Some));

        if let Some(banner_config) = &config.banner {
            banner::print(banner_config);
        }

        let page = Self {
            _clock: clock,
            _nav: nav,
            _smooth_scroll: smooth_scroll,
            _fade_in: fade_in,
            _section_highlight: section_highlight,
            _row_hover: row_hover,
            _ripple: ripple,
            _back_to_top: back_to_top,
            _progress: progress,
            _shortcut: shortcut,
        };
        (page, report)
    }

    /// Keep `self` alive for the rest of the page's life.
    pub fn install(self) {
        PAGE.with(|slot| *slot.borrow_mut() = Some(self));
    }
}
