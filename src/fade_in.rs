//! Fade-in on first visibility.
//!
//! Each target animates from [`FadePose::Hidden`] to [`FadePose::Shown`] the
//! first time it qualifies as visible, then is unobserved for good. The
//! [`FadeInTracker`] guards against a notification that was already queued
//! before the unobserve took effect.

#[cfg(test)]
#[path = "fade_in_test.rs"]
mod fade_in_test;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
#[cfg(feature = "hydrate")]
use web_sys::{Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[cfg(feature = "hydrate")]
use crate::config::FadeInConfig;
#[cfg(feature = "hydrate")]
use crate::dom;
#[cfg(feature = "hydrate")]
use crate::error::BehaviorError;

/// Transition applied between the two poses.
pub const FADE_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// The two ends of the fade-in animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadePose {
    /// Transparent and pushed 20px down.
    Hidden,
    /// Opaque and in place.
    Shown,
}

impl FadePose {
    #[must_use]
    pub fn opacity(self) -> &'static str {
        match self {
            Self::Hidden => "0",
            Self::Shown => "1",
        }
    }

    #[must_use]
    pub fn transform(self) -> &'static str {
        match self {
            Self::Hidden => "translateY(20px)",
            Self::Shown => "translateY(0)",
        }
    }
}

/// Which targets have already been revealed.
#[derive(Clone, Debug, Default)]
pub struct FadeInTracker {
    revealed: Vec<bool>,
}

impl FadeInTracker {
    #[must_use]
    pub fn new(targets: usize) -> Self {
        Self { revealed: vec![false; targets] }
    }

    /// Mark `index` revealed. Returns `true` only on the first call for that
    /// index; unknown indices are never revealed.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(done) if !*done => {
                *done = true;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Targets still waiting for their first qualifying intersection.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|done| !**done).count()
    }
}

#[cfg(feature = "hydrate")]
type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Observes every fade-in target and animates each one once.
#[cfg(feature = "hydrate")]
pub struct FadeInObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

#[cfg(feature = "hydrate")]
impl FadeInObserver {
    pub fn mount(document: &Document, config: &FadeInConfig) -> Result<Self, BehaviorError> {
        let targets = Rc::new(dom::query_all(document, &config.selector)?);
        let tracker = Rc::new(RefCell::new(FadeInTracker::new(targets.len())));
        let delay_ms = config.delay_ms;

        let targets_for_cb = Rc::clone(&targets);
        let callback: ObserverCallback =
            Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    observer.unobserve(&target);
                    let Some(index) = targets_for_cb.iter().position(|t| *t == target) else {
                        continue;
                    };
                    if tracker.borrow_mut().reveal(index) {
                        animate(target, delay_ms);
                    }
                }
            }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.threshold));
        init.set_root_margin(&config.root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for target in targets.iter() {
            observer.observe(target);
        }
        log::debug!("fade-in: observing {} element(s)", targets.len());
        Ok(Self { observer, _callback: callback })
    }
}

#[cfg(feature = "hydrate")]
impl Drop for FadeInObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(feature = "hydrate")]
fn animate(target: Element, delay_ms: u32) {
    let Ok(target) = target.dyn_into::<HtmlElement>() else {
        return;
    };
    apply_pose(&target, FadePose::Hidden);
    Timeout::new(delay_ms, move || {
        dom::set_style(&target, "transition", FADE_TRANSITION);
        apply_pose(&target, FadePose::Shown);
    })
    .forget();
}

#[cfg(feature = "hydrate")]
fn apply_pose(target: &HtmlElement, pose: FadePose) {
    dom::set_style(target, "opacity", pose.opacity());
    dom::set_style(target, "transform", pose.transform());
}
