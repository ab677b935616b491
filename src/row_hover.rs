//! Slight lift on table rows under the pointer.

#[cfg(test)]
#[path = "row_hover_test.rs"]
mod row_hover_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use web_sys::{Document, HtmlElement};

#[cfg(feature = "hydrate")]
use crate::config::RowHoverConfig;
#[cfg(feature = "hydrate")]
use crate::dom::{self, Listener};
#[cfg(feature = "hydrate")]
use crate::error::BehaviorError;

pub const ROW_TRANSITION: &str = "transform 0.2s ease";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowPose {
    Lifted,
    Resting,
}

impl RowPose {
    #[must_use]
    pub fn transform(self) -> &'static str {
        match self {
            Self::Lifted => "scale(1.01)",
            Self::Resting => "scale(1)",
        }
    }

    /// Transition to set with this pose; only entering sets one.
    #[must_use]
    pub fn transition(self) -> Option<&'static str> {
        match self {
            Self::Lifted => Some(ROW_TRANSITION),
            Self::Resting => None,
        }
    }
}

#[cfg(feature = "hydrate")]
pub struct RowHoverEffect {
    _listeners: Vec<Listener>,
}

#[cfg(feature = "hydrate")]
impl RowHoverEffect {
    pub fn mount(document: &Document, config: &RowHoverConfig) -> Result<Self, BehaviorError> {
        let rows = dom::query_all(document, &config.selector)?;
        let mut listeners = Vec::with_capacity(rows.len() * 2);
        for row in rows {
            let Ok(row) = row.dyn_into::<HtmlElement>() else {
                continue;
            };
            listeners.push(pose_on(&row, "mouseenter", RowPose::Lifted)?);
            listeners.push(pose_on(&row, "mouseleave", RowPose::Resting)?);
        }
        Ok(Self { _listeners: listeners })
    }
}

#[cfg(feature = "hydrate")]
fn pose_on(row: &HtmlElement, event: &'static str, pose: RowPose) -> Result<Listener, BehaviorError> {
    let target = row.clone();
    Listener::new(row, event, move |_| {
        dom::set_style(&target, "transform", pose.transform());
        if let Some(transition) = pose.transition() {
            dom::set_style(&target, "transition", transition);
        }
    })
}
