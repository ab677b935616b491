use super::*;

#[test]
fn hidden_at_top() {
    assert_eq!(ButtonVisibility::for_scroll(0.0, 300.0), ButtonVisibility::Hidden);
}

#[test]
fn hidden_exactly_at_threshold() {
    assert_eq!(ButtonVisibility::for_scroll(300.0, 300.0), ButtonVisibility::Hidden);
}

#[test]
fn shown_past_threshold() {
    assert_eq!(ButtonVisibility::for_scroll(300.5, 300.0), ButtonVisibility::Shown);
}

#[test]
fn shown_state_is_opaque_and_visible() {
    assert_eq!(ButtonVisibility::Shown.opacity(), "1");
    assert_eq!(ButtonVisibility::Shown.visibility(), "visible");
}

#[test]
fn hidden_state_is_transparent_and_not_interactive() {
    assert_eq!(ButtonVisibility::Hidden.opacity(), "0");
    assert_eq!(ButtonVisibility::Hidden.visibility(), "hidden");
}

#[test]
fn hover_poses_differ() {
    assert_ne!(HoverPose::Raised.transform(), HoverPose::Resting.transform());
    assert_ne!(HoverPose::Raised.box_shadow(), HoverPose::Resting.box_shadow());
    assert_eq!(HoverPose::Resting.transform(), "scale(1) translateY(0)");
}

#[test]
fn initial_style_starts_hidden() {
    assert!(BUTTON_CSS.contains("opacity: 0;"));
    assert!(BUTTON_CSS.contains("visibility: hidden;"));
    assert!(BUTTON_CSS.contains("position: fixed;"));
}
