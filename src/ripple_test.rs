use super::*;

fn host(width: f64, height: f64) -> Rect {
    Rect { left: 100.0, top: 50.0, width, height }
}

#[test]
fn size_is_larger_dimension() {
    assert!((RippleGeometry::new(host(120.0, 40.0), 0.0, 0.0).size - 120.0).abs() < f64::EPSILON);
    assert!((RippleGeometry::new(host(30.0, 80.0), 0.0, 0.0).size - 80.0).abs() < f64::EPSILON);
}

#[test]
fn overlay_is_centered_on_click() {
    // Click at the host's center: overlay spans the host horizontally.
    let g = RippleGeometry::new(host(120.0, 40.0), 160.0, 70.0);
    assert!((g.left - 0.0).abs() < f64::EPSILON);
    assert!((g.top - -40.0).abs() < f64::EPSILON);
}

#[test]
fn click_at_corner_offsets_by_half_size() {
    let g = RippleGeometry::new(host(60.0, 60.0), 100.0, 50.0);
    assert!((g.left + 30.0).abs() < f64::EPSILON);
    assert!((g.top + 30.0).abs() < f64::EPSILON);
}

#[test]
fn px_appends_unit() {
    assert_eq!(px(120.0), "120px");
    assert_eq!(px(-12.5), "-12.5px");
}

#[test]
fn keyframes_are_named_like_the_animation() {
    assert!(RIPPLE_KEYFRAMES.starts_with("@keyframes ripple"));
    let animation = RIPPLE_STYLE.iter().find(|(p, _)| *p == "animation").map(|(_, v)| *v);
    assert_eq!(animation, Some("ripple 0.6s ease-out"));
}
