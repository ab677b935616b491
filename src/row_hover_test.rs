use super::*;

#[test]
fn lifted_scales_up_with_transition() {
    assert_eq!(RowPose::Lifted.transform(), "scale(1.01)");
    assert_eq!(RowPose::Lifted.transition(), Some("transform 0.2s ease"));
}

#[test]
fn resting_reverts_scale_only() {
    assert_eq!(RowPose::Resting.transform(), "scale(1)");
    assert_eq!(RowPose::Resting.transition(), None);
}
