use super::*;

#[test]
fn mounted_component_passes_through() {
    let mut report = MountReport::default();
    assert_eq!(report.record("clock", Ok(Some(7))), Some(7));
    assert_eq!(report.outcome("clock"), Some(&MountOutcome::Mounted));
    assert_eq!(report.mounted(), 1);
}

#[test]
fn missing_targets_are_skipped_not_failed() {
    let mut report = MountReport::default();
    assert_eq!(report.record::<()>("nav", Ok(None)), None);
    assert_eq!(report.outcome("nav"), Some(&MountOutcome::Skipped));
    assert_eq!(report.failed(), 0);
}

#[test]
fn failure_is_isolated() {
    let mut report = MountReport::default();
    assert_eq!(report.record::<()>("progress", Err(BehaviorError::MissingElement("body"))), None);
    assert_eq!(report.record("shortcut", Ok(Some("live"))), Some("live"));
    assert_eq!(
        report.outcome("progress"),
        Some(&MountOutcome::Failed("document has no <body> element".to_owned()))
    );
    assert_eq!(report.outcome("shortcut"), Some(&MountOutcome::Mounted));
    assert_eq!(report.failed(), 1);
    assert_eq!(report.mounted(), 1);
}

#[test]
fn unknown_component_has_no_outcome() {
    let report = MountReport::default();
    assert_eq!(report.outcome("ripple"), None);
}
