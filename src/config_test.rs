use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_page_constants() {
    let config = PageConfig::default();
    assert_eq!(config.clock.element_id, "txt");
    assert_eq!(config.clock.interval_ms, 1_000);
    assert_eq!(config.last_updated.selector, "#lastUpdatedVal");
    assert_eq!(config.nav.toggle_id, "navToggle");
    assert_eq!(config.nav.list_id, "navList");
    assert!((config.nav.mobile_breakpoint_px - 768.0).abs() < f64::EPSILON);
    assert!((config.smooth_scroll.header_offset_px - 100.0).abs() < f64::EPSILON);
    assert_eq!(config.smooth_scroll.top_fragments, vec!["#".to_owned(), "#home".to_owned()]);
    assert_eq!(config.fade_in.root_margin, "0px 0px -50px 0px");
    assert_eq!(config.fade_in.delay_ms, 100);
    assert!((config.section_highlight.lead_px - 150.0).abs() < f64::EPSILON);
    assert_eq!(config.ripple.duration_ms, 600);
    assert!((config.back_to_top.threshold_px - 300.0).abs() < f64::EPSILON);
    assert!(!config.progress.clamp);
    assert!(config.banner.is_some());
}

#[test]
fn empty_object_parses_to_defaults() {
    let config = PageConfig::from_json("{}").unwrap();
    assert_eq!(config, PageConfig::default());
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn partial_section_keeps_other_fields() {
    let config = PageConfig::from_json(r#"{ "nav": { "mobile_breakpoint_px": 1024 } }"#).unwrap();
    assert!((config.nav.mobile_breakpoint_px - 1024.0).abs() < f64::EPSILON);
    assert_eq!(config.nav.toggle_id, "navToggle");
    assert_eq!(config.clock, ClockConfig::default());
}

#[test]
fn null_banner_disables_it() {
    let config = PageConfig::from_json(r#"{ "banner": null }"#).unwrap();
    assert!(config.banner.is_none());
}

#[test]
fn progress_clamp_can_be_enabled() {
    let config = PageConfig::from_json(r#"{ "progress": { "clamp": true } }"#).unwrap();
    assert!(config.progress.clamp);
}

#[test]
fn invalid_json_is_a_config_error() {
    let err = PageConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, BehaviorError::Config(_)));
}

#[test]
fn wrong_field_type_is_a_config_error() {
    let err = PageConfig::from_json(r#"{ "clock": { "interval_ms": "fast" } }"#).unwrap_err();
    assert!(matches!(err, BehaviorError::Config(_)));
}

// =============================================================
// Log level
// =============================================================

#[test]
fn level_parses_known_names() {
    let config = PageConfig { log_level: "debug".to_owned(), ..PageConfig::default() };
    assert_eq!(config.level(), log::Level::Debug);
}

#[test]
fn level_falls_back_to_info() {
    let config = PageConfig { log_level: "loud".to_owned(), ..PageConfig::default() };
    assert_eq!(config.level(), log::Level::Info);
}

// =============================================================
// Config block
// =============================================================

#[test]
fn missing_block_yields_defaults() {
    assert_eq!(PageConfig::from_block(None).unwrap(), PageConfig::default());
}

#[test]
fn present_block_is_parsed() {
    let config = PageConfig::from_block(Some(r#"{ "log_level": "warn" }"#)).unwrap();
    assert_eq!(config.level(), log::Level::Warn);
}

#[test]
fn invalid_block_is_returned_to_the_caller() {
    // The caller logs this after installing the logger, then uses defaults.
    let err = PageConfig::from_block(Some("{ \"clock\": ")).unwrap_err();
    assert!(matches!(err, BehaviorError::Config(_)));
}
