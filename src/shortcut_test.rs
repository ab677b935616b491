use super::*;

#[test]
fn lowercase_and_uppercase_trigger() {
    assert!(triggers_scroll_top("t", "t", false));
    assert!(triggers_scroll_top("T", "t", false));
}

#[test]
fn other_keys_do_not_trigger() {
    assert!(!triggers_scroll_top("y", "t", false));
    assert!(!triggers_scroll_top("Tab", "t", false));
    assert!(!triggers_scroll_top("Enter", "t", false));
}

#[test]
fn typing_suppresses_shortcut() {
    assert!(!triggers_scroll_top("t", "t", true));
}

#[test]
fn empty_shortcut_never_triggers() {
    assert!(!triggers_scroll_top("", "", false));
}

#[test]
fn text_entry_selector_covers_inputs_and_textareas() {
    assert_eq!(TEXT_ENTRY_SELECTOR, "input, textarea");
}
