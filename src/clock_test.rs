use super::*;

use chrono::NaiveDate;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, s))
        .unwrap()
}

#[test]
fn evening_uses_pm_and_padded_hour() {
    assert_eq!(format_clock(at(2026, 10, 19, 21, 5, 3)), "Mon, Oct 19, 2026, 09:05:03 PM");
}

#[test]
fn morning_uses_am() {
    assert_eq!(format_clock(at(2025, 8, 1, 7, 30, 0)), "Fri, Aug 1, 2025, 07:30:00 AM");
}

#[test]
fn midnight_is_twelve_am() {
    assert_eq!(format_clock(at(2025, 1, 1, 0, 0, 0)), "Wed, Jan 1, 2025, 12:00:00 AM");
}

#[test]
fn noon_is_twelve_pm() {
    assert_eq!(format_clock(at(2024, 2, 29, 12, 0, 59)), "Thu, Feb 29, 2024, 12:00:59 PM");
}

#[test]
fn day_of_month_is_not_padded() {
    let text = format_clock(at(2025, 3, 9, 10, 0, 0));
    assert!(text.contains("Mar 9,"), "{text}");
}

// =============================================================
// tick
// =============================================================

#[test]
fn tick_without_target_writes_nothing() {
    let mut writes = Vec::new();
    let written = tick(None::<()>, at(2026, 10, 19, 9, 0, 0), |_, text| writes.push(text.to_owned()));
    assert!(!written);
    assert!(writes.is_empty());
}

#[test]
fn tick_writes_into_target_that_appears_later() {
    let mut slot = String::new();
    let now = at(2026, 10, 19, 21, 5, 3);

    // First refresh: element not on the page yet.
    assert!(!tick(None::<&str>, now, |_, _| {}));

    // A later refresh resolves the element afresh and renders into it.
    let written = tick(Some("txt"), now, |id, text| {
        assert_eq!(*id, "txt");
        slot = text.to_owned();
    });
    assert!(written);
    assert_eq!(slot, "Mon, Oct 19, 2026, 09:05:03 PM");
}

#[test]
fn tick_follows_replaced_target() {
    let mut rendered = Vec::new();
    let now = at(2025, 1, 1, 0, 0, 0);
    for target in ["old", "new"] {
        tick(Some(target), now, |id, text| rendered.push(format!("{id}={text}")));
    }
    assert_eq!(
        rendered,
        vec!["old=Wed, Jan 1, 2025, 12:00:00 AM".to_owned(), "new=Wed, Jan 1, 2025, 12:00:00 AM".to_owned()]
    );
}
