//! Date normalizer behavior across accepted input forms.
//!
//! Runs with a fixed UTC zone and a fixed "now" so results do not depend on
//! the machine running the tests.

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use docportal_core::{DateNormalizer, ParsedDate};

fn utc() -> DateNormalizer<Utc> {
    DateNormalizer::new(Utc)
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

#[test]
fn test_month_day_year_displays_unchanged() {
    let dates = utc();
    for input in ["01-15-2024", "12-31-1999", "02-29-2024"] {
        assert_eq!(dates.format_date(input), input);
        let parsed = dates.parse(input);
        assert_eq!(dates.display(parsed).as_deref(), Some(input));
    }
}

#[test]
fn test_full_and_short_formats() {
    let dates = utc();
    assert_eq!(dates.format_full_date("01-15-2024"), "January 15, 2024");
    assert_eq!(dates.format_short_date("01-15-2024"), "Jan 15, 2024");
    assert_eq!(
        dates.format_full_date("2024-01-15T08:30:00Z"),
        "January 15, 2024"
    );
}

#[test]
fn test_both_forms_agree_on_instant() {
    let dates = utc();
    assert_eq!(dates.parse("03-10-2024"), dates.parse("2024-03-10T00:00:00Z"));
}

#[test]
fn test_invalid_inputs_pass_through() {
    let dates = utc();
    for input in ["", "   ", "13-45-2024", "not a date"] {
        assert_eq!(dates.parse(input), ParsedDate::Invalid, "input {input:?}");
        assert!(!dates.is_valid_date(input));
        assert!(!dates.is_new(input, now()));
    }
    assert_eq!(dates.format_date("not a date"), "not a date");
    assert_eq!(dates.format_relative_time("garbage", now()), "garbage");
}

#[test]
fn test_is_new_window() {
    let dates = utc();
    let yesterday = (now() - Duration::days(1)).to_rfc3339();
    let four_months_ago = "02-15-2024";
    assert!(dates.is_new(&yesterday, now()));
    assert!(!dates.is_new(four_months_ago, now()));
    assert!(!dates.is_new("03-15-2024", now()));
    assert!(dates.is_new("03-16-2024", now()));
}

#[test]
fn test_relative_time_phrases() {
    let dates = utc();
    let three_days_ago = (now() - Duration::days(3)).to_rfc3339();
    assert_eq!(dates.format_relative_time(&three_days_ago, now()), "3 days ago");
}

#[test]
fn test_month_day_year_uses_configured_zone() {
    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
    let dates = DateNormalizer::new(plus_two);
    let expected = Utc.with_ymd_and_hms(2024, 1, 14, 22, 0, 0).unwrap();
    assert_eq!(dates.parse("01-15-2024"), ParsedDate::Valid(expected));
    assert_eq!(dates.format_date("2024-01-14T22:00:00Z"), "01-15-2024");
}

#[test]
fn test_invalid_sorts_after_valid() {
    let dates = utc();
    let mut parsed = vec![
        dates.parse("junk"),
        dates.parse("06-01-2024"),
        dates.parse("01-01-2024"),
    ];
    parsed.sort();
    assert_eq!(parsed[2], ParsedDate::Invalid);
    assert!(parsed[0].instant() < parsed[1].instant());
}
