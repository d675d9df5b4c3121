//! Date normalization for document metadata.
//!
//! Catalog dates arrive in two incompatible encodings:
//!
//! - `MM-DD-YYYY` literals (zero-padded month and day, four-digit year),
//!   interpreted as local midnight of that calendar date;
//! - standard date/time strings (RFC 3339, RFC 2822, ISO 8601 without an
//!   offset, or a bare `YYYY-MM-DD`).
//!
//! Every comparison and display of a document date goes through
//! [`DateNormalizer`]. All formatting operations are total: on failure they
//! hand back the caller's original string. The current instant is always an
//! explicit argument so results are reproducible under a fixed clock.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use docportal_core::DateNormalizer;
//!
//! let dates = DateNormalizer::new(Utc);
//! assert_eq!(dates.format_full_date("01-15-2024"), "January 15, 2024");
//! assert_eq!(dates.format_short_date("01-15-2024"), "Jan 15, 2024");
//!
//! let now = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
//! assert!(dates.is_new("01-15-2024", now));
//! ```

use chrono::{
    DateTime, Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime, TimeZone, Utc,
};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{trace, warn};

use crate::defaults::NEW_WINDOW_MONTHS;

static MONTH_DAY_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{2})-([0-9]{2})-([0-9]{4})$").unwrap());

/// ISO 8601 date-time layouts without an offset, read as local time.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DISPLAY_FORMAT: &str = "%m-%d-%Y";
const FULL_FORMAT: &str = "%B %d, %Y";
const SHORT_FORMAT: &str = "%b %d, %Y";

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

// =============================================================================
// PARSED DATE
// =============================================================================

/// Outcome of parsing a document date.
///
/// Ordering is total: valid instants compare chronologically and every
/// valid instant sorts before [`ParsedDate::Invalid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParsedDate {
    Valid(DateTime<Utc>),
    Invalid,
}

impl ParsedDate {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Valid(dt) => Some(*dt),
            Self::Invalid => None,
        }
    }
}

// =============================================================================
// DATE NORMALIZER
// =============================================================================

/// Parses and renders document dates in a fixed time zone.
///
/// `MM-DD-YYYY` dates become midnight in `tz`, offset-less date-times are
/// read in `tz`, and rendering happens in `tz`. Production code uses the
/// host zone via [`DateNormalizer::local`]; tests pin `Utc`.
#[derive(Debug, Clone)]
pub struct DateNormalizer<Tz: TimeZone = Local> {
    tz: Tz,
}

impl DateNormalizer<Local> {
    /// Normalizer for the host's local time zone.
    pub fn local() -> Self {
        Self { tz: Local }
    }
}

impl Default for DateNormalizer<Local> {
    fn default() -> Self {
        Self::local()
    }
}

impl<Tz: TimeZone> DateNormalizer<Tz>
where
    Tz::Offset: std::fmt::Display,
{
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn timezone(&self) -> &Tz {
        &self.tz
    }

    /// Parse either accepted form into an instant.
    ///
    /// Empty input is [`ParsedDate::Invalid`]; a missing date is not
    /// treated as "modified just now".
    pub fn parse(&self, input: &str) -> ParsedDate {
        if input.trim().is_empty() {
            warn!(subsystem = "dates", op = "parse", "Empty date string treated as invalid");
            return ParsedDate::Invalid;
        }

        let parsed = match MONTH_DAY_YEAR.captures(input) {
            Some(caps) => self.parse_month_day_year(&caps[1], &caps[2], &caps[3]),
            None => self.parse_standard(input.trim()),
        };

        match parsed {
            Some(instant) => {
                trace!(subsystem = "dates", raw_input = %input, parsed = %instant, "Parsed date");
                ParsedDate::Valid(instant)
            }
            None => {
                trace!(subsystem = "dates", raw_input = %input, "Unparseable date");
                ParsedDate::Invalid
            }
        }
    }

    /// True iff `input` is strictly after `now` minus three calendar months.
    ///
    /// Month subtraction is calendar arithmetic on the wall clock in the
    /// normalizer's zone, clamping to the last day of shorter months
    /// (May 31 → Feb 29). A cutoff landing in a DST gap resolves as
    /// [`DateNormalizer::parse`] does.
    pub fn is_new(&self, input: &str, now: DateTime<Utc>) -> bool {
        let ParsedDate::Valid(instant) = self.parse(input) else {
            return false;
        };
        now.with_timezone(&self.tz)
            .naive_local()
            .checked_sub_months(Months::new(NEW_WINDOW_MONTHS))
            .and_then(|cutoff| self.localize(cutoff))
            .map(|cutoff| instant > cutoff)
            .unwrap_or(false)
    }

    /// Render as `MM-DD-YYYY`. Input already in that form is returned as-is.
    pub fn format_date(&self, input: &str) -> String {
        if MONTH_DAY_YEAR.is_match(input) {
            return input.to_string();
        }
        self.render(input, DISPLAY_FORMAT)
    }

    /// Render as `"<Month> DD, YYYY"`, e.g. "January 05, 2024".
    pub fn format_full_date(&self, input: &str) -> String {
        self.render(input, FULL_FORMAT)
    }

    /// Render as `"<Mon> DD, YYYY"`, e.g. "Jan 05, 2024".
    pub fn format_short_date(&self, input: &str) -> String {
        self.render(input, SHORT_FORMAT)
    }

    /// Human phrase relative to `now`: "3 days ago", "in about 2 hours".
    pub fn format_relative_time(&self, input: &str, now: DateTime<Utc>) -> String {
        match self.parse(input) {
            ParsedDate::Valid(instant) => self.distance_phrase(instant, now),
            ParsedDate::Invalid => input.to_string(),
        }
    }

    pub fn is_valid_date(&self, input: &str) -> bool {
        self.parse(input).is_valid()
    }

    /// Render an already-parsed date as `MM-DD-YYYY`.
    pub fn display(&self, date: ParsedDate) -> Option<String> {
        date.instant().map(|instant| {
            instant
                .with_timezone(&self.tz)
                .format(DISPLAY_FORMAT)
                .to_string()
        })
    }

    fn render(&self, input: &str, pattern: &str) -> String {
        match self.parse(input) {
            ParsedDate::Valid(instant) => instant.with_timezone(&self.tz).format(pattern).to_string(),
            ParsedDate::Invalid => input.to_string(),
        }
    }

    fn parse_month_day_year(&self, month: &str, day: &str, year: &str) -> Option<DateTime<Utc>> {
        let month: u32 = month.parse().ok()?;
        let day: u32 = day.parse().ok()?;
        let year: i32 = year.parse().ok()?;
        let midnight = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)?;
        self.localize(midnight)
    }

    fn parse_standard(&self, input: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
            return Some(dt.with_timezone(&Utc));
        }
        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
                return self.localize(naive);
            }
        }
        // Bare ISO dates are UTC midnight, as host date parsers treat them.
        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Utc.from_utc_datetime(&naive))
    }

    /// Resolve a wall-clock time in the normalizer's zone. Times skipped by
    /// a DST transition resolve one hour later.
    fn localize(&self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        self.tz
            .from_local_datetime(&naive)
            .earliest()
            .or_else(|| {
                self.tz
                    .from_local_datetime(&(naive + Duration::hours(1)))
                    .earliest()
            })
            .map(|dt| dt.with_timezone(&Utc))
    }

    fn distance_phrase(&self, instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
        let future = instant > now;
        let (earlier, later) = if future { (now, instant) } else { (instant, now) };
        let minutes = round_div((later - earlier).num_seconds(), 60);

        let phrase = if minutes < 2 {
            if minutes == 0 {
                "less than a minute".to_string()
            } else {
                "1 minute".to_string()
            }
        } else if minutes < 45 {
            format!("{minutes} minutes")
        } else if minutes < 90 {
            "about 1 hour".to_string()
        } else if minutes < MINUTES_IN_DAY {
            format!("about {} hours", round_div(minutes, 60))
        } else if minutes < 2520 {
            "1 day".to_string()
        } else if minutes < MINUTES_IN_MONTH {
            plural(round_div(minutes, MINUTES_IN_DAY), "day")
        } else if minutes < MINUTES_IN_TWO_MONTHS {
            format!("about {}", plural(round_div(minutes, MINUTES_IN_MONTH), "month"))
        } else {
            let months = months_between(
                &earlier.with_timezone(&self.tz),
                &later.with_timezone(&self.tz),
            );
            if months < 12 {
                plural(round_div(minutes, MINUTES_IN_MONTH), "month")
            } else {
                let years = months / 12;
                match months % 12 {
                    0..=2 => format!("about {}", plural(years, "year")),
                    3..=8 => format!("over {}", plural(years, "year")),
                    _ => format!("almost {}", plural(years + 1, "year")),
                }
            }
        };

        if future {
            format!("in {phrase}")
        } else {
            format!("{phrase} ago")
        }
    }
}

/// Integer division rounding half up, for non-negative operands.
fn round_div(value: i64, divisor: i64) -> i64 {
    (value + divisor / 2) / divisor
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Whole calendar months from `earlier` to `later`.
fn months_between<Tz: TimeZone>(earlier: &DateTime<Tz>, later: &DateTime<Tz>) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12 + i64::from(later.month())
        - i64::from(earlier.month());
    if months > 0 && (later.day(), later.time()) < (earlier.day(), earlier.time()) {
        months -= 1;
    }
    months
}

// =============================================================================
// TESTS
// =============================================================================
