//! Timestamp formatting utilities
//!
//! A small strftime-like interpreter. Each supported `%` directive maps to a
//! pure function of the [`Timestamp`]; anything that is not a known
//! directive is copied to the output unchanged.
//!
//! | Code | Output                                   | Example     |
//! |------|------------------------------------------|-------------|
//! | `%a` | weekday, short                           | `Tue`       |
//! | `%A` | weekday, full                            | `Tuesday`   |
//! | `%w` | weekday number, Sunday is 0              | `2`         |
//! | `%d` | day of month, unpadded                   | `7`         |
//! | `%b` | month, short                             | `Nov`       |
//! | `%B` | month, full                              | `November`  |
//! | `%m` | month number                             | `01`        |
//! | `%y` | year without century                     | `09`        |
//! | `%Y` | year                                     | `2009`      |
//! | `%H` | hour, 24h                                | `20`        |
//! | `%I` | hour, 12h                                | `08`        |
//! | `%p` | AM/PM                                    | `PM`        |
//! | `%M` | minute                                   | `04`        |
//! | `%S` | second                                   | `58`        |
//! | `%f` | nanoseconds, at least 6 digits           | `000123`    |
//! | `%z` | UTC offset                               | `+0100`     |
//! | `%Z` | zone label                               | `UTC`       |
//! | `%j` | day of year                              | `321`       |
//! | `%W` | ISO week number                          | `47`        |

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDateTime, Offset, TimeZone, Timelike};
use std::fmt;

/// A point in time expressed in its own time zone.
///
/// The formatter reads the wall-clock fields as they are; it never converts
/// to another zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    local: NaiveDateTime,
    offset: FixedOffset,
    zone: String,
}

impl Timestamp {
    /// The current time in the local zone
    ///
    /// A zero offset is labelled `UTC`; any other local offset is labelled
    /// numerically, e.g. `+02:00`.
    #[must_use]
    pub fn now() -> Self {
        let now = Local::now();
        let offset = now.offset().fix();
        Self::with_zone(now.naive_local(), offset, local_zone_label(offset))
    }

    /// Build a timestamp from wall-clock fields, an offset and a zone label
    ///
    /// Useful when the zone has a conventional abbreviation (`CST`) that the
    /// offset alone cannot express.
    #[must_use]
    pub fn with_zone(local: NaiveDateTime, offset: FixedOffset, zone: impl Into<String>) -> Self {
        Self {
            local,
            offset,
            zone: zone.into(),
        }
    }

    #[must_use]
    pub fn naive_local(&self) -> NaiveDateTime {
        self.local
    }

    #[must_use]
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    #[must_use]
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// Render this timestamp with a directive format string
    #[must_use]
    pub fn format(&self, format: &str) -> String {
        render(self, format)
    }
}

impl<Tz> From<DateTime<Tz>> for Timestamp
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    fn from(datetime: DateTime<Tz>) -> Self {
        Self {
            local: datetime.naive_local(),
            offset: datetime.offset().fix(),
            zone: datetime.offset().to_string(),
        }
    }
}

fn local_zone_label(offset: FixedOffset) -> String {
    if offset.local_minus_utc() == 0 {
        "UTC".to_string()
    } else {
        offset.to_string()
    }
}

/// A directive renderer
pub type Directive = fn(&Timestamp) -> String;

const DIRECTIVES: &[(char, Directive)] = &[
    ('a', weekday_short),
    ('A', weekday_full),
    ('w', weekday_number),
    ('d', day_of_month),
    ('b', month_short),
    ('B', month_full),
    ('m', month_number),
    ('y', year_short),
    ('Y', year_full),
    ('H', hour_24),
    ('I', hour_12),
    ('p', am_pm),
    ('M', minute),
    ('S', second),
    ('f', fraction),
    ('z', utc_offset),
    ('Z', zone_name),
    ('j', day_of_year),
    ('W', iso_week),
];

/// Look up the renderer for a directive code
#[must_use]
pub fn directive(code: char) -> Option<Directive> {
    DIRECTIVES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, render)| *render)
}

/// Render `format` against `timestamp` in a single left-to-right pass.
///
/// `%` followed by a known code expands to the directive's value. Any other
/// `%`, including one in last position, is emitted literally and scanning
/// resumes at the next character.
#[must_use]
pub fn render(timestamp: &Timestamp, format: &str) -> String {
    let mut out = String::with_capacity(format.len() * 2);
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '%' {
            if let Some(render) = chars.peek().copied().and_then(directive) {
                out.push_str(&render(timestamp));
                chars.next();
                continue;
            }
        }
        out.push(c);
    }

    out
}

fn weekday_full(ts: &Timestamp) -> String {
    ts.local.format("%A").to_string()
}

fn weekday_short(ts: &Timestamp) -> String {
    ts.local.format("%a").to_string()
}

fn weekday_number(ts: &Timestamp) -> String {
    ts.local.weekday().num_days_from_sunday().to_string()
}

// Unpadded, unlike C strftime.
fn day_of_month(ts: &Timestamp) -> String {
    ts.local.day().to_string()
}

fn month_full(ts: &Timestamp) -> String {
    ts.local.format("%B").to_string()
}

fn month_short(ts: &Timestamp) -> String {
    ts.local.format("%b").to_string()
}

fn month_number(ts: &Timestamp) -> String {
    format!("{:02}", ts.local.month())
}

/// Last two characters of the decimal year, so year 5 renders as `5`.
fn year_short(ts: &Timestamp) -> String {
    let year = ts.local.year().to_string();
    year[year.len().saturating_sub(2)..].to_string()
}

fn year_full(ts: &Timestamp) -> String {
    ts.local.year().to_string()
}

fn hour_24(ts: &Timestamp) -> String {
    format!("{:02}", ts.local.hour())
}

fn hour_12(ts: &Timestamp) -> String {
    let hour = match ts.local.hour() {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{:02}", hour)
}

fn am_pm(ts: &Timestamp) -> String {
    let marker = if ts.local.hour() < 12 { "AM" } else { "PM" };
    marker.to_string()
}

fn minute(ts: &Timestamp) -> String {
    format!("{:02}", ts.local.minute())
}

fn second(ts: &Timestamp) -> String {
    format!("{:02}", ts.local.second())
}

/// Raw nanosecond count, zero-padded to at least 6 digits and never truncated.
fn fraction(ts: &Timestamp) -> String {
    format!("{:06}", ts.local.nanosecond())
}

fn utc_offset(ts: &Timestamp) -> String {
    let seconds = ts.offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let seconds = seconds.unsigned_abs();
    format!("{}{:02}{:02}", sign, seconds / 3600, (seconds % 3600) / 60)
}

fn zone_name(ts: &Timestamp) -> String {
    ts.zone.clone()
}

fn day_of_year(ts: &Timestamp) -> String {
    format!("{:03}", ts.local.ordinal())
}

fn iso_week(ts: &Timestamp) -> String {
    format!("{:02}", ts.local.iso_week().week())
}
