//! inventory::dates
//!
//! Parsing of operator-entered date expressions.
//!
//! Operators type anything from `2024-12-25` to `next monday`. Every form
//! resolves against a caller-supplied reference time, so parsing is
//! deterministic under test. An expression that fits no form is an error:
//! the tool must never write an invalid date into the feed.
//!
//! # Accepted forms
//!
//! - RFC 3339 / ISO-8601 date-times (`2024-12-25T08:30:00Z`,
//!   `2024-12-25T08:30:00.000+02:00`); offsets are converted to UTC, and a
//!   missing offset is read as UTC
//! - Calendar dates at UTC midnight: `2024-12-25`, `2024/12/25`,
//!   `12/25/2024`, `12-25-2024`, `12/25/24`
//! - `today`, `tomorrow`, `yesterday`
//! - Weekday names, optionally prefixed with `next`: the next occurrence
//!   strictly after the reference date
//! - `in N days`

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Utc, Weekday};
use thiserror::Error;

/// Errors from date-expression parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateExprError {
    #[error("cannot understand date expression '{0}'")]
    Unparseable(String),
}

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

// `%m/%d/%y` is tried ahead of `%m/%d/%Y`: a four-digit year leaves
// trailing digits under `%y` and falls through, while a two-digit year
// would otherwise parse under `%Y` as a first-century date.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%y", "%m/%d/%Y", "%m-%d-%Y"];

/// Parse an operator date expression against a reference time.
pub fn parse_date_expression(
    input: &str,
    now: &DateTime<Utc>,
) -> Result<DateTime<Utc>, DateExprError> {
    let unparseable = || DateExprError::Unparseable(input.to_string());
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(unparseable());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(at_utc_midnight(date));
        }
    }

    let lower = trimmed.to_ascii_lowercase();
    let today = now.date_naive();
    match lower.as_str() {
        "today" => return Ok(at_utc_midnight(today)),
        "tomorrow" => {
            let date = today.checked_add_days(Days::new(1)).ok_or_else(unparseable)?;
            return Ok(at_utc_midnight(date));
        }
        "yesterday" => {
            let date = today.checked_sub_days(Days::new(1)).ok_or_else(unparseable)?;
            return Ok(at_utc_midnight(date));
        }
        _ => {}
    }

    let weekday_name = lower.strip_prefix("next ").unwrap_or(&lower);
    if let Some(weekday) = parse_weekday(weekday_name) {
        let date = next_occurrence(today, weekday).ok_or_else(unparseable)?;
        return Ok(at_utc_midnight(date));
    }

    if let Some(days) = parse_in_n_days(&lower) {
        let date = today.checked_add_days(Days::new(days)).ok_or_else(unparseable)?;
        return Ok(at_utc_midnight(date));
    }

    Err(unparseable())
}

fn at_utc_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    let weekday = match name {
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tue" | "tues" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thu" | "thurs" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        "sunday" | "sun" => Weekday::Sun,
        _ => return None,
    };
    Some(weekday)
}

/// The next calendar date with the given weekday, strictly after `today`.
fn next_occurrence(today: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let ahead = (weekday.num_days_from_monday() + 7 - today.weekday().num_days_from_monday()) % 7;
    let ahead = if ahead == 0 { 7 } else { ahead };
    today.checked_add_days(Days::new(u64::from(ahead)))
}

fn parse_in_n_days(lower: &str) -> Option<u64> {
    let rest = lower.strip_prefix("in ")?;
    let number = rest.strip_suffix(" days").or_else(|| rest.strip_suffix(" day"))?;
    number.trim().parse().ok()
}
