//! inventory::timestamp
//!
//! UTC timestamps and the feed's two wire formats.

use chrono::{DateTime, SecondsFormat, Utc};

/// A UTC timestamp that knows how the feed spells dates.
///
/// Two renderings exist:
///
/// - [`UtcTimestamp::to_iso_millis`] - full ISO-8601 with millisecond
///   precision and `Z` suffix, used by `allocation-timestamp` and
///   `in-stock-datetime`
/// - [`UtcTimestamp::to_date_z`] - the date component followed by a literal
///   `Z` (`2024-12-25Z`), used by `in-stock-date`. Not a standard format;
///   existing consumers of the feed parse exactly this shape, so it is kept
///   bit-for-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcTimestamp(DateTime<Utc>);

impl UtcTimestamp {
    /// The current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Wrap a chrono datetime.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// The underlying datetime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Full ISO-8601: `2024-12-25T08:30:00.000Z`.
    pub fn to_iso_millis(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Date-only compatibility form: `2024-12-25Z`.
    pub fn to_date_z(&self) -> String {
        format!("{}Z", self.0.format("%Y-%m-%d"))
    }
}

impl std::fmt::Display for UtcTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_iso_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn christmas() -> UtcTimestamp {
        UtcTimestamp::from_datetime(Utc.with_ymd_and_hms(2024, 12, 25, 0, 0, 0).unwrap())
    }

    #[test]
    fn iso_millis_has_millisecond_precision_and_z() {
        assert_eq!(christmas().to_iso_millis(), "2024-12-25T00:00:00.000Z");
    }

    #[test]
    fn date_z_truncates_the_time_of_day() {
        assert_eq!(christmas().to_date_z(), "2024-12-25Z");

        let afternoon =
            UtcTimestamp::from_datetime(Utc.with_ymd_and_hms(2024, 12, 25, 15, 42, 7).unwrap());
        assert_eq!(afternoon.to_date_z(), "2024-12-25Z");
    }
}
