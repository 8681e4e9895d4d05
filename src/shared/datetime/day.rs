use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};
use serde_json::Value;

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Truncates loosely-typed date values coming back from the datastores to calendar days.
pub struct DayParser;

impl DayParser {
    /// Parse a JSON value into a calendar day.
    /// Strings may be plain dates, naive datetimes or RFC3339; integers are epoch seconds (UTC).
    pub fn parse_value(value: &Value) -> Option<NaiveDate> {
        match value {
            Value::String(s) => Self::parse_str(s),
            Value::Number(n) => n
                .as_i64()
                .and_then(|secs| DateTime::from_timestamp(secs, 0))
                .map(|dt| dt.date_naive()),
            _ => None,
        }
    }

    /// Timestamps with an offset keep the calendar date they were written in.
    pub fn parse_str(input: &str) -> Option<NaiveDate> {
        let s = input.trim();
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(date);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.date_naive());
        }
        DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(|dt| dt.date())
    }
}

/// Every calendar day from `start` to `end`, both ends included. Empty when `start > end`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(start), |day| day.succ_opt()).take_while(move |day| *day <= end)
}

/// First day of a rolling window of `days` days ending at `as_of`.
pub fn window_start(as_of: NaiveDate, days: u32) -> NaiveDate {
    as_of
        .checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN)
}
