//! Structured message records.
//!
//! This module provides [`MessageRecord`], one row of the parsed chat table.
//! A record owns the three captured fields (`timestamp`, `sender`, `body`)
//! and a set of derived fields computed once at construction:
//!
//! | Field | Example | Source |
//! |-------|---------|--------|
//! | `date` | `2025-03-31` | timestamp |
//! | `year` / `month` / `day` | `2025` / `3` / `31` | timestamp |
//! | `month_name` | `March` | timestamp |
//! | `day_name` | `Monday` | timestamp |
//! | `hour` / `minute` | `15` / `54` | timestamp |
//! | `hour_bucket` | `15-16` | timestamp |
//! | `language` | `en` | body |
//!
//! Fields are private: a record cannot be edited after creation, so derived
//! values always agree with the captured ones.
//!
//! # Example
//!
//! ```
//! use chatlens::MessageRecord;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2025, 3, 31)
//!     .unwrap()
//!     .and_hms_opt(15, 54, 0)
//!     .unwrap();
//! let record = MessageRecord::with_language(ts, "Alice", "Hello world", "en");
//!
//! assert_eq!(record.month_name(), "March");
//! assert_eq!(record.day_name(), "Monday");
//! assert_eq!(record.hour_bucket(), "15-16");
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;

use crate::language::detect_language;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the English name of a 1-based month number.
///
/// Out-of-range values yield an empty string.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// Returns the English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Labels the one-hour window starting at `hour`, e.g. `"14-15"`.
///
/// There is no wraparound: hour 23 yields `"23-24"`.
pub fn hour_bucket(hour: u32) -> String {
    format!("{}-{}", hour, hour + 1)
}

/// One parsed chat message with its derived calendar and language fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageRecord {
    timestamp: NaiveDateTime,
    sender: String,
    body: String,
    date: NaiveDate,
    year: i32,
    month: u32,
    month_name: &'static str,
    day: u32,
    day_name: &'static str,
    hour: u32,
    minute: u32,
    hour_bucket: String,
    language: String,
}

impl MessageRecord {
    /// Creates a record and detects the language of `body`.
    ///
    /// Bodies whose language cannot be determined are tagged
    /// [`UNKNOWN_LANGUAGE`](crate::language::UNKNOWN_LANGUAGE).
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let body = body.into();
        let language = detect_language(&body);
        Self::with_language(timestamp, sender, body, language)
    }

    /// Creates a record with an already known language code.
    pub fn with_language(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        body: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        let month = timestamp.month();
        let hour = timestamp.hour();
        Self {
            timestamp,
            sender: sender.into(),
            body: body.into(),
            date: timestamp.date(),
            year: timestamp.year(),
            month,
            month_name: month_name(month),
            day: timestamp.day(),
            day_name: weekday_name(timestamp.weekday()),
            hour,
            minute: timestamp.minute(),
            hour_bucket: hour_bucket(hour),
            language: language.into(),
        }
    }

    // =========================================================================
    // Captured fields
    // =========================================================================

    /// Returns when the message was sent, as written in the export.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message text.
    pub fn body(&self) -> &str {
        &self.body
    }

    // =========================================================================
    // Derived fields
    // =========================================================================

    /// Returns the calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the 1-based month number.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the English month name, e.g. `"March"`.
    pub fn month_name(&self) -> &'static str {
        self.month_name
    }

    /// Returns the day of month.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Returns the English weekday name, e.g. `"Monday"`.
    pub fn day_name(&self) -> &'static str {
        self.day_name
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Returns the hour-of-day window label, e.g. `"15-16"`.
    pub fn hour_bucket(&self) -> &str {
        &self.hour_bucket
    }

    /// Returns the detected language code or `"unknown"`.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns `true` if the body is exactly the given media placeholder.
    pub fn is_media(&self, placeholder: &str) -> bool {
        self.body == placeholder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_derived_fields() {
        let record = MessageRecord::with_language(ts(2025, 3, 31, 15, 54), "Alice", "Hi", "en");
        assert_eq!(record.sender(), "Alice");
        assert_eq!(record.body(), "Hi");
        assert_eq!(record.date(), NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
        assert_eq!(record.year(), 2025);
        assert_eq!(record.month(), 3);
        assert_eq!(record.month_name(), "March");
        assert_eq!(record.day(), 31);
        assert_eq!(record.day_name(), "Monday");
        assert_eq!(record.hour(), 15);
        assert_eq!(record.minute(), 54);
        assert_eq!(record.hour_bucket(), "15-16");
        assert_eq!(record.language(), "en");
    }

    #[test]
    fn test_hour_bucket_has_no_wraparound() {
        assert_eq!(hour_bucket(0), "0-1");
        assert_eq!(hour_bucket(9), "9-10");
        assert_eq!(hour_bucket(23), "23-24");
    }

    #[test]
    fn test_month_name_bounds() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn test_new_detects_language() {
        let record = MessageRecord::new(
            ts(2024, 1, 15, 10, 30),
            "Bob",
            "The weather today is absolutely wonderful and I want to go outside",
        );
        assert_eq!(record.language(), "en");

        let record = MessageRecord::new(ts(2024, 1, 15, 10, 30), "Bob", "👍");
        assert_eq!(record.language(), "unknown");
    }

    #[test]
    fn test_is_media() {
        let media = MessageRecord::with_language(ts(2024, 1, 1, 0, 0), "A", "<Media omitted>", "en");
        assert!(media.is_media("<Media omitted>"));
        let text = MessageRecord::with_language(ts(2024, 1, 1, 0, 0), "A", "see <Media omitted>", "en");
        assert!(!text.is_media("<Media omitted>"));
    }

    #[test]
    fn test_record_serialization() {
        let record = MessageRecord::with_language(ts(2024, 6, 15, 12, 0), "Alice", "Hello", "en");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""sender":"Alice""#));
        assert!(json.contains(r#""month_name":"June""#));
        assert!(json.contains(r#""hour_bucket":"12-13""#));
        assert!(json.contains(r#""timestamp":"2024-06-15T12:00:00""#));
    }
}
