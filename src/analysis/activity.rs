//! Weekday, month and hour-of-day activity.

use std::collections::{BTreeSet, HashSet};

use chrono::{Datelike, Weekday};
use serde::Serialize;

use super::{Participant, filter_records, value_counts};
use crate::MessageRecord;
use crate::record::{hour_bucket, weekday_name};

/// Messages per weekday name, busiest first.
pub fn weekly_activity(participant: &Participant, records: &[MessageRecord]) -> Vec<(String, usize)> {
    value_counts(
        filter_records(participant, records)
            .into_iter()
            .map(|r| r.day_name().to_string()),
    )
}

/// Messages per month name (all years combined), busiest first.
pub fn monthly_activity(participant: &Participant, records: &[MessageRecord]) -> Vec<(String, usize)> {
    value_counts(
        filter_records(participant, records)
            .into_iter()
            .map(|r| r.month_name().to_string()),
    )
}

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Weekday × hour-bucket message counts.
///
/// Only observed weekdays and buckets appear. Rows run Monday to Sunday,
/// columns by hour ascending; `cells[row][column]` is zero for combinations
/// with no messages.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Heatmap {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    pub cells: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Returns the count for a weekday name and bucket label, if both were observed.
    pub fn get(&self, day: &str, bucket: &str) -> Option<usize> {
        let row = self.rows.iter().position(|r| r == day)?;
        let column = self.columns.iter().position(|c| c == bucket)?;
        Some(self.cells[row][column])
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Builds the weekday × hour-bucket matrix.
pub fn activity_heatmap(participant: &Participant, records: &[MessageRecord]) -> Heatmap {
    let filtered = filter_records(participant, records);

    let observed: HashSet<Weekday> = filtered.iter().map(|r| r.timestamp().weekday()).collect();
    let weekdays: Vec<Weekday> = WEEK.into_iter().filter(|d| observed.contains(d)).collect();
    let hours: BTreeSet<u32> = filtered.iter().map(|r| r.hour()).collect();

    let row_of = |day: Weekday| weekdays.iter().position(|d| *d == day);
    let column_of = |hour: u32| hours.iter().position(|h| *h == hour);

    let mut cells = vec![vec![0usize; hours.len()]; weekdays.len()];
    for record in &filtered {
        let day = record.timestamp().weekday();
        if let (Some(row), Some(column)) = (row_of(day), column_of(record.hour())) {
            cells[row][column] += 1;
        }
    }

    Heatmap {
        rows: weekdays.iter().map(|d| weekday_name(*d).to_string()).collect(),
        columns: hours.iter().map(|h| hour_bucket(*h)).collect(),
        cells,
    }
}
