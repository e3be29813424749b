//! Message counts over calendar time.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::{Participant, filter_records};
use crate::MessageRecord;
use crate::record::month_name;

/// Messages per calendar month, chronological, labelled `"March-2025"`.
pub fn monthly_timeline(participant: &Participant, records: &[MessageRecord]) -> Vec<(String, usize)> {
    let mut months: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for record in filter_records(participant, records) {
        *months.entry((record.year(), record.month())).or_default() += 1;
    }
    months
        .into_iter()
        .map(|((year, month), count)| (format!("{}-{}", month_name(month), year), count))
        .collect()
}

/// Messages per calendar date, ascending. Days without messages are absent.
pub fn daily_timeline(participant: &Participant, records: &[MessageRecord]) -> Vec<(NaiveDate, usize)> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in filter_records(participant, records) {
        *days.entry(record.date()).or_default() += 1;
    }
    days.into_iter().collect()
}
