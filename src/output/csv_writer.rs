//! CSV output writer.

use std::fs::File;
use std::path::Path;

use crate::MessageRecord;
use crate::error::{ChatlensError, Result};

const HEADER: [&str; 13] = [
    "Timestamp",
    "Sender",
    "Body",
    "Date",
    "Year",
    "Month",
    "MonthName",
    "Day",
    "DayName",
    "Hour",
    "Minute",
    "HourBucket",
    "Language",
];

/// Writes the record table to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Sender`, `Body`, then every derived field
/// - Encoding: UTF-8
pub fn write_csv(records: &[MessageRecord], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);
    write_records(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

/// Converts the record table to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(records: &[MessageRecord]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());
    write_records(&mut writer, records)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| ChatlensError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

fn write_records<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    records: &[MessageRecord],
) -> Result<()> {
    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record(build_row(record))?;
    }
    Ok(())
}

fn build_row(record: &MessageRecord) -> [String; 13] {
    [
        record.timestamp().format("%Y-%m-%d %H:%M:%S").to_string(),
        record.sender().to_string(),
        record.body().to_string(),
        record.date().to_string(),
        record.year().to_string(),
        record.month().to_string(),
        record.month_name().to_string(),
        record.day().to_string(),
        record.day_name().to_string(),
        record.hour().to_string(),
        record.minute().to_string(),
        record.hour_bucket().to_string(),
        record.language().to_string(),
    ]
}
