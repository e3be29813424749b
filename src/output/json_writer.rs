//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::report::Report;

/// Writes a report to a JSON file.
pub fn write_json(report: &Report, path: &Path) -> Result<()> {
    let json = to_json(report)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts a report to a pretty-printed JSON string.
///
/// Each section serializes as `{"status": "ready", "value": ...}` or
/// `{"status": "failed", "value": "<reason>"}`.
pub fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Analyzer, Participant};
    use tempfile::NamedTempFile;

    const EXPORT: &str = "3/31/25, 3:54 PM - Alice: Hello world\n\
                          3/31/25, 3:55 PM - Bob: <Media omitted>";

    #[test]
    fn test_to_json_structure() {
        let chat = crate::parse(EXPORT).unwrap();
        let report = Analyzer::new(chat.records()).report(&Participant::Overall);
        let json = to_json(&report).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["participant"], "Overall");
        assert_eq!(value["basic_stats"]["status"], "ready");
        assert_eq!(value["basic_stats"]["value"]["messages"], 2);
        assert_eq!(value["basic_stats"]["value"]["media"], 1);
        assert_eq!(value["busiest_senders"]["status"], "ready");
    }

    #[test]
    fn test_participant_json_has_null_busiest_senders() {
        let chat = crate::parse(EXPORT).unwrap();
        let report = Analyzer::new(chat.records()).report(&Participant::sender("Bob"));
        let value: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();
        assert_eq!(value["participant"]["Sender"], "Bob");
        assert!(value["busiest_senders"].is_null());
    }

    #[test]
    fn test_write_json() {
        let chat = crate::parse(EXPORT).unwrap();
        let report = Analyzer::new(chat.records()).report(&Participant::Overall);
        let file = NamedTempFile::new().unwrap();
        write_json(&report, file.path()).unwrap();
        let content = std::fs::read_to_string(file.path()).unwrap();
        assert!(content.contains(r#""common_words""#));
    }
}
