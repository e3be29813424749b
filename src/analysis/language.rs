use super::{Participant, filter_records, value_counts};
use crate::MessageRecord;

/// Messages per detected language code, most frequent first.
///
/// Bodies whose language could not be detected count under `"unknown"`.
pub fn language_distribution(
    participant: &Participant,
    records: &[MessageRecord],
) -> Vec<(String, usize)> {
    value_counts(
        filter_records(participant, records)
            .into_iter()
            .map(|r| r.language().to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::super::test_support::ts;
    use super::*;

    #[test]
    fn test_distribution() {
        let t = ts(2025, 3, 31, 12, 0);
        let records = vec![
            MessageRecord::with_language(t, "Alice", "hola", "es"),
            MessageRecord::with_language(t, "Bob", "hi", "en"),
            MessageRecord::with_language(t, "Bob", "hello", "en"),
            MessageRecord::with_language(t, "Bob", "🙂", "unknown"),
        ];
        assert_eq!(
            language_distribution(&Participant::Overall, &records),
            vec![
                ("en".to_string(), 2),
                ("es".to_string(), 1),
                ("unknown".to_string(), 1),
            ]
        );
        assert_eq!(
            language_distribution(&Participant::sender("Alice"), &records),
            vec![("es".to_string(), 1)]
        );
    }
}
