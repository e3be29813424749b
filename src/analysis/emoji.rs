//! Emoji frequency.

use std::sync::LazyLock;

use regex::Regex;

use super::{Participant, filter_records, value_counts};
use crate::MessageRecord;

static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Extended_Pictographic}\p{Emoji_Modifier}\p{Regional_Indicator}]")
        .expect("invalid emoji regex")
});

/// Returns `true` if `c` is a pictographic emoji, a skin-tone modifier or a
/// regional indicator letter.
pub fn is_emoji(c: char) -> bool {
    let mut buf = [0u8; 4];
    EMOJI.is_match(c.encode_utf8(&mut buf))
}

/// Counts emoji code points across bodies, most frequent first.
///
/// Sequences are not grouped: `👍🏽` counts one `👍` and one `🏽`, and the
/// flag `🇮🇳` counts its two regional indicators `🇮` and `🇳`.
pub fn emoji_frequency(participant: &Participant, records: &[MessageRecord]) -> Vec<(String, usize)> {
    value_counts(
        filter_records(participant, records)
            .into_iter()
            .flat_map(|r| EMOJI.find_iter(r.body()))
            .map(|m| m.as_str().to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{rec, ts};
    use super::*;

    #[test]
    fn test_is_emoji() {
        assert!(is_emoji('😂'));
        assert!(is_emoji('❤'));
        assert!(is_emoji('🏽'));
        assert!(is_emoji('\u{1F1EE}'));
        assert!(!is_emoji('a'));
        assert!(!is_emoji('1'));
        assert!(!is_emoji('#'));
    }

    #[test]
    fn test_frequency_order() {
        let t = ts(2025, 3, 31, 12, 0);
        let records = vec![
            rec("Alice", "😂 nice 🎉", t),
            rec("Bob", "🎉🎉 party", t),
            rec("Alice", "😂", t),
            rec("Bob", "no emoji here", t),
        ];
        let freq = emoji_frequency(&Participant::Overall, &records);
        assert_eq!(
            freq,
            vec![("🎉".to_string(), 3), ("😂".to_string(), 2)]
        );

        let alice = emoji_frequency(&Participant::sender("Alice"), &records);
        assert_eq!(alice, vec![("😂".to_string(), 2), ("🎉".to_string(), 1)]);
    }

    #[test]
    fn test_skin_tone_counted_separately() {
        let records = vec![rec("Alice", "👍🏽", ts(2025, 3, 31, 12, 0))];
        let freq = emoji_frequency(&Participant::Overall, &records);
        let total: usize = freq.iter().map(|(_, c)| c).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn test_flags_count_regional_indicators() {
        let t = ts(2025, 3, 31, 12, 0);
        let records = vec![rec("Alice", "India 🇮🇳 go", t), rec("Bob", "🇮🇳🇮🇳", t)];
        let freq = emoji_frequency(&Participant::Overall, &records);
        assert_eq!(
            freq,
            vec![("\u{1F1EE}".to_string(), 3), ("\u{1F1F3}".to_string(), 3)]
        );
    }

    #[test]
    fn test_no_emoji() {
        let records = vec![rec("Alice", "plain text", ts(2025, 3, 31, 12, 0))];
        assert!(emoji_frequency(&Participant::Overall, &records).is_empty());
    }
}
