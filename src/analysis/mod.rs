//! The statistics battery.
//!
//! Every query is a stateless, read-only function over a borrowed record
//! table, scoped to a [`Participant`]: either [`Participant::Overall`] (no
//! filter) or one sender, matched exactly and case-sensitively.
//!
//! | Query | Function |
//! |-------|----------|
//! | Message, word, media and link counts | [`basic_stats`] |
//! | Top senders and their shares | [`busiest_senders`] |
//! | Messages per month / per day | [`monthly_timeline`], [`daily_timeline`] |
//! | Weekday and month frequency | [`weekly_activity`], [`monthly_activity`] |
//! | Weekday × hour-bucket matrix | [`activity_heatmap`] |
//! | Word cloud corpus / common words | [`word_cloud`], [`common_words`] |
//! | Emoji frequency | [`emoji_frequency`] |
//! | Sentiment labels, counts, clouds | [`sentiment_labels`], [`sentiment_distribution`], [`sentiment_clouds`] |
//! | Language distribution | [`language_distribution`] |
//!
//! [`Analyzer`] bundles a table with an [`AnalysisConfig`] and runs the
//! whole battery as a [`Report`](crate::report::Report).
//!
//! # Example
//!
//! ```rust
//! use chatlens::analysis::{Analyzer, Participant};
//!
//! let chat = chatlens::parse(
//!     "3/31/25, 3:54 PM - Alice: Hello world\n\
//!      3/31/25, 3:55 PM - Bob: <Media omitted>\n\
//!      3/31/25, 3:56 PM - Alice: see https://example.com",
//! )?;
//!
//! let analyzer = Analyzer::new(chat.records());
//! let stats = analyzer.basic_stats(&Participant::Overall);
//! assert_eq!(stats.messages, 3);
//! assert_eq!(stats.media, 1);
//! assert_eq!(stats.links, 1);
//!
//! let alice = analyzer.basic_stats(&Participant::sender("Alice"));
//! assert_eq!(alice.messages, 2);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

mod activity;
mod basic;
mod emoji;
mod language;
mod sentiment;
mod timeline;
mod words;

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::hash::Hash;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use activity::{Heatmap, activity_heatmap, monthly_activity, weekly_activity};
pub use basic::{BasicStats, BusiestSenders, basic_stats, busiest_senders};
pub use emoji::{emoji_frequency, is_emoji};
pub use language::language_distribution;
pub use sentiment::{
    SentimentCloud, SentimentClouds, sentiment_clouds, sentiment_distribution, sentiment_labels,
};
pub use timeline::{daily_timeline, monthly_timeline};
pub use words::{CloudEntry, WordCloud, common_words, word_cloud};

use crate::MessageRecord;
use crate::config::AnalysisConfig;
use crate::error::{ChatlensError, Result};
use crate::report::Report;
use crate::sentiment::{Sentiment, SentimentAnalyzer};

/// Label used for the no-filter participant.
pub const OVERALL: &str = "Overall";

/// Whose messages a query looks at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Participant {
    /// Every sender.
    Overall,
    /// A single sender, matched exactly.
    Sender(String),
}

impl Participant {
    /// Shorthand for `Participant::Sender(name.into())`.
    pub fn sender(name: impl Into<String>) -> Self {
        Participant::Sender(name.into())
    }

    pub fn is_overall(&self) -> bool {
        matches!(self, Participant::Overall)
    }

    /// Returns `true` if `record` belongs to this participant.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        match self {
            Participant::Overall => true,
            Participant::Sender(name) => record.sender() == name,
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Participant::Overall => write!(f, "{OVERALL}"),
            Participant::Sender(name) => write!(f, "{name}"),
        }
    }
}

/// Returns the records belonging to `participant`, in table order.
pub fn filter_records<'a>(
    participant: &Participant,
    records: &'a [MessageRecord],
) -> Vec<&'a MessageRecord> {
    records.iter().filter(|r| participant.matches(r)).collect()
}

/// Lists [`Participant::Overall`] followed by every distinct sender, sorted.
pub fn participants(records: &[MessageRecord]) -> Vec<Participant> {
    let senders: BTreeSet<&str> = records.iter().map(MessageRecord::sender).collect();
    std::iter::once(Participant::Overall)
        .chain(senders.into_iter().map(Participant::sender))
        .collect()
}

/// Resolves a participant by name.
///
/// `"Overall"` maps to [`Participant::Overall`] unless a sender carries that
/// exact name.
///
/// # Errors
///
/// Returns [`ChatlensError::UnknownParticipant`] if no record has that sender.
pub fn find_participant(records: &[MessageRecord], name: &str) -> Result<Participant> {
    if records.iter().any(|r| r.sender() == name) {
        Ok(Participant::sender(name))
    } else if name == OVERALL {
        Ok(Participant::Overall)
    } else {
        Err(ChatlensError::unknown_participant(name))
    }
}

/// Frequency table ordered by count descending; ties keep first-seen order.
pub(crate) fn value_counts<K, I>(items: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();
    for item in items {
        if let Some(&i) = index.get(&item) {
            counts[i].1 += 1;
        } else {
            index.insert(item.clone(), counts.len());
            counts.push((item, 1));
        }
    }
    // sort_by is stable
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Runs the statistics battery over a borrowed record table.
#[derive(Debug, Clone)]
pub struct Analyzer<'a> {
    records: &'a [MessageRecord],
    config: AnalysisConfig,
    scorer: SentimentAnalyzer,
}

impl<'a> Analyzer<'a> {
    /// Creates an analyzer with default configuration.
    pub fn new(records: &'a [MessageRecord]) -> Self {
        Self::with_config(records, AnalysisConfig::default())
    }

    pub fn with_config(records: &'a [MessageRecord], config: AnalysisConfig) -> Self {
        let scorer =
            SentimentAnalyzer::with_thresholds(config.negative_threshold, config.positive_threshold);
        Self {
            records,
            config,
            scorer,
        }
    }

    pub fn records(&self) -> &'a [MessageRecord] {
        self.records
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// See [`participants`].
    pub fn participants(&self) -> Vec<Participant> {
        participants(self.records)
    }

    /// See [`find_participant`].
    pub fn find_participant(&self, name: &str) -> Result<Participant> {
        find_participant(self.records, name)
    }

    pub fn basic_stats(&self, participant: &Participant) -> BasicStats {
        basic_stats(participant, self.records, &self.config.media_placeholder)
    }

    pub fn busiest_senders(&self) -> BusiestSenders {
        busiest_senders(self.records, self.config.top_senders)
    }

    pub fn monthly_timeline(&self, participant: &Participant) -> Vec<(String, usize)> {
        monthly_timeline(participant, self.records)
    }

    pub fn daily_timeline(&self, participant: &Participant) -> Vec<(NaiveDate, usize)> {
        daily_timeline(participant, self.records)
    }

    pub fn weekly_activity(&self, participant: &Participant) -> Vec<(String, usize)> {
        weekly_activity(participant, self.records)
    }

    pub fn monthly_activity(&self, participant: &Participant) -> Vec<(String, usize)> {
        monthly_activity(participant, self.records)
    }

    pub fn activity_heatmap(&self, participant: &Participant) -> Heatmap {
        activity_heatmap(participant, self.records)
    }

    pub fn word_cloud(&self, participant: &Participant) -> WordCloud {
        word_cloud(
            participant,
            self.records,
            &self.config.media_placeholder,
            self.config.max_cloud_words,
        )
    }

    pub fn common_words(&self, participant: &Participant) -> Vec<(String, usize)> {
        common_words(
            participant,
            self.records,
            &self.config.media_placeholder,
            self.config.top_words,
        )
    }

    pub fn emoji_frequency(&self, participant: &Participant) -> Vec<(String, usize)> {
        emoji_frequency(participant, self.records)
    }

    pub fn sentiment_labels(&self, participant: &Participant) -> Vec<Sentiment> {
        sentiment_labels(participant, self.records, &self.scorer)
    }

    pub fn sentiment_distribution(&self, participant: &Participant) -> Vec<(Sentiment, usize)> {
        sentiment_distribution(participant, self.records, &self.scorer)
    }

    pub fn sentiment_clouds(&self, participant: &Participant) -> SentimentClouds {
        sentiment_clouds(
            participant,
            self.records,
            &self.scorer,
            self.config.max_cloud_words,
        )
    }

    pub fn language_distribution(&self, participant: &Participant) -> Vec<(String, usize)> {
        language_distribution(participant, self.records)
    }

    /// Runs every query for `participant`. See [`Report::build`].
    pub fn report(&self, participant: &Participant) -> Report {
        Report::build(self, participant)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{rec, ts};
    use super::*;

    fn sample() -> Vec<MessageRecord> {
        vec![
            rec("Bob", "hi", ts(2025, 3, 31, 9, 0)),
            rec("Alice", "hello", ts(2025, 3, 31, 9, 1)),
            rec("Bob", "how are you", ts(2025, 3, 31, 9, 2)),
            rec("alice", "lowercase alice", ts(2025, 3, 31, 9, 3)),
        ]
    }

    #[test]
    fn test_participants_sorted_with_overall_first() {
        let records = sample();
        assert_eq!(
            participants(&records),
            vec![
                Participant::Overall,
                Participant::sender("Alice"),
                Participant::sender("Bob"),
                Participant::sender("alice"),
            ]
        );
    }

    #[test]
    fn test_participants_empty() {
        assert_eq!(participants(&[]), vec![Participant::Overall]);
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let records = sample();
        let alice = filter_records(&Participant::sender("Alice"), &records);
        assert_eq!(alice.len(), 1);
        assert_eq!(alice[0].body(), "hello");
        assert_eq!(filter_records(&Participant::Overall, &records).len(), 4);
        assert!(filter_records(&Participant::sender("Carol"), &records).is_empty());
    }

    #[test]
    fn test_find_participant() {
        let records = sample();
        assert_eq!(
            find_participant(&records, "Bob").unwrap(),
            Participant::sender("Bob")
        );
        assert_eq!(
            find_participant(&records, "Overall").unwrap(),
            Participant::Overall
        );
        let err = find_participant(&records, "bob").unwrap_err();
        assert!(err.is_unknown_participant());
    }

    #[test]
    fn test_participant_display() {
        assert_eq!(Participant::Overall.to_string(), "Overall");
        assert_eq!(Participant::sender("Alice").to_string(), "Alice");
    }

    #[test]
    fn test_value_counts_ties_keep_first_seen() {
        let counts = value_counts(["b", "a", "c", "a", "b", "d"]);
        assert_eq!(counts, vec![("b", 2), ("a", 2), ("c", 1), ("d", 1)]);
    }
}
