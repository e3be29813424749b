//! Per-message sentiment and sentiment-grouped corpora.

use serde::Serialize;

use super::words::WordCloud;
use super::{Participant, filter_records, value_counts};
use crate::MessageRecord;
use crate::sentiment::{Sentiment, SentimentAnalyzer};

/// Labels every message of `participant`, in table order.
pub fn sentiment_labels(
    participant: &Participant,
    records: &[MessageRecord],
    scorer: &SentimentAnalyzer,
) -> Vec<Sentiment> {
    filter_records(participant, records)
        .into_iter()
        .map(|r| scorer.classify(r.body()))
        .collect()
}

/// Number of messages per label, most frequent first.
pub fn sentiment_distribution(
    participant: &Participant,
    records: &[MessageRecord],
    scorer: &SentimentAnalyzer,
) -> Vec<(Sentiment, usize)> {
    value_counts(sentiment_labels(participant, records, scorer))
}

/// Word cloud for one sentiment label.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "cloud", rename_all = "snake_case")]
pub enum SentimentCloud {
    Corpus(WordCloud),
    /// No message carried this label.
    NoMessages,
}

impl SentimentCloud {
    /// Returns the cloud, or `None` if no message carried the label.
    pub fn corpus(&self) -> Option<&WordCloud> {
        match self {
            SentimentCloud::Corpus(cloud) => Some(cloud),
            SentimentCloud::NoMessages => None,
        }
    }
}

/// One cloud per sentiment label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentClouds {
    pub positive: SentimentCloud,
    pub neutral: SentimentCloud,
    pub negative: SentimentCloud,
}

impl SentimentClouds {
    pub fn get(&self, label: Sentiment) -> &SentimentCloud {
        match label {
            Sentiment::Positive => &self.positive,
            Sentiment::Neutral => &self.neutral,
            Sentiment::Negative => &self.negative,
        }
    }
}

/// Builds a cloud from the bodies sharing each label.
///
/// Unlike [`word_cloud`](super::word_cloud), media placeholders and
/// stopwords are kept.
pub fn sentiment_clouds(
    participant: &Participant,
    records: &[MessageRecord],
    scorer: &SentimentAnalyzer,
    max_words: usize,
) -> SentimentClouds {
    let filtered = filter_records(participant, records);
    let labelled: Vec<(Sentiment, &str)> = filtered
        .iter()
        .map(|r| (scorer.classify(r.body()), r.body()))
        .collect();

    let cloud_for = |label: Sentiment| {
        let bodies: Vec<&str> = labelled
            .iter()
            .filter(|(l, _)| *l == label)
            .map(|(_, body)| *body)
            .collect();
        if bodies.is_empty() {
            SentimentCloud::NoMessages
        } else {
            SentimentCloud::Corpus(WordCloud::from_texts(bodies, false, max_words))
        }
    };

    SentimentClouds {
        positive: cloud_for(Sentiment::Positive),
        neutral: cloud_for(Sentiment::Neutral),
        negative: cloud_for(Sentiment::Negative),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{rec, ts};
    use super::*;

    fn sample() -> Vec<MessageRecord> {
        let t = ts(2025, 3, 31, 12, 0);
        vec![
            rec("Alice", "I love this place", t),
            rec("Bob", "the train is late again, terrible", t),
            rec("Alice", "meet at the station", t),
            rec("Alice", "great news, so happy", t),
        ]
    }

    #[test]
    fn test_labels_follow_table_order() {
        let scorer = SentimentAnalyzer::new();
        let labels = sentiment_labels(&Participant::Overall, &sample(), &scorer);
        assert_eq!(
            labels,
            vec![
                Sentiment::Positive,
                Sentiment::Negative,
                Sentiment::Neutral,
                Sentiment::Positive,
            ]
        );
    }

    #[test]
    fn test_distribution() {
        let scorer = SentimentAnalyzer::new();
        let dist = sentiment_distribution(&Participant::Overall, &sample(), &scorer);
        assert_eq!(
            dist,
            vec![
                (Sentiment::Positive, 2),
                (Sentiment::Negative, 1),
                (Sentiment::Neutral, 1),
            ]
        );
    }

    #[test]
    fn test_clouds_keep_stopwords() {
        let scorer = SentimentAnalyzer::new();
        let clouds = sentiment_clouds(&Participant::Overall, &sample(), &scorer, 200);
        let neutral = clouds.get(Sentiment::Neutral).corpus().unwrap();
        assert!(neutral.get("the").is_some());
        assert!(neutral.get("station").is_some());
    }

    #[test]
    fn test_empty_category_reports_no_messages() {
        let scorer = SentimentAnalyzer::new();
        let clouds = sentiment_clouds(&Participant::sender("Alice"), &sample(), &scorer, 200);
        assert_eq!(clouds.negative, SentimentCloud::NoMessages);
        assert!(clouds.positive.corpus().is_some());
    }

    #[test]
    fn test_deterministic() {
        let scorer = SentimentAnalyzer::new();
        let a = sentiment_labels(&Participant::Overall, &sample(), &scorer);
        let b = sentiment_labels(&Participant::Overall, &sample(), &scorer);
        assert_eq!(a, b);
    }
}
