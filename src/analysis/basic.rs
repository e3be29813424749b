//! Headline counts and sender ranking.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::{Participant, filter_records, value_counts};
use crate::MessageRecord;

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("invalid link regex"));

/// Message, word, media and link totals for one participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BasicStats {
    pub messages: usize,
    /// Whitespace-separated tokens across all bodies, media placeholders included
    pub words: usize,
    /// Bodies exactly equal to the media placeholder
    pub media: usize,
    pub links: usize,
}

/// Counts messages, words, media placeholders and links.
pub fn basic_stats(
    participant: &Participant,
    records: &[MessageRecord],
    media_placeholder: &str,
) -> BasicStats {
    filter_records(participant, records)
        .into_iter()
        .fold(BasicStats::default(), |mut stats, record| {
            stats.messages += 1;
            stats.words += record.body().split_whitespace().count();
            if record.is_media(media_placeholder) {
                stats.media += 1;
            }
            stats.links += LINK.find_iter(record.body()).count();
            stats
        })
}

/// Sender ranking over the whole chat.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BusiestSenders {
    /// The most active senders with their message counts
    pub top: Vec<(String, usize)>,
    /// Every sender's share of all messages, in percent
    pub shares: Vec<(String, f64)>,
}

/// Ranks senders by message count.
///
/// Always looks at the unfiltered table. Ties keep the order in which
/// senders first appear.
pub fn busiest_senders(records: &[MessageRecord], top_n: usize) -> BusiestSenders {
    let counts = value_counts(records.iter().map(MessageRecord::sender));
    let total = records.len() as f64;

    let shares = counts
        .iter()
        .map(|(sender, count)| {
            ((*sender).to_string(), *count as f64 / total * 100.0)
        })
        .collect();

    let top = counts
        .into_iter()
        .take(top_n)
        .map(|(sender, count)| (sender.to_string(), count))
        .collect();

    BusiestSenders { top, shares }
}
