//! Word frequency: cloud corpora and the common-words table.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::{Participant, filter_records, value_counts};
use crate::MessageRecord;
use crate::resources;

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w[\w']+").expect("invalid token regex"));

/// One word of a cloud corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudEntry {
    pub word: String,
    pub count: usize,
    /// `count` relative to the most frequent word, in `(0, 1]`
    pub weight: f64,
}

/// A frequency-weighted bag of words, most frequent first.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WordCloud {
    entries: Vec<CloudEntry>,
}

impl WordCloud {
    /// Builds a cloud from free text.
    ///
    /// Tokens are `\w[\w']+` runs, lowercased, with a trailing `'s` removed.
    /// Pure numbers are skipped. A plural ending in `s` is folded into its
    /// singular when both occur. At most `max_words` entries are kept.
    pub fn from_texts<'t, I>(texts: I, remove_stopwords: bool, max_words: usize) -> Self
    where
        I: IntoIterator<Item = &'t str>,
    {
        let tokens = texts.into_iter().flat_map(|text| {
            TOKEN.find_iter(text).filter_map(move |m| {
                let mut word = m.as_str().to_lowercase();
                if word.ends_with("'s") {
                    word.truncate(word.len() - 2);
                }
                if word.chars().all(|c| c.is_numeric()) {
                    return None;
                }
                if remove_stopwords && resources::is_stopword(&word) {
                    return None;
                }
                Some(word)
            })
        });

        let mut counts = value_counts(tokens);
        merge_plurals(&mut counts);
        counts.truncate(max_words);

        let top = counts.first().map_or(1, |(_, count)| *count) as f64;
        let entries = counts
            .into_iter()
            .map(|(word, count)| CloudEntry {
                word,
                count,
                weight: count as f64 / top,
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[CloudEntry] {
        &self.entries
    }

    /// Returns the entry for `word`, if present.
    pub fn get(&self, word: &str) -> Option<&CloudEntry> {
        self.entries.iter().find(|e| e.word == word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn merge_plurals(counts: &mut Vec<(String, usize)>) {
    let index: HashMap<String, usize> = counts
        .iter()
        .enumerate()
        .map(|(i, (word, _))| (word.clone(), i))
        .collect();

    let mut merged = vec![false; counts.len()];
    for i in 0..counts.len() {
        let word = &counts[i].0;
        if !word.ends_with('s') || word.ends_with("ss") {
            continue;
        }
        if let Some(&singular) = index.get(&word[..word.len() - 1]) {
            counts[singular].1 += counts[i].1;
            merged[i] = true;
        }
    }

    let mut keep = merged.iter().map(|m| !m);
    counts.retain(|_| keep.next().unwrap_or(true));
    counts.sort_by(|a, b| b.1.cmp(&a.1));
}

/// Word cloud corpus for one participant, skipping media messages.
pub fn word_cloud(
    participant: &Participant,
    records: &[MessageRecord],
    media_placeholder: &str,
    max_words: usize,
) -> WordCloud {
    WordCloud::from_texts(
        filter_records(participant, records)
            .into_iter()
            .filter(|r| !r.body().contains(media_placeholder))
            .map(MessageRecord::body),
        true,
        max_words,
    )
}

/// The `n` most frequent whitespace-separated words, stopwords and media
/// messages excluded. Ties keep first-encountered order.
pub fn common_words(
    participant: &Participant,
    records: &[MessageRecord],
    media_placeholder: &str,
    n: usize,
) -> Vec<(String, usize)> {
    let words = filter_records(participant, records)
        .into_iter()
        .filter(|r| !r.body().contains(media_placeholder))
        .flat_map(|r| r.body().split_whitespace())
        .map(str::to_lowercase)
        .filter(|w| !resources::is_stopword(w));

    let mut counts = value_counts(words);
    counts.truncate(n);
    counts
}
