//! Full-battery reports.
//!
//! A [`Report`] holds every statistic for one [`Participant`]. Each statistic
//! is computed in its own [`Section`]: if one query panics, the panic is
//! caught and logged, the section becomes [`Section::Failed`], and the rest
//! of the report is still produced.
//!
//! # Example
//!
//! ```rust
//! use chatlens::analysis::{Analyzer, Participant};
//!
//! let chat = chatlens::parse("3/31/25, 3:54 PM - Alice: Hello world 😀")?;
//! let analyzer = Analyzer::new(chat.records());
//!
//! let report = analyzer.report(&Participant::Overall);
//! assert_eq!(report.basic_stats.ready().unwrap().messages, 1);
//! assert!(report.busiest_senders.is_some());
//!
//! let alice = analyzer.report(&Participant::sender("Alice"));
//! assert!(alice.busiest_senders.is_none());
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::error;

use crate::analysis::{
    Analyzer, BasicStats, BusiestSenders, Heatmap, Participant, SentimentClouds, WordCloud,
};
use crate::sentiment::Sentiment;

/// Outcome of one statistic.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Section<T> {
    Ready(T),
    /// The query panicked; carries the panic message.
    Failed(String),
}

impl<T> Section<T> {
    /// Runs `query`, converting a panic into [`Section::Failed`].
    pub fn run<F>(name: &str, query: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(query)) {
            Ok(value) => Section::Ready(value),
            Err(payload) => {
                let reason = panic_message(payload.as_ref());
                error!(section = name, %reason, "statistic failed");
                Section::Failed(reason)
            }
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Section::Ready(value) => Some(value),
            Section::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Section::Failed(_))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Every statistic for one participant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub participant: Participant,
    pub basic_stats: Section<BasicStats>,
    /// Only present for [`Participant::Overall`]
    pub busiest_senders: Option<Section<BusiestSenders>>,
    pub monthly_timeline: Section<Vec<(String, usize)>>,
    pub daily_timeline: Section<Vec<(NaiveDate, usize)>>,
    pub weekly_activity: Section<Vec<(String, usize)>>,
    pub monthly_activity: Section<Vec<(String, usize)>>,
    pub activity_heatmap: Section<Heatmap>,
    pub word_cloud: Section<WordCloud>,
    pub common_words: Section<Vec<(String, usize)>>,
    pub emoji_frequency: Section<Vec<(String, usize)>>,
    pub sentiment_distribution: Section<Vec<(Sentiment, usize)>>,
    pub sentiment_clouds: Section<SentimentClouds>,
    pub language_distribution: Section<Vec<(String, usize)>>,
}

impl Report {
    /// Runs the whole battery for `participant`.
    pub fn build(analyzer: &Analyzer<'_>, participant: &Participant) -> Self {
        let busiest_senders = participant
            .is_overall()
            .then(|| Section::run("busiest_senders", || analyzer.busiest_senders()));

        Self {
            participant: participant.clone(),
            basic_stats: Section::run("basic_stats", || analyzer.basic_stats(participant)),
            busiest_senders,
            monthly_timeline: Section::run("monthly_timeline", || {
                analyzer.monthly_timeline(participant)
            }),
            daily_timeline: Section::run("daily_timeline", || analyzer.daily_timeline(participant)),
            weekly_activity: Section::run("weekly_activity", || {
                analyzer.weekly_activity(participant)
            }),
            monthly_activity: Section::run("monthly_activity", || {
                analyzer.monthly_activity(participant)
            }),
            activity_heatmap: Section::run("activity_heatmap", || {
                analyzer.activity_heatmap(participant)
            }),
            word_cloud: Section::run("word_cloud", || analyzer.word_cloud(participant)),
            common_words: Section::run("common_words", || analyzer.common_words(participant)),
            emoji_frequency: Section::run("emoji_frequency", || {
                analyzer.emoji_frequency(participant)
            }),
            sentiment_distribution: Section::run("sentiment_distribution", || {
                analyzer.sentiment_distribution(participant)
            }),
            sentiment_clouds: Section::run("sentiment_clouds", || {
                analyzer.sentiment_clouds(participant)
            }),
            language_distribution: Section::run("language_distribution", || {
                analyzer.language_distribution(participant)
            }),
        }
    }

    /// Names of the sections that failed.
    pub fn failed_sections(&self) -> Vec<&'static str> {
        let mut failed = Vec::new();
        let mut check = |name: &'static str, is_failed: bool| {
            if is_failed {
                failed.push(name);
            }
        };
        check("basic_stats", self.basic_stats.is_failed());
        check(
            "busiest_senders",
            self.busiest_senders.as_ref().is_some_and(Section::is_failed),
        );
        check("monthly_timeline", self.monthly_timeline.is_failed());
        check("daily_timeline", self.daily_timeline.is_failed());
        check("weekly_activity", self.weekly_activity.is_failed());
        check("monthly_activity", self.monthly_activity.is_failed());
        check("activity_heatmap", self.activity_heatmap.is_failed());
        check("word_cloud", self.word_cloud.is_failed());
        check("common_words", self.common_words.is_failed());
        check("emoji_frequency", self.emoji_frequency.is_failed());
        check("sentiment_distribution", self.sentiment_distribution.is_failed());
        check("sentiment_clouds", self.sentiment_clouds.is_failed());
        check("language_distribution", self.language_distribution.is_failed());
        failed
    }
}
