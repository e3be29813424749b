//! Plain-text report rendering.
//!
//! [`Report`] implements [`Display`]; [`render_text`] is a shorthand for
//! `report.to_string()`.

use std::fmt::{self, Display, Formatter};

use crate::analysis::{Heatmap, SentimentCloud, SentimentClouds, WordCloud};
use crate::report::{Report, Section};
use crate::sentiment::Sentiment;

const RULE: &str = "──────────────────────────────────────────";
const CLOUD_PREVIEW: usize = 10;

/// Renders a report as human-readable text.
pub fn render_text(report: &Report) -> String {
    report.to_string()
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "Chat statistics: {}", self.participant)?;
        writeln!(f, "{RULE}")?;

        section(f, "Summary", &self.basic_stats, |f, stats| {
            writeln!(f, "  Messages:     {}", stats.messages)?;
            writeln!(f, "  Words:        {}", stats.words)?;
            writeln!(f, "  Media shared: {}", stats.media)?;
            writeln!(f, "  Links shared: {}", stats.links)
        })?;

        if let Some(busiest) = &self.busiest_senders {
            section(f, "Busiest senders", busiest, |f, busiest| {
                for (sender, count) in &busiest.top {
                    writeln!(f, "  {sender}: {count}")?;
                }
                writeln!(f, "  Share of messages:")?;
                for (sender, percent) in &busiest.shares {
                    writeln!(f, "    {sender}: {percent:.2}%")?;
                }
                Ok(())
            })?;
        }

        counts(f, "Monthly timeline", &self.monthly_timeline)?;
        counts(f, "Daily timeline", &self.daily_timeline)?;
        counts(f, "Most busy days", &self.weekly_activity)?;
        counts(f, "Most busy months", &self.monthly_activity)?;
        section(f, "Weekly activity map", &self.activity_heatmap, heatmap_grid)?;
        section(f, "Word cloud", &self.word_cloud, cloud_preview)?;
        counts(f, "Most common words", &self.common_words)?;
        counts(f, "Emoji", &self.emoji_frequency)?;
        counts(f, "Sentiment", &self.sentiment_distribution)?;
        section(f, "Sentiment word clouds", &self.sentiment_clouds, sentiment_clouds)?;
        counts(f, "Languages", &self.language_distribution)
    }
}

fn section<T, F>(f: &mut Formatter<'_>, title: &str, section: &Section<T>, body: F) -> fmt::Result
where
    F: FnOnce(&mut Formatter<'_>, &T) -> fmt::Result,
{
    writeln!(f, "\n{title}")?;
    match section {
        Section::Ready(value) => body(f, value),
        Section::Failed(reason) => writeln!(f, "  unavailable: {reason}"),
    }
}

fn counts<K: Display>(
    f: &mut Formatter<'_>,
    title: &str,
    table: &Section<Vec<(K, usize)>>,
) -> fmt::Result {
    section(f, title, table, |f, rows| {
        if rows.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for (key, count) in rows {
            writeln!(f, "  {key}: {count}")?;
        }
        Ok(())
    })
}

fn heatmap_grid(f: &mut Formatter<'_>, heatmap: &Heatmap) -> fmt::Result {
    if heatmap.is_empty() {
        return writeln!(f, "  (no messages)");
    }
    writeln!(f, "  {:<10} {}", "", heatmap.columns.join(" "))?;
    for (day, row) in heatmap.rows.iter().zip(&heatmap.cells) {
        let cells: Vec<String> = row
            .iter()
            .zip(&heatmap.columns)
            .map(|(count, column)| format!("{count:>width$}", width = column.len()))
            .collect();
        writeln!(f, "  {:<10} {}", day, cells.join(" "))?;
    }
    Ok(())
}

fn sentiment_clouds(f: &mut Formatter<'_>, clouds: &SentimentClouds) -> fmt::Result {
    for label in Sentiment::all() {
        match clouds.get(*label) {
            SentimentCloud::Corpus(cloud) => {
                writeln!(f, "  {label}:")?;
                cloud_preview(f, cloud)?;
            }
            SentimentCloud::NoMessages => writeln!(f, "  {label}: no messages of this category")?,
        }
    }
    Ok(())
}

fn cloud_preview(f: &mut Formatter<'_>, cloud: &WordCloud) -> fmt::Result {
    if cloud.is_empty() {
        return writeln!(f, "    (empty)");
    }
    for entry in cloud.entries().iter().take(CLOUD_PREVIEW) {
        writeln!(f, "    {} ({}, {:.2})", entry.word, entry.count, entry.weight)?;
    }
    if cloud.len() > CLOUD_PREVIEW {
        writeln!(f, "    ... {} more", cloud.len() - CLOUD_PREVIEW)?;
    }
    Ok(())
}
