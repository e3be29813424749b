//! WhatsApp line grammar and timestamp templates.
//!
//! An Android-style export line looks like:
//!
//! ```text
//! 3/31/25, 3:54 PM - Alice: Hello world
//! 31/03/2025, 15:54 - Alice: Hello world
//! ```
//!
//! Matching happens in two steps. First every line is tried against the
//! 12-hour [`LinePattern::Meridiem`] pattern; only if no line at all matches
//! is the 24-hour [`LinePattern::TwentyFourHour`] variant used. Then a single
//! [`DateTemplate`] is chosen for the whole chat: the first one, in priority
//! order, that parses every extracted timestamp.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::{Captures, Regex};
use serde::Serialize;
use tracing::debug;

static MERIDIEM_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LinePattern::Meridiem.pattern()).expect("valid line pattern"));

static TWENTY_FOUR_HOUR_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(LinePattern::TwentyFourHour.pattern()).expect("valid line pattern")
});

/// Line patterns, tried in order until one matches at least one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LinePattern {
    /// `D/M/YY, H:MM AM - Sender: Body`, the marker itself being optional
    Meridiem,
    /// `D/M/YY, HH:MM - Sender: Body`
    TwentyFourHour,
}

impl LinePattern {
    /// Returns the regex pattern with three groups: timestamp, sender, body.
    pub fn pattern(self) -> &'static str {
        match self {
            // 3/31/25, 3:54 PM - Alice: Hello
            LinePattern::Meridiem => {
                r"([0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4},\s[0-9]{1,2}:[0-9]{2}\s(?:AM|PM|am|pm)?)\s-\s([^:]+):\s(.+)"
            }
            // 31/03/25, 15:54 - Alice: Hello
            LinePattern::TwentyFourHour => {
                r"([0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4},\s[0-9]{1,2}:[0-9]{2})\s-\s([^:]+):\s(.+)"
            }
        }
    }

    /// Returns all patterns in fallback order.
    pub fn all() -> &'static [LinePattern] {
        &[LinePattern::Meridiem, LinePattern::TwentyFourHour]
    }

    fn regex(self) -> &'static Regex {
        match self {
            LinePattern::Meridiem => &MERIDIEM_LINE,
            LinePattern::TwentyFourHour => &TWENTY_FOUR_HOUR_LINE,
        }
    }

    /// Matches a single physical line.
    pub fn match_line(self, line: &str) -> Option<RawLine<'_>> {
        self.regex().captures(line).map(|caps| RawLine::from_captures(&caps))
    }
}

/// The three captured groups of a matching line, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLine<'a> {
    pub timestamp: &'a str,
    pub sender: &'a str,
    pub body: &'a str,
}

impl<'a> RawLine<'a> {
    fn from_captures(caps: &Captures<'a>) -> Self {
        Self {
            timestamp: caps.get(1).map_or("", |m| m.as_str()),
            sender: caps.get(2).map_or("", |m| m.as_str()),
            body: caps.get(3).map_or("", |m| m.as_str()),
        }
    }
}

/// Result of running the line grammar over a whole export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedLines<'a> {
    /// Matching lines in input order
    pub lines: Vec<RawLine<'a>>,
    /// Pattern that produced the matches, `None` if nothing matched
    pub pattern: Option<LinePattern>,
    /// Lines that didn't match the chosen pattern
    pub dropped: usize,
}

/// Applies the line patterns in fallback order.
///
/// Each physical line is evaluated on its own; continuation lines of
/// multi-line messages are dropped rather than reattached.
pub fn match_lines(content: &str, skip_blank_lines: bool) -> MatchedLines<'_> {
    let candidates: Vec<&str> = content
        .lines()
        .filter(|line| !(skip_blank_lines && line.trim().is_empty()))
        .collect();

    for &pattern in LinePattern::all() {
        let mut lines = Vec::new();
        for &line in &candidates {
            match pattern.match_line(line) {
                Some(raw) => lines.push(raw),
                None => debug!(pattern = ?pattern, line = %line, "dropping unmatched line"),
            }
        }

        if !lines.is_empty() {
            let dropped = candidates.len() - lines.len();
            return MatchedLines {
                lines,
                pattern: Some(pattern),
                dropped,
            };
        }
    }

    MatchedLines {
        lines: Vec::new(),
        pattern: None,
        dropped: candidates.len(),
    }
}

/// Timestamp templates, in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DateTemplate {
    /// `3/31/25, 3:54 PM`
    MonthFirst12Hour,
    /// `3/31/25, 15:54`
    MonthFirst24Hour,
    /// `31/3/25, 3:54 PM`
    DayFirst12Hour,
    /// `31/3/25, 15:54`
    DayFirst24Hour,
}

impl DateTemplate {
    /// Returns chrono format strings for this template.
    ///
    /// The two-digit year variant comes first: `%Y` would happily read
    /// `25` as the year 25 AD.
    pub fn date_parse_formats(self) -> &'static [&'static str] {
        match self {
            DateTemplate::MonthFirst12Hour => &["%m/%d/%y, %I:%M %p", "%m/%d/%Y, %I:%M %p"],
            DateTemplate::MonthFirst24Hour => &["%m/%d/%y, %H:%M", "%m/%d/%Y, %H:%M"],
            DateTemplate::DayFirst12Hour => &["%d/%m/%y, %I:%M %p", "%d/%m/%Y, %I:%M %p"],
            DateTemplate::DayFirst24Hour => &["%d/%m/%y, %H:%M", "%d/%m/%Y, %H:%M"],
        }
    }

    /// Returns all templates in priority order.
    pub fn all() -> &'static [DateTemplate] {
        &[
            DateTemplate::MonthFirst12Hour,
            DateTemplate::MonthFirst24Hour,
            DateTemplate::DayFirst12Hour,
            DateTemplate::DayFirst24Hour,
        ]
    }

    /// Parses one timestamp text under this template.
    pub fn parse(self, text: &str) -> Option<NaiveDateTime> {
        let normalized = normalize_whitespace(text);
        self.date_parse_formats()
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
    }
}

/// Collapses whitespace runs (including U+202F before the meridiem marker)
/// to single ASCII spaces and trims the ends.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Picks the first template that parses every timestamp in the batch.
///
/// Returns the template along with the parsed values in input order, or the
/// first offending text on failure: a timestamp no template understands if
/// there is one, otherwise the first one rejected by the top-priority template.
pub fn resolve_timestamps(texts: &[&str]) -> Result<(DateTemplate, Vec<NaiveDateTime>), String> {
    for &template in DateTemplate::all() {
        let parsed: Option<Vec<NaiveDateTime>> =
            texts.iter().map(|text| template.parse(text)).collect();

        match parsed {
            Some(values) => return Ok((template, values)),
            None => debug!(template = ?template, "date template rejected"),
        }
    }

    let hopeless = texts
        .iter()
        .find(|text| DateTemplate::all().iter().all(|t| t.parse(text).is_none()));
    let sample = hopeless
        .or_else(|| {
            texts
                .iter()
                .find(|text| DateTemplate::MonthFirst12Hour.parse(text).is_none())
        })
        .copied()
        .unwrap_or_default();

    Err(sample.to_string())
}
