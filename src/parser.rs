//! WhatsApp export parser.
//!
//! Turns the raw text of an export into a [`ParsedChat`]: one
//! [`MessageRecord`] per matching line, plus diagnostics about what was
//! dropped and which date template was detected.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::ChatParser;
//!
//! let export = "3/31/25, 3:54 PM - Alice: Hello world\n\
//!               3/31/25, 3:55 PM - Bob: Hi Alice!";
//!
//! let chat = ChatParser::new().parse_str(export)?;
//! assert_eq!(chat.len(), 2);
//! assert_eq!(chat.records()[0].sender(), "Alice");
//! assert_eq!(chat.records()[0].hour(), 15);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```
//!
//! # Failure modes
//!
//! - Lines that don't match the grammar are dropped and counted in
//!   [`ParsedChat::dropped_lines`].
//! - If lines match but their timestamps fit none of the four
//!   [`DateTemplate`]s, parsing fails with
//!   [`ChatlensError::UnrecognizedDateFormat`].
//! - Empty input is not an error; it yields an empty chat.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::MessageRecord;
use crate::config::ParserConfig;
use crate::error::{ChatlensError, Result};
use crate::language::UNKNOWN_LANGUAGE;
use crate::parsing::{DateTemplate, LinePattern, match_lines, resolve_timestamps};

/// Parser for WhatsApp TXT exports.
#[derive(Debug, Clone, Default)]
pub struct ChatParser {
    config: ParserConfig,
}

impl ChatParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and parses an export file.
    pub fn parse_file(&self, path: &Path) -> Result<ParsedChat> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes).map_err(|source| ChatlensError::Utf8 {
            context: format!("reading {}", path.display()),
            source,
        })?;
        self.parse_str(&content)
    }

    /// Parses the text content of an export.
    pub fn parse_str(&self, content: &str) -> Result<ParsedChat> {
        let matched = match_lines(content, self.config.skip_blank_lines);

        let texts: Vec<&str> = matched.lines.iter().map(|raw| raw.timestamp).collect();
        let (template, timestamps) =
            resolve_timestamps(&texts).map_err(ChatlensError::unrecognized_date)?;

        let records: Vec<MessageRecord> = matched
            .lines
            .iter()
            .zip(timestamps)
            .map(|(raw, timestamp)| {
                if self.config.detect_language {
                    MessageRecord::new(timestamp, raw.sender, raw.body)
                } else {
                    MessageRecord::with_language(timestamp, raw.sender, raw.body, UNKNOWN_LANGUAGE)
                }
            })
            .collect();

        let template = matched.pattern.map(|_| template);

        info!(
            records = records.len(),
            dropped = matched.dropped,
            pattern = ?matched.pattern,
            template = ?template,
            "parsed chat export"
        );

        Ok(ParsedChat {
            records,
            dropped_lines: matched.dropped,
            line_pattern: matched.pattern,
            date_template: template,
        })
    }
}

/// Parses an export with the default configuration.
///
/// Shorthand for `ChatParser::new().parse_str(content)`.
pub fn parse(content: &str) -> Result<ParsedChat> {
    ChatParser::new().parse_str(content)
}

/// The structured table produced by [`ChatParser`], with parse diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedChat {
    records: Vec<MessageRecord>,
    dropped_lines: usize,
    line_pattern: Option<LinePattern>,
    date_template: Option<DateTemplate>,
}

impl ParsedChat {
    /// Returns the parsed records in input order.
    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    /// Consumes the chat, returning its records.
    pub fn into_records(self) -> Vec<MessageRecord> {
        self.records
    }

    /// Number of lines excluded because they didn't match the line grammar.
    pub fn dropped_lines(&self) -> usize {
        self.dropped_lines
    }

    /// The line pattern that matched, `None` for an empty chat.
    pub fn line_pattern(&self) -> Option<LinePattern> {
        self.line_pattern
    }

    /// The date template detected for the whole chat, `None` for an empty chat.
    pub fn date_template(&self) -> Option<DateTemplate> {
        self.date_template
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
