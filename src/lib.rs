//! # Chatlens
//!
//! A Rust library for turning WhatsApp chat exports into descriptive
//! statistics: activity over time, word and emoji frequency, sentiment and
//! language mix, for the whole chat or one participant.
//!
//! ## Overview
//!
//! Two stages, both pure functions over in-memory data:
//!
//! - **Parser** - [`parse`] / [`ChatParser`](parser::ChatParser) turn the raw
//!   text of an export into a table of [`MessageRecord`]s with derived
//!   calendar fields and a detected language.
//! - **Aggregator** - the [`analysis`] queries read that table, optionally
//!   filtered to one [`Participant`](analysis::Participant), and return
//!   plain serializable summaries.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let export = "3/31/25, 3:54 PM - Alice: Hello world\n\
//!               3/31/25, 3:55 PM - Bob: Great to hear from you 😀\n\
//!               4/1/25, 9:02 AM - Alice: <Media omitted>";
//!
//! let chat = parse(export)?;
//! let analyzer = Analyzer::new(chat.records());
//!
//! let stats = analyzer.basic_stats(&Participant::Overall);
//! assert_eq!(stats.messages, 3);
//! assert_eq!(stats.media, 1);
//!
//! let report = analyzer.report(&Participant::sender("Bob"));
//! assert_eq!(report.emoji_frequency.ready().unwrap()[0].0, "😀");
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ChatParser`](parser::ChatParser), [`ParsedChat`](parser::ParsedChat), [`parse`]
//! - [`parsing`] - line patterns and date templates of the export format
//! - [`record`] - [`MessageRecord`] and calendar helpers
//! - [`analysis`] - the statistics battery and [`Analyzer`](analysis::Analyzer)
//! - [`report`] - [`Report`](report::Report) with per-statistic failure isolation
//! - [`sentiment`] - lexicon-based polarity scoring
//! - [`language`] - per-message language detection
//! - [`resources`] - embedded stopwords and sentiment lexicon
//! - [`output`] - text, JSON and CSV rendering
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`AnalysisConfig`](config::AnalysisConfig)
//! - [`error`] - [`ChatlensError`], [`Result`]
//! - [`prelude`] - convenient re-exports

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod language;
pub mod output;
pub mod parser;
pub mod parsing;
pub mod record;
pub mod report;
pub mod resources;
pub mod sentiment;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use parser::parse;
pub use record::MessageRecord;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::MessageRecord;

    pub use crate::error::{ChatlensError, Result};

    pub use crate::parser::{ChatParser, ParsedChat, parse};

    pub use crate::config::{AnalysisConfig, ParserConfig};

    pub use crate::analysis::{Analyzer, Participant, participants};

    pub use crate::report::{Report, Section};

    pub use crate::sentiment::{Sentiment, SentimentAnalyzer};

    pub use crate::output::render_text;
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, write_json};
}
