//! Configuration types for parsing and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - how a WhatsApp export is turned into records
//! - [`AnalysisConfig`] - knobs for the statistics battery
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalysisConfig, ParserConfig};
//!
//! let parser = ParserConfig::new().with_detect_language(false);
//! let analysis = AnalysisConfig::new()
//!     .with_top_words(10)
//!     .with_media_placeholder("<Medien ausgeschlossen>");
//!
//! assert!(!parser.detect_language);
//! assert_eq!(analysis.top_words, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Placeholder WhatsApp writes in place of attachments in English exports.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

/// Configuration for WhatsApp export parsing.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
///
/// // Skip trigram language detection for faster parsing
/// let config = ParserConfig::new().with_detect_language(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Run language detection on every body (default: true).
    ///
    /// When disabled, every record is tagged `"unknown"`.
    pub detect_language: bool,

    /// Ignore whitespace-only lines instead of counting them as dropped (default: true)
    pub skip_blank_lines: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            detect_language: true,
            skip_blank_lines: true,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables per-message language detection.
    #[must_use]
    pub fn with_detect_language(mut self, enabled: bool) -> Self {
        self.detect_language = enabled;
        self
    }

    /// Sets whether blank lines are ignored when counting dropped lines.
    #[must_use]
    pub fn with_skip_blank_lines(mut self, skip: bool) -> Self {
        self.skip_blank_lines = skip;
        self
    }
}

/// Configuration for the statistics battery.
///
/// Defaults reproduce the classic dashboard: top 20 words, top 5 senders,
/// 200-word clouds and a ±0.05 neutral band for sentiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Body text marking a media attachment (default: `<Media omitted>`)
    pub media_placeholder: String,

    /// Number of entries in the common-words table (default: 20)
    pub top_words: usize,

    /// Number of entries in the busiest-senders ranking (default: 5)
    pub top_senders: usize,

    /// Maximum number of words kept in a word cloud corpus (default: 200)
    pub max_cloud_words: usize,

    /// Compound score above which a message is positive (default: 0.05)
    pub positive_threshold: f64,

    /// Compound score below which a message is negative (default: -0.05)
    pub negative_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            media_placeholder: MEDIA_OMITTED.to_string(),
            top_words: 20,
            top_senders: 5,
            max_cloud_words: 200,
            positive_threshold: 0.05,
            negative_threshold: -0.05,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the media placeholder text (for non-English exports).
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Sets the length of the common-words table.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the length of the busiest-senders ranking.
    #[must_use]
    pub fn with_top_senders(mut self, n: usize) -> Self {
        self.top_senders = n;
        self
    }

    /// Sets the word cloud size cap.
    #[must_use]
    pub fn with_max_cloud_words(mut self, n: usize) -> Self {
        self.max_cloud_words = n;
        self
    }

    /// Sets the neutral band as `(negative, positive)` compound thresholds.
    #[must_use]
    pub fn with_sentiment_thresholds(mut self, negative: f64, positive: f64) -> Self {
        self.negative_threshold = negative;
        self.positive_threshold = positive;
        self
    }
}
