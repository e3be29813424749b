//! Lexicon-based sentiment scoring.
//!
//! [`SentimentAnalyzer::polarity_scores`] walks the tokens of a message,
//! looks each one up in the embedded lexicon and adjusts its valence with a
//! handful of rules:
//!
//! - boosters ("very", "so") and dampeners ("slightly") up to three tokens
//!   back shift the valence by ±0.293, less with distance
//! - a negation up to three tokens back scales the valence by -0.74
//! - an ALL-CAPS word in a mixed-case message gains ±0.733
//! - a contrastive "but" halves what precedes it and amplifies what follows
//! - exclamation marks (up to four) and repeated question marks intensify
//!
//! The summed valence is squashed into the compound score with
//! `s / sqrt(s² + 15)`.
//!
//! ```
//! use chatlens::sentiment::{Sentiment, SentimentAnalyzer};
//!
//! let analyzer = SentimentAnalyzer::new();
//! assert_eq!(analyzer.classify("This is great!"), Sentiment::Positive);
//! assert_eq!(analyzer.classify("This is not great"), Sentiment::Negative);
//! assert_eq!(analyzer.classify("See you at 5"), Sentiment::Neutral);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::resources;

const CAPS_INCREMENT: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const QUESTION_INCREMENT: f64 = 0.18;
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Default compound score above which a message is positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Default compound score below which a message is negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Three-way sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Classifies a compound score against a neutral band.
    ///
    /// Scores strictly above `positive` are positive, strictly below
    /// `negative` are negative, everything else is neutral.
    pub fn from_compound(compound: f64, negative: f64, positive: f64) -> Self {
        if compound > positive {
            Sentiment::Positive
        } else if compound < negative {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Returns all labels in display order.
    pub fn all() -> &'static [Sentiment] {
        &[Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative]
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Neutral => write!(f, "Neutral"),
            Sentiment::Negative => write!(f, "Negative"),
        }
    }
}

/// Proportions of positive, neutral and negative tokens plus the compound score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PolarityScores {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
    /// Normalized overall score in `[-1, 1]`
    pub compound: f64,
}

/// Scores message text against the embedded lexicon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentAnalyzer {
    negative_threshold: f64,
    positive_threshold: f64,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer {
    /// Creates an analyzer with the default ±0.05 neutral band.
    pub fn new() -> Self {
        Self::with_thresholds(NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD)
    }

    /// Creates an analyzer with a custom neutral band.
    pub fn with_thresholds(negative: f64, positive: f64) -> Self {
        resources::init();
        Self {
            negative_threshold: negative,
            positive_threshold: positive,
        }
    }

    /// Labels a message.
    pub fn classify(&self, text: &str) -> Sentiment {
        Sentiment::from_compound(
            self.polarity_scores(text).compound,
            self.negative_threshold,
            self.positive_threshold,
        )
    }

    /// Computes polarity proportions and the compound score for `text`.
    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return PolarityScores::default();
        }

        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let mixed_case = is_mixed_case(&tokens);

        let mut valences: Vec<f64> = (0..tokens.len())
            .map(|i| token_valence(&tokens, &lowered, i, mixed_case))
            .collect();

        apply_but_rule(&lowered, &mut valences);

        let emphasis = punctuation_emphasis(text);
        score_valences(&valences, emphasis)
    }
}

/// Splits on whitespace and strips edge punctuation from words, keeping
/// short tokens like `:)` intact. Single-character tokens are discarded.
fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|token| {
            let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 2 {
                token
            } else {
                stripped
            }
        })
        .filter(|token| token.chars().count() > 1)
        .collect()
}

/// `true` when some, but not all, cased words are ALL-CAPS.
fn is_mixed_case(tokens: &[&str]) -> bool {
    let cased: Vec<&&str> = tokens
        .iter()
        .filter(|t| t.chars().any(char::is_alphabetic))
        .collect();
    let shouting = cased.iter().filter(|t| is_shouted(t)).count();
    shouting > 0 && shouting < cased.len()
}

fn is_shouted(token: &str) -> bool {
    token.chars().any(char::is_alphabetic) && !token.chars().any(char::is_lowercase)
}

fn token_valence(tokens: &[&str], lowered: &[String], i: usize, mixed_case: bool) -> f64 {
    let word = lowered[i].as_str();
    if resources::booster(word).is_some() {
        return 0.0;
    }

    let Some(mut valence) = resources::valence(word) else {
        return 0.0;
    };

    if mixed_case && is_shouted(tokens[i]) {
        valence += CAPS_INCREMENT.copysign(valence);
    }

    for distance in 1..=3 {
        if i < distance {
            break;
        }
        let prev = i - distance;
        let prev_word = lowered[prev].as_str();
        if resources::valence(prev_word).is_none() {
            let mut scalar = booster_scalar(tokens[prev], prev_word, valence, mixed_case);
            if distance == 2 {
                scalar *= 0.95;
            } else if distance == 3 {
                scalar *= 0.9;
            }
            valence += scalar;
        }

        if resources::is_negation(prev_word) {
            valence *= NEGATION_SCALAR;
        }
    }

    valence
}

fn booster_scalar(token: &str, word: &str, valence: f64, mixed_case: bool) -> f64 {
    let Some(mut scalar) = resources::booster(word) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if mixed_case && is_shouted(token) {
        scalar += CAPS_INCREMENT.copysign(valence);
    }
    scalar
}

fn apply_but_rule(lowered: &[String], valences: &mut [f64]) {
    let Some(but) = lowered.iter().position(|w| w == "but") else {
        return;
    };
    for (i, valence) in valences.iter_mut().enumerate() {
        if i < but {
            *valence *= 0.5;
        } else if i > but {
            *valence *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64 * EXCLAMATION_INCREMENT;
    let questions = match text.matches('?').count() {
        0 | 1 => 0.0,
        n @ 2..=3 => n as f64 * QUESTION_INCREMENT,
        _ => 0.96,
    };
    exclamations + questions
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn score_valences(valences: &[f64], emphasis: f64) -> PolarityScores {
    let mut sum: f64 = valences.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = normalize(sum);

    let mut positive: f64 = valences.iter().filter(|v| **v > 0.0).map(|v| v + 1.0).sum();
    let mut negative: f64 = valences.iter().filter(|v| **v < 0.0).map(|v| v - 1.0).sum();
    let neutral = valences.iter().filter(|v| **v == 0.0).count() as f64;

    if positive > negative.abs() {
        positive += emphasis;
    } else if positive < negative.abs() {
        negative -= emphasis;
    }

    let total = positive + negative.abs() + neutral;
    if total == 0.0 {
        return PolarityScores {
            compound,
            ..PolarityScores::default()
        };
    }

    PolarityScores {
        negative: round3((negative / total).abs()),
        neutral: round3(neutral / total),
        positive: round3(positive / total),
        compound: round4(compound),
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn round4(value: f64) -> f64 {
    (value * 10000.0).round() / 10000.0
}
