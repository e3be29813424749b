//! Embedded linguistic resources.
//!
//! The English stopword list comes from the NLTK corpus bundled with the
//! `stop-words` crate; the sentiment lexicon ships inside the binary. Both
//! are indexed lazily on first use. Call [`init`] once at startup to pay that
//! cost up front; calling it again is a no-op.
//!
//! ```
//! chatlens::resources::init();
//! chatlens::resources::init();
//!
//! assert!(chatlens::resources::is_stopword("the"));
//! assert!(chatlens::resources::valence("great").unwrap() > 0.0);
//! ```

mod lexicon;

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use tracing::debug;

static STOPWORDS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    stop_words::get(stop_words::LANGUAGE::English)
        .into_iter()
        .map(|word| word.to_lowercase())
        .collect()
});

static VALENCES: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| lexicon::valences().collect());

static BOOSTERS: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| lexicon::BOOSTERS.iter().copied().collect());

static NEGATIONS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| lexicon::NEGATIONS.iter().copied().collect());

pub use lexicon::BOOST;

/// Builds every resource index. Idempotent.
pub fn init() {
    let stopwords = STOPWORDS.len();
    let valences = VALENCES.len();
    let boosters = BOOSTERS.len();
    let negations = NEGATIONS.len();
    debug!(
        stopwords,
        valences, boosters, negations, "linguistic resources ready"
    );
}

/// Returns `true` if `word` (already lowercased) is an English stopword.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// Iterates over the English stopword list.
pub fn stopwords() -> impl Iterator<Item = &'static str> {
    let set: &'static HashSet<String> = &STOPWORDS;
    set.iter().map(String::as_str)
}

/// Returns the lexicon valence of a lowercased token.
pub fn valence(word: &str) -> Option<f64> {
    VALENCES.get(word).copied()
}

/// Returns the booster increment of a lowercased token, negative for dampeners.
pub fn booster(word: &str) -> Option<f64> {
    BOOSTERS.get(word).copied()
}

/// Returns `true` if a lowercased token negates what follows.
pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(word) || word.contains("n't")
}
