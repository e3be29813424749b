//! Per-message language detection.
//!
//! Uses `whatlang` trigram detection. Codes are ISO 639-1 for the languages
//! commonly seen in chat exports, and whatlang's ISO 639-3 code otherwise.
//! Bodies without any alphabetic character (emoji, numbers, punctuation)
//! are never handed to the detector and map straight to [`UNKNOWN_LANGUAGE`].

use whatlang::Lang;

/// Language tag for bodies whose language cannot be determined.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Detects the language of `text`, falling back to [`UNKNOWN_LANGUAGE`].
///
/// # Example
///
/// ```
/// use chatlens::language::detect_language;
///
/// assert_eq!(detect_language("Where are we meeting tonight after work?"), "en");
/// assert_eq!(detect_language("🔥🔥"), "unknown");
/// ```
pub fn detect_language(text: &str) -> String {
    if !text.chars().any(char::is_alphabetic) {
        return UNKNOWN_LANGUAGE.to_string();
    }

    match whatlang::detect(text) {
        Some(info) => iso_code(info.lang()).to_string(),
        None => UNKNOWN_LANGUAGE.to_string(),
    }
}

fn iso_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Eng => "en",
        Lang::Spa => "es",
        Lang::Por => "pt",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Ita => "it",
        Lang::Nld => "nl",
        Lang::Rus => "ru",
        Lang::Ukr => "uk",
        Lang::Pol => "pl",
        Lang::Tur => "tr",
        Lang::Ara => "ar",
        Lang::Hin => "hi",
        Lang::Ben => "bn",
        Lang::Urd => "ur",
        Lang::Ind => "id",
        Lang::Cmn => "zh",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Vie => "vi",
        Lang::Tha => "th",
        Lang::Swe => "sv",
        Lang::Dan => "da",
        Lang::Fin => "fi",
        Lang::Ell => "el",
        Lang::Heb => "he",
        Lang::Ron => "ro",
        Lang::Ces => "cs",
        Lang::Hun => "hu",
        Lang::Tgl => "tl",
        Lang::Afr => "af",
        other => other.code(),
    }
}
