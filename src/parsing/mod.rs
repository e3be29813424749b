//! Parsing utilities for WhatsApp TXT exports.
//!
//! This module holds the line grammar and date templates used by
//! [`ChatParser`](crate::parser::ChatParser).

pub mod whatsapp;

pub use whatsapp::{
    DateTemplate, LinePattern, MatchedLines, RawLine, match_lines, resolve_timestamps,
};
