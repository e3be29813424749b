//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - what the binary prints
//!
//! ```rust
//! use chatlens::cli::OutputFormat;
//! use clap::ValueEnum;
//!
//! let format = OutputFormat::from_str("json", true).unwrap();
//! assert_eq!(format, OutputFormat::Json);
//! assert_eq!(format.to_string(), "JSON");
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Statistics for WhatsApp chat exports: activity, words, emoji,
/// sentiment and languages.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --user Alice
    chatlens chat.txt --format json > report.json
    chatlens chat.txt --format csv > messages.csv
    chatlens chat.txt --list-users")]
pub struct Args {
    /// Path to a WhatsApp TXT export
    pub input: PathBuf,

    /// Restrict statistics to one participant (exact, case-sensitive)
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Print the participant list and exit
    #[arg(long)]
    pub list_users: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options.
///
/// - [`Text`](OutputFormat::Text) - human-readable report
/// - [`Json`](OutputFormat::Json) - the full report as pretty JSON
/// - [`Csv`](OutputFormat::Csv) - the parsed message table, `;` delimited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    #[value(alias = "txt")]
    Text,
    Json,
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display() {
        assert_eq!(OutputFormat::Text.to_string(), "Text");
        assert_eq!(OutputFormat::Json.to_string(), "JSON");
        assert_eq!(OutputFormat::Csv.to_string(), "CSV");
    }

    #[test]
    fn test_format_values() {
        let parse = |value: &str| {
            Args::try_parse_from(["chatlens", "chat.txt", "--format", value]).map(|a| a.format)
        };
        assert_eq!(parse("text").unwrap(), OutputFormat::Text);
        assert_eq!(parse("txt").unwrap(), OutputFormat::Text);
        assert_eq!(parse("csv").unwrap(), OutputFormat::Csv);
        assert!(parse("xml").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["chatlens", "chat.txt", "--user", "Alice", "-f", "json", "-v"])
            .unwrap();
        assert_eq!(args.input, PathBuf::from("chat.txt"));
        assert_eq!(args.user.as_deref(), Some("Alice"));
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.verbose);
        assert!(!args.list_users);
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["chatlens", "chat.txt"]).unwrap();
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.user.is_none());
    }
}
