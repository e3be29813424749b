//! Output formats.
//!
//! - [`render_text`] - human-readable report for the terminal
//! - [`write_json`] / [`to_json`] - a [`Report`](crate::report::Report) as pretty JSON - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - the parsed record table with `;` delimiter - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::analysis::{Analyzer, Participant};
//! use chatlens::output::{render_text, to_csv, to_json};
//!
//! let chat = chatlens::parse("3/31/25, 3:54 PM - Alice: Hello world")?;
//! let report = Analyzer::new(chat.records()).report(&Participant::Overall);
//!
//! assert!(render_text(&report).contains("Messages"));
//! assert!(to_json(&report)?.contains("\"basic_stats\""));
//! assert!(to_csv(chat.records())?.starts_with("Timestamp;Sender;Body"));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod text;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use text::render_text;
