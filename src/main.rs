//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::process;

use clap::Parser as ClapParser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use chatlens::ChatlensError;
use chatlens::analysis::{Analyzer, Participant};
use chatlens::cli::{Args, OutputFormat};
use chatlens::output::{render_text, to_csv, to_json};
use chatlens::parser::ChatParser;

fn main() {
    let args = <Args as ClapParser>::parse();
    setup_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Installs a stderr subscriber. `-v` forces `debug`, otherwise `RUST_LOG`
/// is honored with `warn` as the fallback.
fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry().with(filter).with(layer).init();
}

fn run(args: &Args) -> Result<(), ChatlensError> {
    chatlens::resources::init();

    let chat = ChatParser::new().parse_file(&args.input)?;
    debug!(
        input = %args.input.display(),
        records = chat.len(),
        dropped = chat.dropped_lines(),
        format = %args.format,
        "loaded export"
    );

    let analyzer = Analyzer::new(chat.records());

    if args.list_users {
        for participant in analyzer.participants() {
            println!("{participant}");
        }
        return Ok(());
    }

    let participant = match &args.user {
        Some(name) => analyzer.find_participant(name)?,
        None => Participant::Overall,
    };

    let output = match args.format {
        OutputFormat::Text => render_text(&analyzer.report(&participant)),
        OutputFormat::Json => to_json(&analyzer.report(&participant))?,
        OutputFormat::Csv => {
            let records: Vec<_> = chatlens::analysis::filter_records(&participant, chat.records())
                .into_iter()
                .cloned()
                .collect();
            to_csv(&records)?
        }
    };

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}
