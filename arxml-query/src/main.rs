//! arxml-query - evaluate XPath expressions against an ARXML file
//!
//! Prints the collected results as JSON, or `null` when nothing was found.

mod cli;

use std::process::ExitCode;

use anyhow::Context;
use arxml_query_core::{logging, DocumentQueryHandler, Verbosity};
use clap::Parser;
use tracing::debug;

use cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(Verbosity::Normal);

    if let Err(e) = run(args) {
        eprintln!("error: {:#}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: Args) -> anyhow::Result<()> {
    let handler = DocumentQueryHandler::new(&args.file, args.expressions)
        .with_context(|| format!("cannot query '{}'", args.file))?;

    let data = handler
        .extract_data()
        .with_context(|| format!("extraction from '{}' failed", args.file))?;
    debug!(kept = data.as_ref().map_or(0, Vec::len), "extraction finished");

    let output = serde_json::to_string_pretty(&data)?;
    println!("{}", output);
    Ok(())
}
