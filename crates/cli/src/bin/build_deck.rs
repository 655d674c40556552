//! Build the AZ-305 training deck.

use anyhow::{Context, Result};
use clap::Parser;
use deck_cli::init_logging;
use deck_core::plan::{build_az305_deck, OUTPUT_FILENAME};
use deck_pptx::PptxWriter;
use std::path::PathBuf;

/// Build the AZ-305 course deck as a .pptx file.
#[derive(Parser, Debug)]
#[command(name = "build-deck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output file
    #[arg(short, long, default_value = OUTPUT_FILENAME)]
    output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let deck = build_az305_deck().context("Failed to build deck")?;
    PptxWriter::new()
        .save(&deck, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!("Presentation saved: {}", args.output.display());
    println!("Total slides: {}", deck.slide_count());
    Ok(())
}
