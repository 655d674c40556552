//! Validate a built deck against the course expectations.

use anyhow::{bail, Context, Result};
use clap::Parser;
use deck_cli::init_logging;
use deck_core::plan::{expectations, OUTPUT_FILENAME};
use deck_core::{report_banner, validate, Presentation, PresentationFormat};
use deck_pptx::PptxParser;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Check a deck's structure, coverage and exam weights and grade it.
#[derive(Parser, Debug)]
#[command(name = "validate-deck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Deck to validate
    #[arg(short, long, default_value = OUTPUT_FILENAME)]
    input: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Exit with an error when any check fails
    #[arg(long)]
    strict: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let presentation = match load(&args.input) {
        Ok(presentation) => presentation,
        Err(e) => {
            print!("{}", report_banner());
            println!();
            println!("[FAIL] Could not load PPTX: {e:#}");
            std::process::exit(1);
        }
    };
    log::debug!("Loaded {} slides", presentation.slides.len());

    let report = validate(&presentation, &expectations());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    if args.strict && report.has_failures() {
        bail!("{} of {} checks failed", report.fails, report.total());
    }
    Ok(())
}

/// Open a deck, checking that it is a PPTX package first.
fn load(path: &Path) -> Result<Presentation> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut reader = BufReader::new(file);

    let mut magic = [0u8; 4];
    reader
        .read_exact(&mut magic)
        .with_context(|| "Failed to read file header")?;

    PresentationFormat::detect(&magic, path)?;

    PptxParser::new()
        .open(path)
        .with_context(|| format!("Failed to read {}", path.display()))
}
