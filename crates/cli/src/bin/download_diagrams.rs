//! Download the fixed catalog of architecture diagrams.

use anyhow::Result;
use clap::Parser;
use deck_cli::init_logging;
use deck_core::HttpFetcher;
use deck_diagrams::{download_catalog, ARCHITECTURE_IMAGES, DEFAULT_IMAGE_DIR};
use std::path::PathBuf;

/// Download key Azure architecture diagrams into an images directory.
#[derive(Parser, Debug)]
#[command(name = "download-diagrams")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output directory
    #[arg(short, long, default_value = DEFAULT_IMAGE_DIR)]
    out_dir: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    println!("Starting to download Azure architecture diagrams...");
    let fetcher = HttpFetcher::new()?;
    let summary = download_catalog(&fetcher, ARCHITECTURE_IMAGES, &args.out_dir)?;
    log::info!(
        "{} of {} diagrams downloaded",
        summary.succeeded(),
        summary.attempted()
    );
    println!("Download completed!");
    Ok(())
}
