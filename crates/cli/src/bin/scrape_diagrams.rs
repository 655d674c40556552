//! Scrape diagram images from the architecture documentation pages.

use anyhow::Result;
use clap::Parser;
use deck_cli::init_logging;
use deck_core::HttpFetcher;
use deck_diagrams::{scrape_pages, ScrapeOptions, DEFAULT_IMAGE_DIR, SCRAPE_PAGES};
use std::path::PathBuf;
use std::time::Duration;

/// Download architecture diagrams found on Azure documentation pages.
#[derive(Parser, Debug)]
#[command(name = "scrape-diagrams")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output directory
    #[arg(short, long, default_value = DEFAULT_IMAGE_DIR)]
    out_dir: PathBuf,

    /// Pause after each downloaded image, in milliseconds
    #[arg(long, default_value = "1000")]
    delay_ms: u64,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let fetcher = HttpFetcher::new()?;
    let options = ScrapeOptions {
        delay: Duration::from_millis(args.delay_ms),
    };
    scrape_pages(&fetcher, SCRAPE_PAGES, &args.out_dir, &options)?;
    Ok(())
}
