//! Sync the exam's skills-measured outline into Markdown.

use anyhow::{Context, Result};
use clap::Parser;
use deck_cli::init_logging;
use deck_core::HttpFetcher;
use deck_objectives::{exam_url_from_env, sync_objectives, DEFAULT_OUTPUT};
use std::path::PathBuf;

/// Fetch the AZ-305 exam page and write its skills outline as Markdown.
#[derive(Parser, Debug)]
#[command(name = "sync-objectives")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Exam page URL (default: the EXAM_URL environment variable)
    #[arg(long)]
    url: Option<String>,

    /// Output Markdown file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let url = match args.url {
        Some(url) => url,
        None => exam_url_from_env()?,
    };
    let fetcher = HttpFetcher::new()?;
    let today = chrono::Local::now().date_naive();

    let objectives = sync_objectives(&fetcher, &url, &args.output, today)
        .with_context(|| format!("Failed to sync objectives from {url}"))?;

    println!(
        "Successfully updated {} ({} sections)",
        args.output.display(),
        objectives.sections.len()
    );
    Ok(())
}
