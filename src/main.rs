// src/main.rs

//! Newswire CLI entry point.
//!
//! Crawls the feed list once, then drops into the interactive query loop.

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use newswire::{CrawlConfig, NewsAggregator, Result};

/// Optional configuration file consulted next to the working directory.
const CONFIG_PATH: &str = "newswire.toml";

/// Newswire - concurrent RSS news aggregator
#[derive(Parser, Debug)]
#[command(name = "newswire", version, about = "Concurrent RSS news aggregator")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Silence everything but errors (wins over --verbose)
    #[arg(short, long)]
    quiet: bool,

    /// URL of the RSS feed list to crawl
    #[arg(short, long, default_value = "small-feed.xml")]
    url: String,
}

fn init_logging(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = CrawlConfig::load_or_default(CONFIG_PATH)?;
    debug!(?config, url = %cli.url, "starting crawl");

    let mut aggregator = NewsAggregator::new(config, &cli.url)?;
    aggregator.build_index();
    aggregator.query_index();

    Ok(())
}
