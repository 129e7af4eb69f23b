//! Page-Gleaner main entry point
//!
//! Command-line interface for the depth-bounded web-to-text crawler.

use anyhow::Context;
use clap::Parser;
use page_gleaner::config::{load_settings, split_keywords, CrawlConfig};
use page_gleaner::crawler::Crawler;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Page-Gleaner: a depth-bounded web-to-text crawler
///
/// Crawls the link graph from a seed URL up to a configured depth, keeps the
/// pages whose text matches a keyword allow-list, and prints each kept page
/// as plain text with its source URL.
#[derive(Parser, Debug)]
#[command(name = "page-gleaner")]
#[command(version = "1.0.0")]
#[command(about = "A depth-bounded web-to-text crawler", long_about = None)]
struct Cli {
    /// Seed URL to start crawling from
    #[arg(value_name = "SEED_URL")]
    seed: String,

    /// Maximum crawl depth from the seed (0 = seed page only)
    #[arg(long, default_value_t = 2)]
    max_depth: u32,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = 10)]
    timeout: u64,

    /// Comma-separated keyword list; pages matching none are skipped.
    /// With no keywords, no page is informative and nothing is emitted.
    #[arg(long, value_name = "LIST", default_value = "")]
    keywords: String,

    /// Separator inserted between extracted text nodes
    #[arg(long, default_value = "")]
    separator: String,

    /// Load settings from a TOML file instead of the flags above
    #[arg(long, value_name = "FILE", conflicts_with_all = ["max_depth", "timeout", "keywords", "separator"])]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => load_settings(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => CrawlConfig {
            max_depth: cli.max_depth,
            timeout: Duration::from_secs(cli.timeout),
            filter_keywords: split_keywords(&cli.keywords),
            text_separator: cli.separator.clone(),
        },
    };

    tracing::info!(
        "Starting crawl from {} (max depth {}, {} keywords)",
        cli.seed,
        config.max_depth,
        config.filter_keywords.len()
    );

    let mut crawler = Crawler::new(&cli.seed, config).context("failed to start crawl")?;

    let mut count = 0usize;
    while let Some(document) = crawler.next_document().await {
        println!("--- {}", document.source_url);
        println!("{}", document.content);
        count += 1;
    }

    tracing::info!(
        "Crawl finished: {} documents from {} scheduled URLs",
        count,
        crawler.visited_count()
    );

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("page_gleaner=info,warn"),
            1 => EnvFilter::new("page_gleaner=debug,info"),
            2 => EnvFilter::new("page_gleaner=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
