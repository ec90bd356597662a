//! Moviemeter main entry point
//!
//! This is the command-line interface for the Moviemeter chart scraper.

use anyhow::Context;
use clap::Parser;
use moviemeter::config::{load_config_with_hash, validate, Config};
use moviemeter::crawler::run_scrape;
use moviemeter::output::print_summary;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Moviemeter: a movie chart scraper
///
/// Moviemeter reads the most-popular movies chart, visits every movie page
/// concurrently, and appends title, release date, rating and plot summary
/// to a delimited file. Runs with built-in defaults when given no arguments.
#[derive(Parser, Debug)]
#[command(name = "moviemeter")]
#[command(version)]
#[command(about = "A movie chart scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output file (overrides [output] path)
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Visit at most this many movie pages
    #[arg(long, value_name = "N")]
    max_items: Option<usize>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show the resolved configuration without scraping
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::debug!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if let Some(output) = cli.output {
        config.output.path = output;
    }
    if let Some(max_items) = cli.max_items {
        config.scraper.max_items = Some(max_items);
    }
    validate(&config).context("invalid command-line overrides")?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    match run_scrape(config).await {
        Ok(summary) => {
            print_summary(&summary);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("moviemeter=info,warn"),
            1 => EnvFilter::new("moviemeter=debug,info"),
            2 => EnvFilter::new("moviemeter=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Logs go to stderr so stdout carries only record lines and the timing line
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: prints what would be scraped
fn handle_dry_run(config: &Config) {
    println!("=== Moviemeter Dry Run ===\n");

    println!("Scraper:");
    println!("  Listing page: {}", config.scraper.index_url);
    println!("  Site origin: {}", config.scraper.site_origin);
    match config.scraper.max_items {
        Some(n) => println!("  Max items: {}", n),
        None => println!("  Max items: all"),
    }

    println!("\nHTTP:");
    println!("  User-Agent: {}", config.http.user_agent);

    println!("\nOutput:");
    println!("  Path: {}", config.output.path);
    println!("  Delimiter: {:?}", config.output.delimiter);

    println!("\n✓ Configuration is valid");
}
