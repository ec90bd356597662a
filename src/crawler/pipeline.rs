//! Scrape pipeline - fetch the listing, fan out over detail pages
//!
//! One listing fetch produces N links; N detail extractions are started at
//! once against the same HTTP client and joined. There is no concurrency
//! limit and no ordering between completions.

use crate::config::Config;
use crate::crawler::detail::{extract_movie_details, DetailOutcome};
use crate::crawler::fetcher::build_http_client;
use crate::crawler::index::fetch_movie_links;
use crate::output::{store_from_config, RecordStore, RunSummary};
use crate::ScrapeError;
use futures::future::join_all;
use reqwest::Client;
use std::time::Instant;

/// Runs one scrape with a shared client and configuration
pub struct Pipeline {
    config: Config,
    client: Client,
}

impl Pipeline {
    /// Creates a pipeline and its HTTP client
    ///
    /// # Returns
    ///
    /// * `Ok(Pipeline)` - Ready to run
    /// * `Err(ScrapeError)` - The HTTP client could not be built
    pub fn new(config: Config) -> Result<Self, ScrapeError> {
        let client = build_http_client(&config.http)?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the listing fetch and every detail extraction
    ///
    /// Only listing failures are returned as errors. Per-page failures are
    /// logged and counted in the summary.
    pub async fn run<S>(&self, store: &S) -> Result<RunSummary, ScrapeError>
    where
        S: RecordStore + ?Sized,
    {
        let start_time = Instant::now();

        let links = fetch_movie_links(&self.client, &self.config.scraper).await?;

        tracing::info!(
            "Extracting {} detail pages into {}",
            links.len(),
            store.describe()
        );

        let extractions = links
            .iter()
            .map(|link| extract_movie_details(&self.client, store, link));
        let outcomes = join_all(extractions).await;

        let mut summary = RunSummary {
            links_found: links.len(),
            attempted: outcomes.len(),
            ..Default::default()
        };

        for outcome in &outcomes {
            match outcome {
                DetailOutcome::Written(_) => summary.written += 1,
                DetailOutcome::Skipped { .. } => summary.skipped += 1,
                DetailOutcome::Failed { .. } => summary.failed += 1,
            }
        }

        summary.elapsed = start_time.elapsed();

        tracing::debug!(
            "Run finished: {} written, {} skipped, {} failed in {:?}",
            summary.written,
            summary.skipped,
            summary.failed,
            summary.elapsed
        );

        Ok(summary)
    }
}

/// Runs a complete scrape into the configured output file
///
/// This is the main entry point. It will:
/// 1. Build the shared HTTP client
/// 2. Fetch the listing page and derive detail links
/// 3. Extract every detail page concurrently
/// 4. Append complete records to the output file
///
/// # Returns
///
/// * `Ok(RunSummary)` - The run finished; individual pages may have failed
/// * `Err(ScrapeError)` - The listing page could not be fetched or parsed
pub async fn run_scrape(config: Config) -> Result<RunSummary, ScrapeError> {
    let store = store_from_config(&config.output);
    let pipeline = Pipeline::new(config)?;
    pipeline.run(&store).await
}
