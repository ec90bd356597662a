//! Crawler module for listing and detail page processing
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching with a shared client
//! - Structural HTML queries
//! - Listing page link extraction
//! - Detail page field extraction
//! - The concurrent fan-out pipeline

mod detail;
mod fetcher;
mod index;
mod parser;
mod pipeline;

pub use detail::{extract_movie_details, parse_movie_details, DetailFields, DetailOutcome};
pub use fetcher::{build_http_client, fetch_page};
pub use index::{fetch_movie_links, parse_movie_links};
pub use parser::{find_first, nth_child_element, text_content, trimmed_text};
pub use pipeline::{run_scrape, Pipeline};
