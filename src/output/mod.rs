//! Output module for scraped records
//!
//! This module handles:
//! - The record store abstraction and its delimited-file implementation
//! - Run statistics and the final timing report

mod csv_store;
pub mod stats;
mod traits;

pub use csv_store::CsvStore;
pub use stats::{print_summary, RunSummary};
pub use traits::RecordStore;

use crate::config::OutputConfig;

/// Builds the file store described by the output configuration
///
/// The delimiter has already been validated as a single ASCII character.
pub fn store_from_config(config: &OutputConfig) -> CsvStore {
    CsvStore::new(&config.path).with_delimiter(config.delimiter as u8)
}
