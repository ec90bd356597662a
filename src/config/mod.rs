//! Configuration module for Moviemeter
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! All keys have defaults, so running without a file is the common case.
//!
//! # Example
//!
//! ```no_run
//! use moviemeter::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("moviemeter.toml")).unwrap();
//! println!("Listing page: {}", config.scraper.index_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, HttpConfig, OutputConfig, ScraperConfig, DEFAULT_INDEX_URL, DEFAULT_OUTPUT_PATH,
    DEFAULT_SITE_ORIGIN, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
