//! Data model for scraped movies

use std::fmt;
use url::Url;

/// Absolute URL of one movie detail page
///
/// Produced by the index fetcher and consumed exactly once by a detail
/// extraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovieLink(Url);

impl MovieLink {
    pub fn new(url: Url) -> Self {
        Self(url)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for MovieLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// One fully extracted movie
///
/// Only built when all four fields are present and non-empty, so a stored
/// record is never partial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRecord {
    pub title: String,
    pub release_date: String,
    pub rating: String,
    pub plot_summary: String,
}

impl MovieRecord {
    /// Output columns, in file order
    pub fn as_row(&self) -> [&str; 4] {
        [
            &self.title,
            &self.release_date,
            &self.rating,
            &self.plot_summary,
        ]
    }
}

impl fmt::Display for MovieRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.title, self.release_date, self.rating, self.plot_summary
        )
    }
}
