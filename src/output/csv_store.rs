//! Delimited text file store
//!
//! Each append opens the file in append mode, writes one row, flushes and
//! closes it again. No handle is kept between records, so concurrent
//! extractions never share a writer.

use crate::model::MovieRecord;
use crate::output::traits::RecordStore;
use crate::ScrapeError;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Append-only delimited file of movie records
///
/// Rows are `title, release date, rating, plot summary`, UTF-8, `\n`
/// terminated, with quotes only where a field needs them. No header row is
/// written, and existing content is never truncated.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
    delimiter: u8,
}

impl CsvStore {
    /// Creates a store for the given path using `,` as delimiter
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    /// Uses a different single-byte delimiter (for example `\t`)
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for CsvStore {
    fn append(&self, record: &MovieRecord) -> Result<(), ScrapeError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .delimiter(self.delimiter)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(file);

        writer.write_record(record.as_row())?;
        writer.flush()?;

        tracing::trace!("Appended '{}' to {}", record.title, self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
