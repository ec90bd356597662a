//! Output store trait
//!
//! A record store receives fully extracted records one at a time. Stores are
//! append-only: there is no update, delete, or uniqueness check.

use crate::model::MovieRecord;
use crate::ScrapeError;

/// Destination for extracted movie records
///
/// Detail extractions run concurrently against one shared store, so `append`
/// takes `&self` and each call must leave the store consistent on its own.
pub trait RecordStore {
    /// Appends one complete record
    ///
    /// # Arguments
    ///
    /// * `record` - The record to persist
    fn append(&self, record: &MovieRecord) -> Result<(), ScrapeError>;

    /// Human-readable location of the store, used in log lines
    fn describe(&self) -> String;
}
