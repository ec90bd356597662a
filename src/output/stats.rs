//! Run statistics
//!
//! Counts what happened to each detail page of a run and reports the total
//! wall-clock time.

use std::time::Duration;

/// Outcome counts for one scrape run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Detail links produced by the listing page
    pub links_found: usize,

    /// Detail extractions that were started
    pub attempted: usize,

    /// Records appended to the output store
    pub written: usize,

    /// Pages skipped because a field was missing
    pub skipped: usize,

    /// Pages that failed with a network, parse, or write error
    pub failed: usize,

    /// Wall-clock time of the whole run
    pub elapsed: Duration,
}

impl RunSummary {
    /// Share of attempted pages that produced a record, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.attempted == 0 {
            return 0.0;
        }
        (self.written as f64 / self.attempted as f64) * 100.0
    }

    /// The closing timing line, e.g. `Total time: 3.42 seconds`
    pub fn timing_line(&self) -> String {
        format!("Total time: {:.2} seconds", self.elapsed.as_secs_f64())
    }
}

/// Prints the run summary to stdout, ending with the timing line
pub fn print_summary(summary: &RunSummary) {
    tracing::info!(
        "Links: {}, written: {}, skipped: {}, failed: {} ({:.1}% success)",
        summary.links_found,
        summary.written,
        summary.skipped,
        summary.failed,
        summary.success_rate()
    );

    println!("{}", summary.timing_line());
}
