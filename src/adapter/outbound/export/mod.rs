//! File exports for selection results.
//!
//! - [`csv`]: tabular exports (decision log, fleet, sweeps, submission)
//! - [`json`]: document exports (fleet report, claim check, comparisons)

pub mod csv;
pub mod json;
