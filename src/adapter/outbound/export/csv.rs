//! CSV writers for tabular results.
//!
//! Each writer takes a destination path; the `write_rows` core accepts any
//! [`Write`] so callers can also stream to stdout.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use serde::Serialize;
use tracing::debug;

use crate::application::frontier::sweep::{DominationRow, FrontierRow};
use crate::application::submission::SubmissionRow;
use crate::domain::decision::DecisionLog;
use crate::domain::vessel::VesselRecord;
use crate::error::Result;

/// Flat view of one decision-log entry.
#[derive(Debug, Serialize)]
struct DecisionRow<'a> {
    vessel_id: Option<&'a str>,
    action: &'static str,
    phase: &'static str,
    reason: &'a str,
}

fn decision_rows(log: &DecisionLog) -> impl Iterator<Item = DecisionRow<'_>> {
    log.iter().map(|d| DecisionRow {
        vessel_id: d.vessel_id().map(|id| id.as_str()),
        action: d.action().as_str(),
        phase: d.phase().as_str(),
        reason: d.reason(),
    })
}

/// Serialize `rows` as CSV with a header row derived from `T`'s fields.
///
/// # Errors
///
/// Returns an error if a row cannot be serialized or the writer fails.
pub fn write_rows<W, T, I>(writer: W, rows: I) -> Result<usize>
where
    W: Write,
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut wtr = Writer::from_writer(writer);
    let mut count = 0;
    for row in rows {
        wtr.serialize(row)?;
        count += 1;
    }
    wtr.flush()?;
    Ok(count)
}

fn write_file<T, I>(path: &Path, rows: I) -> Result<()>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let file = File::create(path)?;
    let count = write_rows(file, rows)?;
    debug!(path = %path.display(), rows = count, "CSV export written");
    Ok(())
}

/// Write the decision log, one entry per row, in decision order.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_decision_log(path: &Path, log: &DecisionLog) -> Result<()> {
    write_file(path, decision_rows(log))
}

/// Write the selected vessels with their attributes.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_fleet(path: &Path, fleet: &[VesselRecord]) -> Result<()> {
    write_file(path, fleet)
}

/// Write Pareto or fleet-size sweep rows.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_frontier(path: &Path, rows: &[FrontierRow]) -> Result<()> {
    write_file(path, rows)
}

/// Write domination search rows.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_domination(path: &Path, rows: &[DominationRow]) -> Result<()> {
    write_file(path, rows)
}

/// Write the submission table.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_submission(path: &Path, rows: &[SubmissionRow]) -> Result<()> {
    write_file(path, rows)
}
