//! CSV loader for the per-vessel attribute table.
//!
//! Expected columns: `vessel_id`, `dwt`, `safety_score`,
//! `main_engine_fuel_type`, `adjusted_cost`, and optionally `co2eq_total` and
//! `fuel_total`. Extra columns are ignored. Blank or non-numeric values in
//! numeric columns are read as absent, which makes the row ineligible
//! instead of failing the load.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::domain::pool::{FuelCatalog, VesselPool};
use crate::domain::vessel::VesselAttributes;
use crate::error::{PoolError, Result};

/// One raw row of the attribute table.
#[derive(Debug, Deserialize)]
struct VesselRow {
    vessel_id: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    dwt: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    safety_score: Option<f64>,
    #[serde(default)]
    main_engine_fuel_type: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    adjusted_cost: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    co2eq_total: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    fuel_total: Option<f64>,
}

impl From<VesselRow> for VesselAttributes {
    fn from(row: VesselRow) -> Self {
        Self {
            vessel_id: row.vessel_id,
            dwt: row.dwt,
            safety_score: row.safety_score,
            main_engine_fuel_type: row.main_engine_fuel_type.filter(|s| !s.trim().is_empty()),
            adjusted_cost: row.adjusted_cost,
            co2eq_total: row.co2eq_total,
            fuel_total: row.fuel_total,
        }
    }
}

/// Load and screen a vessel pool from a CSV file.
///
/// # Errors
///
/// Returns [`PoolError::Read`] if the file cannot be opened,
/// [`PoolError::Csv`] if it is not a readable CSV table,
/// [`PoolError::EmptyPool`] if no row is eligible, and a domain error on
/// duplicate vessel ids.
pub fn load_pool(path: &Path, catalog: &FuelCatalog) -> Result<VesselPool> {
    let file = std::fs::File::open(path).map_err(|source| PoolError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    require_eligible(read_pool(file, path, catalog)?, path)
}

/// Screen a vessel pool from CSV text already in memory.
///
/// `source` names where the text came from and only appears in errors and
/// logs.
///
/// # Errors
///
/// Same as [`load_pool`], minus the read failure.
pub fn parse_pool(content: &str, source: &Path, catalog: &FuelCatalog) -> Result<VesselPool> {
    require_eligible(read_pool(content.as_bytes(), source, catalog)?, source)
}

fn require_eligible(pool: VesselPool, path: &Path) -> Result<VesselPool> {
    if pool.is_empty() {
        return Err(PoolError::EmptyPool {
            path: path.to_path_buf(),
            excluded: pool.excluded().len(),
        }
        .into());
    }

    info!(
        path = %path.display(),
        eligible = pool.len(),
        excluded = pool.excluded().len(),
        fuel_types = pool.fuel_types().len(),
        "Vessel pool loaded"
    );
    Ok(pool)
}

fn read_pool<R: Read>(reader: R, path: &Path, catalog: &FuelCatalog) -> Result<VesselPool> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in reader.deserialize::<VesselRow>() {
        let row = record.map_err(|source| PoolError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if row.vessel_id.is_empty() {
            continue;
        }
        rows.push(VesselAttributes::from(row));
    }

    let pool = VesselPool::screen(rows, catalog)?;

    if !pool.excluded().is_empty() {
        warn!(
            excluded = pool.excluded().len(),
            "Excluded vessels with absent or unmapped attributes"
        );
        for excluded in pool.excluded() {
            debug!(vessel_id = %excluded.vessel_id, reason = %excluded.reason, "Vessel excluded");
        }
    }
    Ok(pool)
}
