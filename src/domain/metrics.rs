//! Fleet metrics and ranking keys.
//!
//! Every function here is a pure aggregation over a candidate subset, shared
//! by the greedy and exact strategies and by the validator.

use std::collections::{BTreeSet, HashSet};

use super::vessel::VesselRecord;

/// Arithmetic mean of safety scores.
///
/// Returns `0.0` for an empty slice. An empty fleet therefore never meets a
/// positive safety floor; callers that treat "no vessels yet" specially must
/// check emptiness themselves.
#[must_use]
pub fn fleet_average_safety(scores: &[u8]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let sum: u32 = scores.iter().copied().map(u32::from).sum();
    f64::from(sum) / scores.len() as f64
}

/// Capacity delivered per unit of cost (`dwt / adjusted_cost`).
///
/// Higher is more attractive. A zero-cost vessel ranks at `+inf`.
#[must_use]
pub fn value_metric(vessel: &VesselRecord) -> f64 {
    vessel.dwt() / vessel.adjusted_cost()
}

/// Cost per tonne of capacity (`adjusted_cost / dwt`).
///
/// Lower is more attractive; used to pick fuel-type representatives.
#[must_use]
pub fn cost_per_dwt(vessel: &VesselRecord) -> f64 {
    vessel.adjusted_cost() / vessel.dwt()
}

/// Sum of deadweight tonnage.
#[must_use]
pub fn total_dwt<'a>(fleet: impl IntoIterator<Item = &'a VesselRecord>) -> f64 {
    fleet.into_iter().map(VesselRecord::dwt).sum()
}

/// Sum of adjusted cost.
#[must_use]
pub fn total_cost<'a>(fleet: impl IntoIterator<Item = &'a VesselRecord>) -> f64 {
    fleet.into_iter().map(VesselRecord::adjusted_cost).sum()
}

/// Sum of CO2-equivalent emissions.
#[must_use]
pub fn total_co2eq<'a>(fleet: impl IntoIterator<Item = &'a VesselRecord>) -> f64 {
    fleet.into_iter().map(VesselRecord::co2eq_total).sum()
}

/// Sum of fuel consumption.
#[must_use]
pub fn total_fuel<'a>(fleet: impl IntoIterator<Item = &'a VesselRecord>) -> f64 {
    fleet.into_iter().map(VesselRecord::fuel_total).sum()
}

/// Distinct fuel types represented, in lexicographic order.
#[must_use]
pub fn fuel_types_present<'a>(
    fleet: impl IntoIterator<Item = &'a VesselRecord>,
) -> BTreeSet<String> {
    fleet
        .into_iter()
        .map(|v| v.fuel_type().to_string())
        .collect()
}

/// Number of distinct vessel ids.
#[must_use]
pub fn distinct_id_count<'a>(fleet: impl IntoIterator<Item = &'a VesselRecord>) -> usize {
    fleet
        .into_iter()
        .map(VesselRecord::vessel_id)
        .collect::<HashSet<_>>()
        .len()
}

/// Median of a sample; the mean of the two middle values for even sizes.
///
/// Returns `None` for an empty sample.
#[must_use]
pub fn median(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut sorted: Vec<f64> = values.into_iter().collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}
