//! Constraint validation report for a selected fleet.

use std::collections::BTreeSet;

use serde::Serialize;

use super::id::VesselId;

/// Derived metrics and constraint flags of a completed selection.
///
/// Built by the validator as a pure function of the fleet and the
/// constraint parameters; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetResult {
    pub selected_ids: Vec<VesselId>,
    pub fleet_size: usize,
    pub total_dwt: f64,
    pub cargo_requirement: f64,
    pub dwt_constraint_met: bool,
    pub total_cost: f64,
    pub avg_safety: f64,
    pub min_safety: f64,
    pub safety_constraint_met: bool,
    pub fuel_types_present: BTreeSet<String>,
    pub missing_fuel_types: BTreeSet<String>,
    pub all_fuel_types_covered: bool,
    pub no_duplicates: bool,
    pub all_constraints_met: bool,
    pub total_co2eq: f64,
    pub total_fuel: f64,
}

impl FleetResult {
    /// Number of distinct fuel types in the fleet.
    #[must_use]
    pub fn fuel_type_count(&self) -> usize {
        self.fuel_types_present.len()
    }

    /// Flat key/value view for tabular export.
    #[must_use]
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("fleet_size", self.fleet_size.to_string()),
            ("total_dwt", format!("{:.2}", self.total_dwt)),
            ("cargo_requirement", format!("{:.2}", self.cargo_requirement)),
            ("dwt_constraint_met", self.dwt_constraint_met.to_string()),
            ("total_cost", format!("{:.2}", self.total_cost)),
            ("avg_safety", format!("{:.4}", self.avg_safety)),
            ("min_safety", format!("{:.2}", self.min_safety)),
            ("safety_constraint_met", self.safety_constraint_met.to_string()),
            ("fuel_types_present", join(&self.fuel_types_present)),
            ("n_fuel_types", self.fuel_type_count().to_string()),
            ("missing_fuel_types", join(&self.missing_fuel_types)),
            ("all_fuel_types_covered", self.all_fuel_types_covered.to_string()),
            ("no_duplicates", self.no_duplicates.to_string()),
            ("all_constraints_met", self.all_constraints_met.to_string()),
            ("total_co2eq", format!("{:.2}", self.total_co2eq)),
            ("total_fuel", format!("{:.2}", self.total_fuel)),
        ]
    }
}

fn join(set: &BTreeSet<String>) -> String {
    set.iter().cloned().collect::<Vec<_>>().join("; ")
}
