//! Constraint validation for a selected fleet.
//!
//! Both strategies, and any caller holding an externally chosen fleet, score
//! their selection here so every report is computed the same way.

use std::collections::BTreeSet;

use tracing::warn;

use crate::domain::metrics;
use crate::domain::problem::SelectionProblem;
use crate::domain::report::FleetResult;
use crate::domain::vessel::VesselRecord;

/// Slack applied to the safety comparison to absorb floating-point error in
/// the mean.
pub const SAFETY_TOLERANCE: f64 = 1e-9;

/// Score a fleet against the capacity, safety, fuel coverage and
/// no-duplicate constraints.
///
/// Never fails: each violated constraint is logged at `warn` and reported
/// through the returned flags.
#[must_use]
pub fn validate(
    fleet: &[VesselRecord],
    cargo_requirement: f64,
    min_safety: f64,
    required_fuel_types: &BTreeSet<String>,
) -> FleetResult {
    let scores: Vec<u8> = fleet.iter().map(VesselRecord::safety_score).collect();
    let total_dwt = metrics::total_dwt(fleet);
    let avg_safety = metrics::fleet_average_safety(&scores);
    let fuel_types_present = metrics::fuel_types_present(fleet);
    let missing_fuel_types: BTreeSet<String> = required_fuel_types
        .difference(&fuel_types_present)
        .cloned()
        .collect();

    let dwt_constraint_met = total_dwt >= cargo_requirement;
    let safety_constraint_met = avg_safety >= min_safety - SAFETY_TOLERANCE;
    let all_fuel_types_covered = missing_fuel_types.is_empty();
    let no_duplicates = metrics::distinct_id_count(fleet) == fleet.len();

    if !dwt_constraint_met {
        warn!(
            total_dwt,
            cargo_requirement, "Constraint violated: DWT below requirement"
        );
    }
    if !safety_constraint_met {
        warn!(avg_safety, min_safety, "Constraint violated: safety below floor");
    }
    if !all_fuel_types_covered {
        warn!(missing = ?missing_fuel_types, "Constraint violated: missing fuel types");
    }
    if !no_duplicates {
        warn!(fleet_size = fleet.len(), "Constraint violated: duplicate vessels");
    }

    FleetResult {
        selected_ids: fleet.iter().map(|v| v.vessel_id().clone()).collect(),
        fleet_size: fleet.len(),
        total_dwt,
        cargo_requirement,
        dwt_constraint_met,
        total_cost: metrics::total_cost(fleet),
        avg_safety,
        min_safety,
        safety_constraint_met,
        fuel_types_present,
        missing_fuel_types,
        all_fuel_types_covered,
        no_duplicates,
        all_constraints_met: dwt_constraint_met
            && safety_constraint_met
            && all_fuel_types_covered
            && no_duplicates,
        total_co2eq: metrics::total_co2eq(fleet),
        total_fuel: metrics::total_fuel(fleet),
    }
}

/// Score a fleet against the constraints of `problem`.
///
/// Fleet-size and cost bounds are not part of the report; they only steer
/// the exact strategy.
#[must_use]
pub fn validate_for(problem: &SelectionProblem, fleet: &[VesselRecord]) -> FleetResult {
    validate(
        fleet,
        problem.cargo_requirement(),
        problem.min_safety(),
        problem.required_fuel_types(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vessel(id: &str, dwt: f64, safety: u8, fuel: &str, cost: f64) -> VesselRecord {
        VesselRecord::try_new(id, dwt, safety, fuel, cost).unwrap()
    }

    fn required(types: &[&str]) -> BTreeSet<String> {
        types.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn feasible_fleet_meets_all_constraints() {
        let fleet = vec![vessel("1", 600.0, 3, "A", 10.0), vessel("2", 500.0, 4, "B", 20.0)];
        let report = validate(&fleet, 1000.0, 3.5, &required(&["A", "B"]));

        assert!(report.dwt_constraint_met);
        assert!(report.safety_constraint_met);
        assert!(report.all_fuel_types_covered);
        assert!(report.no_duplicates);
        assert!(report.all_constraints_met);
        assert_eq!(report.total_cost, 30.0);
        assert_eq!(report.fleet_size, 2);
    }

    #[test]
    fn safety_tolerance_absorbs_rounding() {
        // Mean of [3, 3, 4] is 3.333..; a floor written as 10/3 must pass.
        let fleet = vec![
            vessel("1", 1.0, 3, "A", 1.0),
            vessel("2", 1.0, 3, "A", 1.0),
            vessel("3", 1.0, 4, "A", 1.0),
        ];
        let report = validate(&fleet, 0.0, 10.0 / 3.0, &required(&["A"]));
        assert!(report.safety_constraint_met);

        let report = validate(&fleet, 0.0, 3.34, &required(&["A"]));
        assert!(!report.safety_constraint_met);
    }

    #[test]
    fn reports_missing_fuel_types_and_duplicates() {
        let a = vessel("1", 600.0, 5, "A", 10.0);
        let fleet = vec![a.clone(), a];
        let report = validate(&fleet, 100.0, 3.0, &required(&["A", "C"]));

        assert!(!report.no_duplicates);
        assert!(!report.all_fuel_types_covered);
        assert_eq!(report.missing_fuel_types, required(&["C"]));
        assert!(!report.all_constraints_met);
    }

    #[test]
    fn empty_fleet_is_reported_not_raised() {
        let report = validate(&[], 10.0, 3.0, &required(&["A"]));
        assert_eq!(report.avg_safety, 0.0);
        assert!(!report.dwt_constraint_met);
        assert!(!report.safety_constraint_met);
        assert!(report.no_duplicates);
        assert!(!report.all_constraints_met);
    }
}
