//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for [`VesselRecord`], [`VesselPool`]
//! and [`SelectionProblem`] so tests focus on assertions rather than
//! construction boilerplate.

use std::collections::BTreeSet;

use crate::domain::pool::VesselPool;
use crate::domain::problem::SelectionProblem;
use crate::domain::vessel::VesselRecord;

/// Cargo requirement of the reference scenario.
pub const SCENARIO_CARGO: f64 = 2500.0;

/// Safety floor of the reference scenario.
pub const SCENARIO_MIN_SAFETY: f64 = 3.0;

/// Create a vessel, panicking on invalid attributes.
pub fn vessel(id: &str, dwt: f64, safety: u8, fuel_type: &str, cost: f64) -> VesselRecord {
    VesselRecord::try_new(id, dwt, safety, fuel_type, cost)
        .unwrap_or_else(|e| panic!("invalid test vessel {id}: {e}"))
}

/// Build a pool from vessels, panicking on duplicate ids.
pub fn pool_of(vessels: Vec<VesselRecord>) -> VesselPool {
    VesselPool::new(vessels).unwrap_or_else(|e| panic!("invalid test pool: {e}"))
}

/// The five-vessel reference pool over fuel types `A` and `B`.
///
/// | id | dwt  | cost | safety | fuel |
/// |----|------|------|--------|------|
/// | A1 | 1000 | 100  | 5      | A    |
/// | A2 | 500  | 40   | 2      | A    |
/// | B1 | 2000 | 150  | 4      | B    |
/// | B2 | 800  | 60   | 3      | B    |
/// | B3 | 300  | 500  | 1      | B    |
///
/// With the scenario constraints greedy selects `{A2, B1, B2}` at cost 250;
/// the cost-optimal fleet is `{A2, B1}` at cost 190.
pub fn scenario_pool() -> VesselPool {
    pool_of(vec![
        vessel("A1", 1000.0, 5, "A", 100.0).with_emissions(12.0, 4.0),
        vessel("A2", 500.0, 2, "A", 40.0).with_emissions(7.5, 2.5),
        vessel("B1", 2000.0, 4, "B", 150.0).with_emissions(20.0, 8.0),
        vessel("B2", 800.0, 3, "B", 60.0).with_emissions(9.0, 3.0),
        vessel("B3", 300.0, 1, "B", 500.0).with_emissions(30.0, 9.5),
    ])
}

/// Problem over `pool` requiring all of its fuel types.
pub fn problem_for(pool: &VesselPool, cargo: f64, min_safety: f64) -> SelectionProblem {
    SelectionProblem::for_pool(pool, cargo, min_safety)
        .unwrap_or_else(|e| panic!("invalid test problem: {e}"))
}

/// The reference scenario's problem.
pub fn scenario_problem() -> SelectionProblem {
    problem_for(&scenario_pool(), SCENARIO_CARGO, SCENARIO_MIN_SAFETY)
}

/// Collect string literals into a fuel type set.
pub fn fuel_types(types: &[&str]) -> BTreeSet<String> {
    types.iter().map(|s| (*s).to_string()).collect()
}

/// Ids of `fleet`, in order.
pub fn ids(fleet: &[VesselRecord]) -> Vec<String> {
    fleet
        .iter()
        .map(|v| v.vessel_id().as_str().to_string())
        .collect()
}

/// [`scenario_pool`] as the upstream attribute table, plus one row with a
/// missing cost that screening drops.
pub const SCENARIO_CSV: &str = "\
vessel_id,dwt,safety_score,main_engine_fuel_type,adjusted_cost,co2eq_total,fuel_total
A1,1000,5,A,100,12.0,4.0
A2,500,2,A,40,7.5,2.5
B1,2000,4,B,150,20.0,8.0
B2,800,3,B,60,9.0,3.0
B3,300,1,B,500,30.0,9.5
X9,900,4,B,,1.0,1.0
";
