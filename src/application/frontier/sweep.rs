//! Sweeps of the exact strategy over one varying parameter.
//!
//! Every sweep solves sequentially, in request order, and emits exactly one
//! row per requested point. A point that does not reach optimality still
//! yields a row carrying its status; it never aborts the sweep.

use serde::Serialize;
use tracing::{info, warn};

use crate::application::selection::exact::{ExactOutcome, ExactSelector};
use crate::domain::pool::VesselPool;
use crate::domain::problem::{FleetSize, SelectionProblem};
use crate::domain::report::FleetResult;
use crate::domain::vessel::MAX_SAFETY_SCORE;
use crate::error::Result;
use crate::port::outbound::solver::SolutionStatus;

/// Outcome of one sweep point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    /// The solve reached optimality.
    Feasible,
    Infeasible,
    TimeLimitReached,
    Error,
}

impl RowStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feasible => "feasible",
            Self::Infeasible => "infeasible",
            Self::TimeLimitReached => "time_limit_reached",
            Self::Error => "error",
        }
    }
}

impl From<SolutionStatus> for RowStatus {
    fn from(status: SolutionStatus) -> Self {
        match status {
            SolutionStatus::Optimal => Self::Feasible,
            SolutionStatus::Infeasible => Self::Infeasible,
            SolutionStatus::TimeLimitReached => Self::TimeLimitReached,
            SolutionStatus::Error => Self::Error,
        }
    }
}

impl std::fmt::Display for RowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One point on a cost/safety frontier.
///
/// Metric columns are `None` unless `status` is [`RowStatus::Feasible`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrontierRow {
    pub scenario_label: String,
    pub min_safety_target: f64,
    /// Fleet-size bound the point was solved under.
    pub fleet_constraint: String,
    pub fleet_size: Option<usize>,
    pub total_cost: Option<f64>,
    pub avg_safety: Option<f64>,
    pub total_dwt: Option<f64>,
    pub emissions_co2e: Option<f64>,
    pub total_fuel: Option<f64>,
    pub fuel_types_present: Option<usize>,
    /// Wall-clock solve time in seconds.
    pub solve_time: f64,
    pub status: RowStatus,
}

impl FrontierRow {
    fn from_outcome(outcome: &ExactOutcome, min_safety: f64, fleet_size: FleetSize) -> Self {
        let report = outcome.report();
        Self {
            scenario_label: outcome.label.clone(),
            min_safety_target: min_safety,
            fleet_constraint: fleet_size.to_string(),
            fleet_size: report.map(|r| r.fleet_size),
            total_cost: report.map(|r| r.total_cost),
            avg_safety: report.map(|r| r.avg_safety),
            total_dwt: report.map(|r| r.total_dwt),
            emissions_co2e: report.map(|r| r.total_co2eq),
            total_fuel: report.map(|r| r.total_fuel),
            fuel_types_present: report.map(FleetResult::fuel_type_count),
            solve_time: outcome.solve_time.as_secs_f64(),
            status: RowStatus::from(outcome.status),
        }
    }

    /// Row for a target that could not form a valid problem.
    fn rejected(label: String, min_safety: f64, fleet_size: FleetSize) -> Self {
        Self {
            scenario_label: label,
            min_safety_target: min_safety,
            fleet_constraint: fleet_size.to_string(),
            fleet_size: None,
            total_cost: None,
            avg_safety: None,
            total_dwt: None,
            emissions_co2e: None,
            total_fuel: None,
            fuel_types_present: None,
            solve_time: 0.0,
            status: RowStatus::Error,
        }
    }

    #[must_use]
    pub fn is_feasible(&self) -> bool {
        self.status == RowStatus::Feasible
    }
}

/// One safety target tried against a baseline's cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DominationRow {
    pub scenario_label: String,
    pub target_safety: f64,
    pub total_cost: Option<f64>,
    pub avg_safety: Option<f64>,
    pub fleet_size: Option<usize>,
    pub total_dwt: Option<f64>,
    pub feasible: bool,
}

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Evenly spaced safety levels from `start` to `stop` inclusive.
///
/// Levels are rounded to two decimals so accumulated float error does not
/// leak into labels. An empty grid results from a non-positive step or
/// `start > stop`.
#[must_use]
pub fn safety_grid(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || start > stop {
        return Vec::new();
    }
    let mut levels = Vec::new();
    let mut i = 0u32;
    loop {
        let level = round2(start + step * f64::from(i));
        if level > stop + 1e-9 {
            break;
        }
        levels.push(level);
        i += 1;
    }
    levels
}

/// Minimum cost at each safety level, one exact solve per level.
///
/// The fleet-size bound and cost ceiling of `base` apply to every point. A
/// level off the safety scale yields an [`RowStatus::Error`] row.
#[must_use]
pub fn pareto_sweep(
    selector: &ExactSelector,
    pool: &VesselPool,
    base: &SelectionProblem,
    safety_levels: &[f64],
) -> Vec<FrontierRow> {
    info!(
        points = safety_levels.len(),
        fleet_constraint = %base.fleet_size(),
        "Starting Pareto sweep"
    );

    let mut rows = Vec::with_capacity(safety_levels.len());
    for &level in safety_levels {
        let label = format!("pareto_safety_{level:.1}");
        let row = match base.clone().with_min_safety(level) {
            Ok(problem) => {
                let outcome = selector.solve_labeled(pool, &problem, label);
                FrontierRow::from_outcome(&outcome, level, problem.fleet_size())
            }
            Err(e) => {
                warn!(label = %label, error = %e, "Skipping invalid safety level");
                FrontierRow::rejected(label, level, base.fleet_size())
            }
        };
        rows.push(row);
    }

    info!(
        feasible = rows.iter().filter(|r| r.is_feasible()).count(),
        points = rows.len(),
        "Pareto sweep complete"
    );
    rows
}

/// Minimum cost at each fixed fleet size under the safety floor of `base`.
#[must_use]
pub fn fleet_size_sweep(
    selector: &ExactSelector,
    pool: &VesselPool,
    base: &SelectionProblem,
    sizes: &[usize],
) -> Vec<FrontierRow> {
    let min_safety = base.min_safety();
    info!(points = sizes.len(), min_safety, "Starting fleet-size sweep");

    sizes
        .iter()
        .map(|&size| {
            let fleet_size = FleetSize::Exactly(size);
            let problem = base.clone().with_fleet_size(fleet_size);
            let outcome =
                selector.solve_labeled(pool, &problem, format!("milp_fs{size}_s{min_safety}"));
            FrontierRow::from_outcome(&outcome, min_safety, fleet_size)
        })
        .collect()
}

/// Look for fleets that beat `baseline` on safety without costing more.
///
/// Tries targets `baseline.avg_safety + k * step` for `k = 1..`, rounded to
/// two decimals, while they stay on the safety scale, each with the
/// baseline's total cost as ceiling. A non-positive step tries nothing.
///
/// # Errors
///
/// Returns a domain error if a target cannot form a valid problem.
pub fn domination_search(
    selector: &ExactSelector,
    pool: &VesselPool,
    base: &SelectionProblem,
    baseline: &FleetResult,
    step: f64,
) -> Result<Vec<DominationRow>> {
    let ceiling = baseline.total_cost;
    info!(
        baseline_cost = ceiling,
        baseline_safety = baseline.avg_safety,
        step,
        "Searching for dominating fleets"
    );

    let mut rows = Vec::new();
    for k in 1..=domination_steps(baseline.avg_safety, step) {
        let target = round2(baseline.avg_safety + step * f64::from(k));
        if target > f64::from(MAX_SAFETY_SCORE) {
            break;
        }
        let problem = base
            .clone()
            .with_min_safety(target)?
            .with_max_cost(Some(ceiling));
        let outcome = selector.solve_labeled(pool, &problem, format!("dominate_s{target:.1}"));
        let report = outcome.report();
        rows.push(DominationRow {
            scenario_label: outcome.label.clone(),
            target_safety: target,
            total_cost: report.map(|r| r.total_cost),
            avg_safety: report.map(|r| r.avg_safety),
            fleet_size: report.map(|r| r.fleet_size),
            total_dwt: report.map(|r| r.total_dwt),
            feasible: outcome.is_optimal(),
        });
    }

    let dominating = rows.iter().filter(|r| r.feasible).count();
    if dominating > 0 {
        info!(dominating, "Found fleets at least as cheap and strictly safer");
    } else {
        info!("No dominating fleet found; baseline is Pareto-efficient");
    }
    Ok(rows)
}

/// Number of `step` increments above `baseline` that stay on the scale.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn domination_steps(baseline: f64, step: f64) -> u32 {
    if step <= 0.0 || !step.is_finite() {
        return 0;
    }
    let headroom = (f64::from(MAX_SAFETY_SCORE) - baseline).max(0.0);
    // Rounded targets may land on the scale maximum from just below.
    let steps = (headroom / step + 1e-6).floor();
    if steps >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        steps as u32
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::testkit::domain::{scenario_pool, scenario_problem};
    use crate::testkit::solver::{BruteForceSolver, CannedResponse, CannedSolver};

    fn brute_force() -> ExactSelector {
        ExactSelector::new(Arc::new(BruteForceSolver), Duration::from_secs(1))
    }

    #[test]
    fn grid_is_inclusive_and_rounded() {
        assert_eq!(
            safety_grid(3.0, 4.0, 0.2),
            vec![3.0, 3.2, 3.4, 3.6, 3.8, 4.0]
        );
        assert!(safety_grid(3.0, 4.0, 0.0).is_empty());
        assert_eq!(safety_grid(5.0, 5.0, 0.1), vec![5.0]);
    }

    #[test]
    fn pareto_rows_follow_request_order() {
        let rows = pareto_sweep(
            &brute_force(),
            &scenario_pool(),
            &scenario_problem(),
            &[4.5, 3.0, 5.0],
        );

        let labels: Vec<_> = rows.iter().map(|r| r.scenario_label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["pareto_safety_4.5", "pareto_safety_3.0", "pareto_safety_5.0"]
        );
        // 4.5: A1 + B1 (cost 250). 3.0: A2 + B1 (cost 190). 5.0: no B vessel
        // scores 5, so no fleet covering both types can average 5.
        assert_eq!(rows[0].total_cost, Some(250.0));
        assert_eq!(rows[1].total_cost, Some(190.0));
        assert_eq!(rows[2].status, RowStatus::Infeasible);
        assert!(rows[2].total_cost.is_none());
        assert_eq!(rows[1].fuel_types_present, Some(2));
        assert_eq!(rows[1].fleet_constraint, "unconstrained");
    }

    #[test]
    fn level_off_the_scale_yields_an_error_row() {
        let rows = pareto_sweep(
            &brute_force(),
            &scenario_pool(),
            &scenario_problem(),
            &[3.0, 5.5, 4.5],
        );

        let targets: Vec<_> = rows.iter().map(|r| r.min_safety_target).collect();
        assert_eq!(targets, vec![3.0, 5.5, 4.5]);
        assert_eq!(rows[0].total_cost, Some(190.0));
        assert_eq!(rows[1].status, RowStatus::Error);
        assert_eq!(rows[1].scenario_label, "pareto_safety_5.5");
        assert!(rows[1].total_cost.is_none());
        assert!(rows[1].fleet_size.is_none());
        assert_eq!(rows[2].total_cost, Some(250.0));
    }

    #[test]
    fn solver_fault_does_not_stop_the_sweep() {
        let solver = Arc::new(CannedSolver::new([
            CannedResponse::Fault("crash".into()),
            CannedResponse::optimal(vec![0.0, 1.0, 1.0, 0.0, 0.0], 190.0),
        ]));
        let selector = ExactSelector::new(solver, Duration::from_secs(1));
        let rows =
            pareto_sweep(&selector, &scenario_pool(), &scenario_problem(), &[3.0, 3.0]);

        assert_eq!(rows[0].status, RowStatus::Error);
        assert_eq!(rows[1].status, RowStatus::Feasible);
    }

    #[test]
    fn fleet_size_rows_are_labelled_per_size() {
        let rows = fleet_size_sweep(&brute_force(), &scenario_pool(), &scenario_problem(), &[1, 2, 3]);

        assert_eq!(rows[0].scenario_label, "milp_fs1_s3");
        assert_eq!(rows[0].status, RowStatus::Infeasible);
        assert_eq!(rows[1].total_cost, Some(190.0));
        assert_eq!(rows[1].fleet_constraint, "fixed_2");
        assert_eq!(rows[2].fleet_size, Some(3));
    }

    #[test]
    fn domination_targets_stop_at_the_scale() {
        let selector = brute_force();
        let pool = scenario_pool();
        let problem = scenario_problem();
        let baseline = selector.solve(&pool, &problem).validation.unwrap();

        // Baseline: A2 + B1, cost 190, safety 3.0.
        let rows = domination_search(&selector, &pool, &problem, &baseline, 0.5).unwrap();
        let targets: Vec<_> = rows.iter().map(|r| r.target_safety).collect();
        assert_eq!(targets, vec![3.5, 4.0, 4.5, 5.0]);
        assert!(rows.iter().all(|r| !r.feasible));
        assert_eq!(rows[0].scenario_label, "dominate_s3.5");
    }

    #[test]
    fn small_domination_steps_reach_the_top_of_the_scale() {
        assert_eq!(domination_steps(3.0, 0.5), 4);
        assert_eq!(domination_steps(3.0, 0.01), 200);
        assert_eq!(domination_steps(4.7, 0.1), 3);
        assert_eq!(domination_steps(5.0, 0.1), 0);
        assert_eq!(domination_steps(3.0, 0.0), 0);
        assert_eq!(domination_steps(3.0, -0.5), 0);
    }

    #[test]
    fn fine_domination_grid_is_not_truncated() {
        let selector = brute_force();
        let pool = scenario_pool();
        let problem = scenario_problem();
        let baseline = selector.solve(&pool, &problem).validation.unwrap();

        let rows = domination_search(&selector, &pool, &problem, &baseline, 0.05).unwrap();
        assert_eq!(rows.len(), 40);
        assert_eq!(rows.last().map(|r| r.target_safety), Some(5.0));
    }
}
