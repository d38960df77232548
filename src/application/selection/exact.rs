//! Exact fleet selection as a binary integer program.
//!
//! One binary variable per pool vessel, in pool order. The model minimises
//! total adjusted cost subject to:
//!
//! ```text
//! sum(x_i * dwt_i)                  >= cargo_requirement
//! sum(x_i * (safety_i - min_safety)) >= 0
//! sum(x_i : fuel_i = f)             >= 1        for each required f
//! sum(x_i)                          =  n | <= n (optional)
//! sum(x_i * cost_i)                 <= max_cost (optional)
//! ```
//!
//! The safety row is the linearised form of `mean(safety) >= min_safety`.
//! Solving is delegated to an injected [`Solver`].

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};
use tracing::{info, warn};

use super::validator;
use crate::domain::constraint::Constraint;
use crate::domain::pool::VesselPool;
use crate::domain::problem::{FleetSize, SelectionProblem};
use crate::domain::report::FleetResult;
use crate::domain::vessel::VesselRecord;
use crate::port::outbound::solver::{IlpProblem, LpProblem, SolutionStatus, Solver};

/// Label used when the caller does not name the run.
pub const DEFAULT_LABEL: &str = "milp";

/// Variables above this value count as selected.
const SELECTION_THRESHOLD: f64 = 0.5;

/// Result of one exact solve.
///
/// `fleet`, `validation` and `objective_value` are present only when the
/// status is [`SolutionStatus::Optimal`].
#[derive(Debug, Clone, Serialize)]
pub struct ExactOutcome {
    pub label: String,
    pub status: SolutionStatus,
    pub fleet: Option<Vec<VesselRecord>>,
    pub validation: Option<FleetResult>,
    #[serde(serialize_with = "serialize_secs")]
    pub solve_time: Duration,
    pub objective_value: Option<f64>,
}

impl ExactOutcome {
    fn without_fleet(label: String, status: SolutionStatus, solve_time: Duration) -> Self {
        Self {
            label,
            status,
            fleet: None,
            validation: None,
            solve_time,
            objective_value: None,
        }
    }

    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }

    /// Validation report, if the solve reached optimality.
    #[must_use]
    pub fn report(&self) -> Option<&FleetResult> {
        self.validation.as_ref()
    }
}

fn serialize_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

/// Build the integer program for `problem` over `pool`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn formulate(pool: &VesselPool, problem: &SelectionProblem) -> IlpProblem {
    let vessels = pool.vessels();
    let n = vessels.len();
    let mut lp = LpProblem::new(n);
    lp.objective = vessels.iter().map(VesselRecord::adjusted_cost).collect();

    lp.constraints.push(Constraint::geq(
        "dwt_requirement",
        vessels.iter().map(VesselRecord::dwt).collect(),
        problem.cargo_requirement(),
    ));
    lp.constraints.push(Constraint::geq(
        "safety_floor",
        vessels
            .iter()
            .map(|v| f64::from(v.safety_score()) - problem.min_safety())
            .collect(),
        0.0,
    ));
    for fuel_type in problem.required_fuel_types() {
        lp.constraints.push(Constraint::geq(
            format!("fuel_type_{fuel_type}"),
            vessels
                .iter()
                .map(|v| if v.fuel_type() == fuel_type { 1.0 } else { 0.0 })
                .collect(),
            1.0,
        ));
    }

    match problem.fleet_size() {
        FleetSize::Unbounded => {}
        FleetSize::Exactly(size) => {
            lp.constraints
                .push(Constraint::eq("fleet_size_fixed", vec![1.0; n], size as f64));
        }
        FleetSize::AtMost(size) => {
            lp.constraints
                .push(Constraint::leq("fleet_size_max", vec![1.0; n], size as f64));
        }
    }

    if let Some(max_cost) = problem.max_cost() {
        lp.constraints.push(Constraint::leq(
            "cost_ceiling",
            vessels.iter().map(VesselRecord::adjusted_cost).collect(),
            max_cost,
        ));
    }

    IlpProblem::all_binary(lp)
}

/// Exact strategy backed by an injected solver.
#[derive(Clone)]
pub struct ExactSelector {
    solver: Arc<dyn Solver>,
    time_limit: Duration,
}

impl std::fmt::Debug for ExactSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExactSelector")
            .field("solver", &self.solver.name())
            .field("time_limit", &self.time_limit)
            .finish()
    }
}

impl ExactSelector {
    pub fn new(solver: Arc<dyn Solver>, time_limit: Duration) -> Self {
        Self { solver, time_limit }
    }

    /// Name of the injected solver backend.
    #[must_use]
    pub fn solver_name(&self) -> &'static str {
        self.solver.name()
    }

    #[must_use]
    pub const fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Solve `problem` under the default label.
    #[must_use]
    pub fn solve(&self, pool: &VesselPool, problem: &SelectionProblem) -> ExactOutcome {
        self.solve_labeled(pool, problem, DEFAULT_LABEL)
    }

    /// Solve `problem`, tagging the outcome and its log lines with `label`.
    ///
    /// Never fails: a solver fault becomes [`SolutionStatus::Error`] on this
    /// outcome alone.
    #[must_use]
    pub fn solve_labeled(
        &self,
        pool: &VesselPool,
        problem: &SelectionProblem,
        label: impl Into<String>,
    ) -> ExactOutcome {
        let label = label.into();

        let uncovered: Vec<&String> = problem
            .required_fuel_types()
            .iter()
            .filter(|ft| !pool.vessels().iter().any(|v| v.fuel_type() == ft.as_str()))
            .collect();
        if !uncovered.is_empty() {
            warn!(
                label = %label,
                missing = ?uncovered,
                "Required fuel types have no candidates; model is infeasible"
            );
            return ExactOutcome::without_fleet(label, SolutionStatus::Infeasible, Duration::ZERO);
        }

        let ilp = formulate(pool, problem);
        let started = Instant::now();
        let result = self.solver.solve(&ilp, self.time_limit);
        let solve_time = started.elapsed();

        let solution = match result {
            Ok(solution) => solution,
            Err(e) => {
                warn!(label = %label, error = %e, "Solver failed");
                return ExactOutcome::without_fleet(label, SolutionStatus::Error, solve_time);
            }
        };

        if !solution.is_optimal() {
            warn!(
                label = %label,
                status = %solution.status,
                solve_time_secs = solve_time.as_secs_f64(),
                "Exact solve not optimal"
            );
            return ExactOutcome::without_fleet(label, solution.status, solve_time);
        }

        let fleet: Vec<VesselRecord> = pool
            .vessels()
            .iter()
            .zip(&solution.values)
            .filter(|(_, x)| **x > SELECTION_THRESHOLD)
            .map(|(v, _)| v.clone())
            .collect();
        let validation = validator::validate_for(problem, &fleet);

        info!(
            label = %label,
            status = %solution.status,
            cost = validation.total_cost,
            avg_safety = validation.avg_safety,
            fleet_size = validation.fleet_size,
            total_dwt = validation.total_dwt,
            solve_time_secs = solve_time.as_secs_f64(),
            "Exact solve complete"
        );

        ExactOutcome {
            label,
            status: SolutionStatus::Optimal,
            objective_value: Some(solution.objective),
            fleet: Some(fleet),
            validation: Some(validation),
            solve_time,
        }
    }
}
