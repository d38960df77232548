//! HiGHS solver implementation via good_lp.
//!
//! HiGHS is a high-performance open-source linear/mixed-integer programming
//! solver. This implementation wraps it using the good_lp crate.
//!
//! good_lp reports a run that stopped on a time, iteration or gap limit as a
//! successful solve carrying a non-optimal status. The adapter maps any such
//! run to [`SolutionStatus::TimeLimitReached`] and drops its incumbent.

use std::time::{Duration, Instant};

use good_lp::solvers::highs::highs;
use good_lp::solvers::SolutionStatus as HighsStatus;
use good_lp::{
    constraint, variable, variables, Expression, ResolutionError, Solution, SolverModel,
};
use tracing::{debug, warn};

use crate::domain::constraint::ConstraintSense;
use crate::error::{Error, Result};
use crate::port::outbound::solver::{IlpProblem, LpProblem, LpSolution, SolutionStatus, Solver};

/// Absolute slack allowed when re-checking a returned assignment.
const FEASIBILITY_TOLERANCE: f64 = 1e-6;

/// HiGHS-based ILP solver.
#[derive(Debug, Default, Clone)]
pub struct HiGHSSolver;

impl HiGHSSolver {
    /// Create a new HiGHS solver instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Solver for HiGHSSolver {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn solve(&self, problem: &IlpProblem, time_limit: Duration) -> Result<LpSolution> {
        solve_with_good_lp(&problem.lp, &problem.integer_vars, time_limit)
    }
}

fn solve_with_good_lp(
    problem: &LpProblem,
    integer_vars: &[usize],
    time_limit: Duration,
) -> Result<LpSolution> {
    let n = problem.num_vars();

    // Nothing to decide: the constraints hold or they do not.
    if n == 0 {
        let status = if is_feasible(problem, &[]) {
            SolutionStatus::Optimal
        } else {
            SolutionStatus::Infeasible
        };
        return Ok(LpSolution {
            values: Vec::new(),
            objective: 0.0,
            status,
        });
    }

    let mut vars = variables!();
    let mut var_list = Vec::with_capacity(n);

    for (i, bounds) in problem.bounds.iter().enumerate() {
        let mut v = variable();
        if let Some(lb) = bounds.lower {
            v = v.min(lb);
        }
        if let Some(ub) = bounds.upper {
            v = v.max(ub);
        }
        if integer_vars.contains(&i) {
            v = v.integer();
        }
        var_list.push(vars.add(v));
    }

    let objective: Expression = var_list
        .iter()
        .zip(problem.objective.iter())
        .map(|(v, c)| *c * *v)
        .sum();

    let mut model = vars
        .minimise(&objective)
        .using(highs)
        .set_option("time_limit", time_limit.as_secs_f64());

    for constr in &problem.constraints {
        let lhs: Expression = var_list
            .iter()
            .zip(constr.coefficients.iter())
            .map(|(v, c)| *c * *v)
            .sum();
        let rhs = constr.rhs;

        model = match constr.sense {
            ConstraintSense::GreaterEqual => model.with(constraint!(lhs >= rhs)),
            ConstraintSense::LessEqual => model.with(constraint!(lhs <= rhs)),
            ConstraintSense::Equal => model.with(constraint!(lhs == rhs)),
        };
    }

    let started = Instant::now();
    let outcome = model.solve();
    let elapsed = started.elapsed();

    match outcome {
        Ok(solution) => {
            let values: Vec<f64> = var_list
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    let raw = solution.value(*v);
                    if integer_vars.contains(&i) {
                        raw.round()
                    } else {
                        raw
                    }
                })
                .collect();

            if let Some(status) = stopped_early(solution.status()) {
                warn!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    limit_ms = time_limit.as_millis() as u64,
                    "HiGHS stopped before proving optimality"
                );
                return Ok(LpSolution::without_values(status));
            }
            if !is_feasible(problem, &values) {
                warn!("HiGHS returned an assignment that violates the model");
                return Ok(LpSolution::without_values(SolutionStatus::Error));
            }

            debug!(elapsed_ms = elapsed.as_millis() as u64, "HiGHS solved to optimality");
            Ok(LpSolution {
                objective: problem.objective_at(&values),
                values,
                status: SolutionStatus::Optimal,
            })
        }
        Err(ResolutionError::Infeasible) => {
            Ok(LpSolution::without_values(SolutionStatus::Infeasible))
        }
        Err(ResolutionError::Unbounded) => {
            warn!("HiGHS reported an unbounded model");
            Ok(LpSolution::without_values(SolutionStatus::Error))
        }
        Err(other) => Err(Error::Solver(other.to_string())),
    }
}

/// Status for a run HiGHS ended before proving optimality, if it did.
fn stopped_early(status: HighsStatus) -> Option<SolutionStatus> {
    match status {
        HighsStatus::Optimal => None,
        HighsStatus::TimeLimit | HighsStatus::GapLimit => Some(SolutionStatus::TimeLimitReached),
    }
}

fn is_feasible(problem: &LpProblem, values: &[f64]) -> bool {
    problem.constraints.iter().all(|c| {
        let tolerance = FEASIBILITY_TOLERANCE * (1.0 + c.rhs.abs());
        c.is_satisfied(values, tolerance)
    })
}
