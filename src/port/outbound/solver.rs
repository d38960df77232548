//! Solver port for the fleet selection integer program.
//!
//! The exact strategy builds an [`IlpProblem`] and hands it to whatever
//! [`Solver`] it was constructed with. Backends translate the problem into
//! their own model, honour the wall-clock budget, and report a
//! [`SolutionStatus`].
//!
//! # Overview
//!
//! - [`Solver`]: integer programming backend interface
//! - [`LpProblem`] / [`IlpProblem`]: problem definitions
//! - [`LpSolution`]: solution representation

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::domain::constraint::{Constraint, VariableBounds};
use crate::error::Result;

/// Integer linear programming solver.
///
/// Implementations wrap specific solver backends (HiGHS, CBC, a stub in
/// tests) and provide a unified interface.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`) so one solver can be
/// shared by every invocation of a sweep.
///
/// # Implementation Notes
///
/// - Return `Ok` with a non-optimal status for infeasible problems and
///   exhausted time budgets; reserve `Err` for backend faults
/// - Never block past `time_limit` by more than the backend's own overhead
pub trait Solver: Send + Sync {
    /// Return the solver name for logging and configuration.
    fn name(&self) -> &'static str;

    /// Solve an integer linear programming problem.
    ///
    /// Minimizes the objective with integer constraints on the specified
    /// variables, giving up after `time_limit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails in a way that cannot be
    /// expressed as a [`SolutionStatus`].
    fn solve(&self, problem: &IlpProblem, time_limit: Duration) -> Result<LpSolution>;
}

/// Linear programming problem definition.
///
/// Represents a minimization problem of the form:
///
/// ```text
/// minimize    c^T * x
/// subject to  constraints
///             bounds on x
/// ```
#[derive(Debug, Clone)]
pub struct LpProblem {
    /// Objective function coefficients.
    pub objective: Vec<f64>,

    /// Linear constraints on the variables.
    pub constraints: Vec<Constraint>,

    /// Lower and upper bounds for each variable.
    pub bounds: Vec<VariableBounds>,
}

impl LpProblem {
    /// Create a new LP problem with the specified number of variables.
    ///
    /// Initializes all objective coefficients to zero and all variable bounds
    /// to their defaults.
    #[must_use]
    pub fn new(num_vars: usize) -> Self {
        Self {
            objective: vec![0.0; num_vars],
            constraints: Vec::new(),
            bounds: vec![VariableBounds::default(); num_vars],
        }
    }

    /// Return the number of decision variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }

    /// Objective value at `values`.
    #[must_use]
    pub fn objective_at(&self, values: &[f64]) -> f64 {
        self.objective.iter().zip(values).map(|(c, x)| c * x).sum()
    }
}

/// Integer linear programming problem definition.
///
/// Extends a linear programming problem with integer constraints on specified
/// variables.
#[derive(Debug, Clone)]
pub struct IlpProblem {
    /// Underlying linear programming problem.
    pub lp: LpProblem,

    /// Indices of variables constrained to integer values.
    pub integer_vars: Vec<usize>,
}

impl IlpProblem {
    /// Create an ILP problem from an LP with specified integer variables.
    #[must_use]
    pub const fn new(lp: LpProblem, integer_vars: Vec<usize>) -> Self {
        Self { lp, integer_vars }
    }

    /// Create an ILP with all variables constrained to binary (0 or 1) values.
    #[must_use]
    pub fn all_binary(mut lp: LpProblem) -> Self {
        lp.bounds = vec![VariableBounds::binary(); lp.num_vars()];
        let integer_vars: Vec<usize> = (0..lp.num_vars()).collect();
        Self { lp, integer_vars }
    }

    /// Return the number of decision variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.lp.num_vars()
    }
}

/// Solution to an integer programming problem.
#[derive(Debug, Clone)]
pub struct LpSolution {
    /// Values for each decision variable; empty unless optimal.
    pub values: Vec<f64>,

    /// Objective function value; meaningful only when optimal.
    pub objective: f64,

    /// Termination status of the solver.
    pub status: SolutionStatus,
}

impl LpSolution {
    /// A solution carrying only a non-optimal status.
    #[must_use]
    pub const fn without_values(status: SolutionStatus) -> Self {
        Self {
            values: Vec::new(),
            objective: 0.0,
            status,
        }
    }

    /// Return `true` if the solver found an optimal solution.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }
}

/// Termination status of an optimization solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolutionStatus {
    /// Solver found a provably optimal solution.
    Optimal,

    /// No feasible solution exists.
    Infeasible,

    /// The time budget ran out before optimality was proven.
    TimeLimitReached,

    /// Solver encountered an internal error or an unexpected status.
    Error,
}

impl SolutionStatus {
    /// Stable lowercase name used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Optimal => "optimal",
            Self::Infeasible => "infeasible",
            Self::TimeLimitReached => "time_limit_reached",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
