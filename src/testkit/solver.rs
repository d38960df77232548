//! Deterministic solver stand-ins.
//!
//! - [`CannedSolver`] replays scripted responses and records every problem
//!   it was asked to solve.
//! - [`BruteForceSolver`] enumerates every binary assignment; exact but only
//!   usable on small pools.

use std::collections::VecDeque;
use std::time::Duration;

use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::port::outbound::solver::{IlpProblem, LpSolution, SolutionStatus, Solver};

/// Largest problem [`BruteForceSolver`] accepts.
pub const BRUTE_FORCE_MAX_VARS: usize = 20;

const TOLERANCE: f64 = 1e-9;

/// One scripted solver reply.
#[derive(Debug, Clone)]
pub enum CannedResponse {
    /// Return this solution.
    Solution(LpSolution),
    /// Fail with [`Error::Solver`].
    Fault(String),
}

impl CannedResponse {
    /// An optimal reply selecting the given variable values.
    pub fn optimal(values: Vec<f64>, objective: f64) -> Self {
        Self::Solution(LpSolution {
            values,
            objective,
            status: SolutionStatus::Optimal,
        })
    }

    /// A reply carrying only a status.
    pub fn status(status: SolutionStatus) -> Self {
        Self::Solution(LpSolution::without_values(status))
    }
}

/// Solver that replays scripted responses in order.
///
/// Once the script runs out every further call faults.
#[derive(Debug, Default)]
pub struct CannedSolver {
    responses: Mutex<VecDeque<CannedResponse>>,
    seen: Mutex<Vec<IlpProblem>>,
}

impl CannedSolver {
    pub fn new(responses: impl IntoIterator<Item = CannedResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Problems received so far, in call order.
    pub fn problems(&self) -> Vec<IlpProblem> {
        self.seen.lock().clone()
    }

    /// Number of solve calls so far.
    pub fn calls(&self) -> usize {
        self.seen.lock().len()
    }
}

impl Solver for CannedSolver {
    fn name(&self) -> &'static str {
        "canned"
    }

    fn solve(&self, problem: &IlpProblem, _time_limit: Duration) -> Result<LpSolution> {
        self.seen.lock().push(problem.clone());
        match self.responses.lock().pop_front() {
            Some(CannedResponse::Solution(solution)) => Ok(solution),
            Some(CannedResponse::Fault(message)) => Err(Error::Solver(message)),
            None => Err(Error::Solver("canned solver script exhausted".into())),
        }
    }
}

/// Exhaustive solver for binary problems.
///
/// Ties on the objective go to the assignment with the lowest bitmask, which
/// keeps results reproducible.
#[derive(Debug, Default, Clone, Copy)]
pub struct BruteForceSolver;

impl Solver for BruteForceSolver {
    fn name(&self) -> &'static str {
        "brute-force"
    }

    fn solve(&self, problem: &IlpProblem, _time_limit: Duration) -> Result<LpSolution> {
        let n = problem.num_vars();
        if n > BRUTE_FORCE_MAX_VARS {
            return Err(Error::Solver(format!(
                "brute force limited to {BRUTE_FORCE_MAX_VARS} variables, got {n}"
            )));
        }

        let mut best: Option<(f64, Vec<f64>)> = None;
        for mask in 0u32..(1u32 << n) {
            let values: Vec<f64> = (0..n)
                .map(|i| if mask & (1 << i) == 0 { 0.0 } else { 1.0 })
                .collect();
            if !problem
                .lp
                .constraints
                .iter()
                .all(|c| c.is_satisfied(&values, TOLERANCE))
            {
                continue;
            }
            let objective = problem.lp.objective_at(&values);
            if best
                .as_ref()
                .map_or(true, |(incumbent, _)| objective < incumbent - TOLERANCE)
            {
                best = Some((objective, values));
            }
        }

        Ok(match best {
            Some((objective, values)) => LpSolution {
                values,
                objective,
                status: SolutionStatus::Optimal,
            },
            None => LpSolution::without_values(SolutionStatus::Infeasible),
        })
    }
}
