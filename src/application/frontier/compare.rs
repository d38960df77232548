//! Greedy versus exact on the same problem.

use serde::Serialize;
use tracing::info;

use crate::application::selection::exact::{ExactOutcome, ExactSelector};
use crate::application::selection::greedy::{GreedyOutcome, GreedySelector};
use crate::domain::pool::VesselPool;
use crate::domain::problem::SelectionProblem;

/// Both strategies' results plus the exact strategy's saving.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyComparison {
    pub greedy: GreedyOutcome,
    pub exact: ExactOutcome,
    /// Greedy cost minus exact cost; `None` unless the exact solve is optimal.
    pub savings: Option<f64>,
    pub savings_pct: Option<f64>,
}

impl StrategyComparison {
    /// Whether the exact fleet is strictly cheaper than the greedy one.
    #[must_use]
    pub fn exact_is_cheaper(&self) -> bool {
        self.savings.is_some_and(|s| s > 0.0)
    }
}

/// Run both strategies on `problem` and compare their costs.
///
/// Fleet-size and cost bounds on `problem` only constrain the exact side.
#[must_use]
pub fn compare(
    greedy: &GreedySelector,
    exact: &ExactSelector,
    pool: &VesselPool,
    problem: &SelectionProblem,
) -> StrategyComparison {
    let greedy = greedy.select(pool, problem);
    let exact = exact.solve(pool, problem);

    let greedy_cost = greedy.report.total_cost;
    let savings = exact.report().map(|r| greedy_cost - r.total_cost);
    let savings_pct = savings
        .filter(|_| greedy_cost != 0.0)
        .map(|s| s / greedy_cost * 100.0);

    info!(
        greedy_cost,
        exact_status = %exact.status,
        savings = ?savings,
        savings_pct = ?savings_pct,
        "Strategy comparison complete"
    );

    StrategyComparison {
        greedy,
        exact,
        savings,
        savings_pct,
    }
}
