//! Selection and experiment use-cases for operator-facing adapters.

use serde::Serialize;

use crate::application::frontier::claim::ClaimCheck;
use crate::application::frontier::compare::StrategyComparison;
use crate::application::frontier::sweep::{DominationRow, FrontierRow};
use crate::application::selection::exact::ExactOutcome;
use crate::application::selection::greedy::GreedyOutcome;
use crate::application::submission::SubmissionRow;
use crate::domain::problem::SelectionProblem;
use crate::domain::report::FleetResult;
use crate::error::Result;

/// Vessel attribute table handed over by the adapter.
#[derive(Debug, Clone, Copy)]
pub struct PoolInput<'a> {
    /// Where the table came from; used in errors and logs only.
    pub source: &'a str,
    pub csv: &'a str,
}

/// Per-run overrides of configured constraints.
///
/// For a claim check, `fleet_size`, `min_safety` and `max_cost` override the
/// configured claim instead.
#[derive(Debug, Clone, Default)]
pub struct ProblemOverrides {
    pub cargo_requirement: Option<f64>,
    pub min_safety: Option<f64>,
    pub fleet_size: Option<usize>,
    pub max_fleet_size: Option<usize>,
    pub max_cost: Option<f64>,
    pub time_limit_secs: Option<u64>,
}

/// What screening kept from the input table.
#[derive(Debug, Clone, Serialize)]
pub struct PoolSummary {
    pub source: String,
    pub eligible: usize,
    pub excluded: usize,
    pub fuel_types: Vec<String>,
    pub total_dwt: f64,
}

/// Result of one operator run with the pool and problem it was run on.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionRun<T> {
    pub pool: PoolSummary,
    pub problem: SelectionProblem,
    pub result: T,
}

/// Domination search rows plus the greedy baseline they were measured from.
#[derive(Debug, Clone, Serialize)]
pub struct DominationSearch {
    pub baseline: FleetResult,
    pub rows: Vec<DominationRow>,
}

/// Fleet selection use-cases.
pub trait SelectionOperator: Send + Sync {
    /// Run the greedy heuristic.
    fn select(
        &self,
        config_toml: Option<&str>,
        pool: PoolInput<'_>,
        overrides: &ProblemOverrides,
    ) -> Result<SelectionRun<GreedyOutcome>>;

    /// Run the exact strategy.
    fn optimize(
        &self,
        config_toml: Option<&str>,
        pool: PoolInput<'_>,
        overrides: &ProblemOverrides,
    ) -> Result<SelectionRun<ExactOutcome>>;

    /// Run both strategies on the same problem.
    fn compare(
        &self,
        config_toml: Option<&str>,
        pool: PoolInput<'_>,
        overrides: &ProblemOverrides,
    ) -> Result<SelectionRun<StrategyComparison>>;

    /// Pareto sweep over `levels`, or the configured grid.
    fn frontier(
        &self,
        config_toml: Option<&str>,
        pool: PoolInput<'_>,
        overrides: &ProblemOverrides,
        levels: Option<&[f64]>,
    ) -> Result<SelectionRun<Vec<FrontierRow>>>;

    /// Fixed fleet-size sweep over `sizes`, or the configured range.
    fn fleet_sizes(
        &self,
        config_toml: Option<&str>,
        pool: PoolInput<'_>,
        overrides: &ProblemOverrides,
        sizes: Option<&[usize]>,
    ) -> Result<SelectionRun<Vec<FrontierRow>>>;

    /// Search for fleets that dominate the greedy fleet.
    fn dominate(
        &self,
        config_toml: Option<&str>,
        pool: PoolInput<'_>,
        overrides: &ProblemOverrides,
        step: Option<f64>,
    ) -> Result<SelectionRun<DominationSearch>>;

    /// Check a claimed `(fleet size, safety, cost)` point.
    fn claim(
        &self,
        config_toml: Option<&str>,
        pool: PoolInput<'_>,
        overrides: &ProblemOverrides,
    ) -> Result<SelectionRun<ClaimCheck>>;

    /// Map `report` onto the submission template.
    fn submission(
        &self,
        config_toml: Option<&str>,
        report: &FleetResult,
    ) -> Result<Vec<SubmissionRow>>;
}
