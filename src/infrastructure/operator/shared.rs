//! Shared helper routines for operator implementations.

use std::path::Path;

use crate::adapter::outbound::pool::csv::parse_pool;
use crate::application::selection::exact::ExactSelector;
use crate::domain::pool::VesselPool;
use crate::domain::problem::{FleetSize, SelectionProblem};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::solver::SolverConfig;
use crate::infrastructure::factory::solver::build_exact_selector;
use crate::port::inbound::operator::selection::{PoolInput, PoolSummary, ProblemOverrides};

/// Parse `config_toml`, falling back to defaults when absent.
pub(super) fn load_config(config_toml: Option<&str>) -> Result<Config> {
    config_toml.map_or_else(|| Ok(Config::default()), Config::parse_toml)
}

/// Screen the input table with the configured fuel catalog.
pub(super) fn load_pool(config: &Config, input: PoolInput<'_>) -> Result<(VesselPool, PoolSummary)> {
    let pool = parse_pool(input.csv, Path::new(input.source), &config.pool.catalog())?;
    let summary = PoolSummary {
        source: input.source.to_string(),
        eligible: pool.len(),
        excluded: pool.excluded().len(),
        fuel_types: pool.fuel_types().into_iter().collect(),
        total_dwt: pool.total_dwt(),
    };
    Ok((pool, summary))
}

/// Problem from configured constraints with per-run overrides applied.
///
/// `default_safety` stands in for the configured floor when the caller has
/// its own (the fleet-size sweep does).
pub(super) fn base_problem(
    config: &Config,
    pool: &VesselPool,
    overrides: &ProblemOverrides,
    default_safety: f64,
) -> Result<SelectionProblem> {
    let problem = config.selection.problem_for(
        pool,
        overrides
            .cargo_requirement
            .unwrap_or(config.selection.cargo_requirement),
        overrides.min_safety.unwrap_or(default_safety),
    )?;
    Ok(problem
        .with_fleet_size(FleetSize::from_options(
            overrides.fleet_size,
            overrides.max_fleet_size,
        ))
        .with_max_cost(overrides.max_cost))
}

/// Exact selector honouring a per-run time limit override.
pub(super) fn exact_selector(config: &Config, overrides: &ProblemOverrides) -> ExactSelector {
    let solver = SolverConfig {
        backend: config.solver.backend,
        time_limit_secs: overrides
            .time_limit_secs
            .unwrap_or(config.solver.time_limit_secs),
    };
    build_exact_selector(&solver)
}
