//! Selection operator implementation.

use tracing::info;

use crate::application::frontier::claim::{check_claim, ClaimCheck, ClaimTarget};
use crate::application::frontier::compare::{compare, StrategyComparison};
use crate::application::frontier::sweep::{
    domination_search, fleet_size_sweep, pareto_sweep, FrontierRow,
};
use crate::application::selection::exact::ExactOutcome;
use crate::application::selection::greedy::{GreedyOutcome, GreedySelector};
use crate::application::submission::{format_submission, SubmissionMeta, SubmissionRow};
use crate::domain::problem::FleetSize;
use crate::domain::report::FleetResult;
use crate::error::Result;
use crate::port::inbound::operator::selection::{
    DominationSearch, PoolInput, ProblemOverrides, SelectionOperator, SelectionRun,
};

use super::entry::Operator;
use super::shared::{base_problem, exact_selector, load_config, load_pool};

impl SelectionOperator for Operator {
    fn select(
        &self,
        config_toml: Option<&str>,
        pool: PoolInput<'_>,
        overrides: &ProblemOverrides,
    ) -> Result<SelectionRun<GreedyOutcome>> {
        let config = load_config(config_toml)?;
        let (pool, summary) = load_pool(&config, pool)?;
        let problem = base_problem(&config, &pool, overrides, config.selection.min_safety)?;

        let result = GreedySelector::new().select(&pool, &problem);
        Ok(SelectionRun {
            pool: summary,
            problem,
            result,
        })
    }

    fn optimize(
        &self,
        config_toml: Option<&str>,
        pool: PoolInput<'_>,
        overrides: &ProblemOverrides,
    ) -> Result<SelectionRun<ExactOutcome>> {
        let config = load_config(config_toml)?;
        let (pool, summary) = load_pool(&config, pool)?;
        let problem = base_problem(&config, &pool, overrides, config.selection.min_safety)?;

        let result = exact_selector(&config, overrides).solve(&pool, &problem);
        Ok(SelectionRun {
            pool: summary,
            problem,
            result,
        })
    }

    fn compare(
        &self,
        config_toml: Option<&str>,
        pool: PoolInput<'_>,
        overrides: &ProblemOverrides,
    ) -> Result<SelectionRun<StrategyComparison>> {
        let config = load_config(config_toml)?;
        let (pool, summary) = load_pool(&config, pool)?;
        let problem = base_problem(&config, &pool, overrides, config.selection.min_safety)?;

        let result = compare(
            &GreedySelector::new(),
            &exact_selector(&config, overrides),
            &pool,
            &problem,
        );
        Ok(SelectionRun {
            pool: summary,
            problem,
            result,
        })
    }

    fn frontier(
        &self,
        config_toml: Option<&str>,
        pool: PoolInput<'_>,
        overrides: &ProblemOverrides,
        levels: Option<&[f64]>,
    ) -> Result<SelectionRun<Vec<FrontierRow>>> {
        let config = load_config(config_toml)?;
        let (pool, summary) = load_pool(&config, pool)?;
        let overrides = ProblemOverrides {
            max_fleet_size: overrides.max_fleet_size.or(config.frontier.max_fleet_size),
            ..overrides.clone()
        };
        let problem = base_problem(&config, &pool, &overrides, config.selection.min_safety)?;

        let levels = levels.map_or_else(|| config.frontier.safety_levels(), <[f64]>::to_vec);
        let result = pareto_sweep(
            &exact_selector(&config, &overrides),
            &pool,
            &problem,
            &levels,
        );
        Ok(SelectionRun {
            pool: summary,
            problem,
            result,
        })
    }

    fn fleet_sizes(
        &self,
        config_toml: Option<&str>,
        pool: PoolInput<'_>,
        overrides: &ProblemOverrides,
        sizes: Option<&[usize]>,
    ) -> Result<SelectionRun<Vec<FrontierRow>>> {
        let config = load_config(config_toml)?;
        let (pool, summary) = load_pool(&config, pool)?;
        let problem = base_problem(&config, &pool, overrides, config.frontier.fleet_size_safety)?
            .with_fleet_size(FleetSize::Unbounded);

        let sizes = sizes.map_or_else(|| config.frontier.fleet_sizes(), <[usize]>::to_vec);
        let result = fleet_size_sweep(
            &exact_selector(&config, overrides),
            &pool,
            &problem,
            &sizes,
        );
        Ok(SelectionRun {
            pool: summary,
            problem,
            result,
        })
    }

    fn dominate(
        &self,
        config_toml: Option<&str>,
        pool: PoolInput<'_>,
        overrides: &ProblemOverrides,
        step: Option<f64>,
    ) -> Result<SelectionRun<DominationSearch>> {
        let config = load_config(config_toml)?;
        let (pool, summary) = load_pool(&config, pool)?;
        let problem = base_problem(&config, &pool, overrides, config.selection.min_safety)?;

        let baseline = GreedySelector::new().select(&pool, &problem).report;
        info!(
            cost = baseline.total_cost,
            avg_safety = baseline.avg_safety,
            "Greedy baseline selected"
        );
        let rows = domination_search(
            &exact_selector(&config, overrides),
            &pool,
            &problem,
            &baseline,
            step.unwrap_or(config.frontier.domination_step),
        )?;
        Ok(SelectionRun {
            pool: summary,
            problem,
            result: DominationSearch { baseline, rows },
        })
    }

    fn claim(
        &self,
        config_toml: Option<&str>,
        pool: PoolInput<'_>,
        overrides: &ProblemOverrides,
    ) -> Result<SelectionRun<ClaimCheck>> {
        let config = load_config(config_toml)?;
        let (pool, summary) = load_pool(&config, pool)?;
        let configured = ClaimTarget::from(&config.claim);
        let target = ClaimTarget {
            fleet_size: overrides.fleet_size.unwrap_or(configured.fleet_size),
            min_safety: overrides.min_safety.unwrap_or(configured.min_safety),
            max_cost: overrides.max_cost.unwrap_or(configured.max_cost),
        };

        let base_overrides = ProblemOverrides {
            cargo_requirement: overrides.cargo_requirement,
            ..ProblemOverrides::default()
        };
        let problem = base_problem(&config, &pool, &base_overrides, config.selection.min_safety)?;

        let result = check_claim(&exact_selector(&config, overrides), &pool, &problem, target)?;
        Ok(SelectionRun {
            pool: summary,
            problem,
            result,
        })
    }

    fn submission(
        &self,
        config_toml: Option<&str>,
        report: &FleetResult,
    ) -> Result<Vec<SubmissionRow>> {
        let config = load_config(config_toml)?;
        Ok(format_submission(
            report,
            &SubmissionMeta::from(&config.submission),
        ))
    }
}
