//! Handlers for `select`, `optimize` and `compare`.

use crate::adapter::inbound::cli::command::{
    CompareArgs, ConstraintArgs, ExactArgs, OptimizeArgs, PoolArgs, SelectArgs,
};
use crate::adapter::inbound::cli::{operator, output, report};
use crate::adapter::outbound::export::{csv, json};
use crate::error::Result;
use crate::port::inbound::operator::selection::{PoolInput, ProblemOverrides};

/// Vessel table read from disk, kept alive for the operator call.
pub(super) struct LoadedPool {
    source: String,
    csv: String,
}

impl LoadedPool {
    pub(super) fn read(args: &PoolArgs) -> Result<Self> {
        Ok(Self {
            source: args.vessels.display().to_string(),
            csv: operator::read_vessel_table(&args.vessels)?,
        })
    }

    pub(super) fn input(&self) -> PoolInput<'_> {
        PoolInput {
            source: &self.source,
            csv: &self.csv,
        }
    }
}

pub(super) fn overrides(constraints: &ConstraintArgs, exact: &ExactArgs) -> ProblemOverrides {
    ProblemOverrides {
        cargo_requirement: constraints.cargo,
        min_safety: constraints.min_safety,
        fleet_size: exact.fleet_size,
        max_fleet_size: exact.max_fleet_size,
        max_cost: exact.max_cost,
        time_limit_secs: exact.time_limit,
    }
}

/// Execute `select`.
pub fn execute_select(args: &SelectArgs, config_toml: Option<&str>) -> Result<()> {
    let pool = LoadedPool::read(&args.pool)?;
    let overrides = overrides(&args.constraints, &ExactArgs::default());

    let run = operator::operator().select(config_toml, pool.input(), &overrides)?;
    let outcome = &run.result;

    if let Some(path) = &args.log_out {
        csv::write_decision_log(path, &outcome.log)?;
        report::wrote(path);
    }
    report::write_fleet_outputs(&args.output, config_toml, &outcome.fleet, &outcome.report)?;

    if output::is_json() {
        return output::result("select", &run);
    }

    output::header(env!("CARGO_PKG_VERSION"));
    report::pool(&run.pool);
    report::problem(&run.problem);
    if args.explain || output::verbosity() > 0 {
        report::decision_table(&outcome.log);
    }
    report::fleet_report("Greedy fleet", &outcome.report);
    report::fleet_table(&outcome.fleet);
    if !args.explain {
        output::hint("pass --explain to see every selection decision");
    }
    Ok(())
}

/// Execute `optimize`.
pub fn execute_optimize(args: &OptimizeArgs, config_toml: Option<&str>) -> Result<()> {
    let pool = LoadedPool::read(&args.pool)?;
    let overrides = overrides(&args.constraints, &args.exact);

    let spinner = output::spinner("Solving");
    let run = match operator::operator().optimize(config_toml, pool.input(), &overrides) {
        Ok(run) => run,
        Err(e) => {
            output::spinner_fail(&spinner, "Solve failed");
            return Err(e);
        }
    };
    let outcome = &run.result;
    let summary = format!(
        "{} in {:.2}s",
        outcome.status,
        outcome.solve_time.as_secs_f64()
    );
    if outcome.is_optimal() {
        output::spinner_success(&spinner, &summary);
    } else {
        output::spinner_fail(&spinner, &summary);
    }

    if let (Some(fleet), Some(validation)) = (&outcome.fleet, &outcome.validation) {
        report::write_fleet_outputs(&args.output, config_toml, fleet, validation)?;
    }

    if output::is_json() {
        return output::result("optimize", &run);
    }

    output::header(env!("CARGO_PKG_VERSION"));
    report::pool(&run.pool);
    report::problem(&run.problem);
    match (&outcome.fleet, outcome.report()) {
        (Some(fleet), Some(validation)) => {
            report::fleet_report("Exact fleet", validation);
            report::fleet_table(fleet);
        }
        _ => {
            output::section("Exact fleet");
            output::warning(&format!("No fleet: solver status {}", outcome.status));
        }
    }
    Ok(())
}

/// Execute `compare`.
pub fn execute_compare(args: &CompareArgs, config_toml: Option<&str>) -> Result<()> {
    let pool = LoadedPool::read(&args.pool)?;
    let overrides = overrides(&args.constraints, &args.exact);

    let spinner = output::spinner("Running greedy and exact");
    let run = match operator::operator().compare(config_toml, pool.input(), &overrides) {
        Ok(run) => run,
        Err(e) => {
            output::spinner_fail(&spinner, "Comparison failed");
            return Err(e);
        }
    };
    output::spinner_success(&spinner, "Both strategies finished");

    if let Some(path) = &args.out {
        json::write_json(path, &run.result)?;
        report::wrote(path);
    }

    if output::is_json() {
        return output::result("compare", &run);
    }

    let comparison = &run.result;
    output::header(env!("CARGO_PKG_VERSION"));
    report::pool(&run.pool);
    report::problem(&run.problem);
    report::fleet_report("Greedy fleet", &comparison.greedy.report);
    match comparison.exact.report() {
        Some(exact) => report::fleet_report("Exact fleet", exact),
        None => {
            output::section("Exact fleet");
            output::warning(&format!(
                "No fleet: solver status {}",
                comparison.exact.status
            ));
        }
    }

    output::section("Savings");
    match (comparison.savings, comparison.savings_pct) {
        (Some(savings), pct) => {
            let text = format!("{savings:.2} ({}%)", report::opt(pct, 1));
            if comparison.exact_is_cheaper() {
                output::field("Exact saves", output::positive(text));
            } else {
                output::field("Exact saves", text);
            }
        }
        (None, _) => output::note("Exact solve not optimal; no saving reported"),
    }
    Ok(())
}
