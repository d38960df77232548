//! Handlers for the exact-strategy sweeps: `frontier`, `fleet-sizes` and
//! `dominate`.

use tabled::Tabled;

use crate::adapter::inbound::cli::command::{
    ConstraintArgs, DominateArgs, ExactArgs, FleetSizesArgs, FrontierArgs,
};
use crate::adapter::inbound::cli::select::{overrides, LoadedPool};
use crate::adapter::inbound::cli::{operator, output, report};
use crate::adapter::outbound::export::csv;
use crate::application::frontier::sweep::{DominationRow, FrontierRow};
use crate::error::Result;

#[derive(Tabled)]
struct FrontierLine {
    #[tabled(rename = "Scenario")]
    scenario: String,
    #[tabled(rename = "Safety >=")]
    target: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Cost")]
    cost: String,
    #[tabled(rename = "Avg safety")]
    safety: String,
    #[tabled(rename = "CO2e")]
    co2eq: String,
    #[tabled(rename = "Time (s)")]
    time: String,
}

impl From<&FrontierRow> for FrontierLine {
    fn from(row: &FrontierRow) -> Self {
        Self {
            scenario: row.scenario_label.clone(),
            target: format!("{:.2}", row.min_safety_target),
            status: row.status.to_string(),
            size: row
                .fleet_size
                .map_or_else(|| "-".to_string(), |n| n.to_string()),
            cost: report::opt(row.total_cost, 2),
            safety: report::opt(row.avg_safety, 3),
            co2eq: report::opt(row.emissions_co2e, 1),
            time: format!("{:.2}", row.solve_time),
        }
    }
}

#[derive(Tabled)]
struct DominationLine {
    #[tabled(rename = "Scenario")]
    scenario: String,
    #[tabled(rename = "Safety >=")]
    target: String,
    #[tabled(rename = "Found")]
    found: &'static str,
    #[tabled(rename = "Cost")]
    cost: String,
    #[tabled(rename = "Avg safety")]
    safety: String,
    #[tabled(rename = "Size")]
    size: String,
}

impl From<&DominationRow> for DominationLine {
    fn from(row: &DominationRow) -> Self {
        Self {
            scenario: row.scenario_label.clone(),
            target: format!("{:.2}", row.target_safety),
            found: if row.feasible { "yes" } else { "no" },
            cost: report::opt(row.total_cost, 2),
            safety: report::opt(row.avg_safety, 3),
            size: row
                .fleet_size
                .map_or_else(|| "-".to_string(), |n| n.to_string()),
        }
    }
}

fn frontier_summary(rows: &[FrontierRow]) {
    let feasible = rows.iter().filter(|r| r.is_feasible()).count();
    output::field("Scenarios", rows.len());
    output::field("Feasible", feasible);
    if feasible < rows.len() {
        output::field("Infeasible", output::negative(rows.len() - feasible));
    }
}

/// Execute `frontier`.
pub fn execute_frontier(args: &FrontierArgs, config_toml: Option<&str>) -> Result<()> {
    let pool = LoadedPool::read(&args.pool)?;
    let overrides = overrides(
        &ConstraintArgs {
            cargo: args.cargo,
            min_safety: None,
        },
        &ExactArgs {
            max_fleet_size: args.max_fleet_size,
            time_limit: args.time_limit,
            ..ExactArgs::default()
        },
    );

    let spinner = output::spinner("Sweeping safety levels");
    let run = match operator::operator().frontier(
        config_toml,
        pool.input(),
        &overrides,
        args.levels.as_deref(),
    ) {
        Ok(run) => run,
        Err(e) => {
            output::spinner_fail(&spinner, "Sweep failed");
            return Err(e);
        }
    };
    output::spinner_success(&spinner, &format!("{} scenarios solved", run.result.len()));

    if let Some(path) = &args.out {
        csv::write_frontier(path, &run.result)?;
        report::wrote(path);
    }

    if output::is_json() {
        return output::result("frontier", &run);
    }

    output::header(env!("CARGO_PKG_VERSION"));
    report::pool(&run.pool);
    output::section("Pareto frontier");
    frontier_summary(&run.result);
    output::table(run.result.iter().map(FrontierLine::from));
    Ok(())
}

/// Execute `fleet-sizes`.
pub fn execute_fleet_sizes(args: &FleetSizesArgs, config_toml: Option<&str>) -> Result<()> {
    let pool = LoadedPool::read(&args.pool)?;
    let overrides = overrides(
        &args.constraints,
        &ExactArgs {
            time_limit: args.time_limit,
            ..ExactArgs::default()
        },
    );

    let spinner = output::spinner("Sweeping fleet sizes");
    let run = match operator::operator().fleet_sizes(
        config_toml,
        pool.input(),
        &overrides,
        args.sizes.as_deref(),
    ) {
        Ok(run) => run,
        Err(e) => {
            output::spinner_fail(&spinner, "Sweep failed");
            return Err(e);
        }
    };
    output::spinner_success(&spinner, &format!("{} sizes solved", run.result.len()));

    if let Some(path) = &args.out {
        csv::write_frontier(path, &run.result)?;
        report::wrote(path);
    }

    if output::is_json() {
        return output::result("fleet-sizes", &run);
    }

    output::header(env!("CARGO_PKG_VERSION"));
    report::pool(&run.pool);
    report::problem(&run.problem);
    output::section("Cost by fleet size");
    frontier_summary(&run.result);
    output::table(run.result.iter().map(FrontierLine::from));

    let cheapest = run
        .result
        .iter()
        .filter_map(|r| r.total_cost.zip(r.fleet_size))
        .min_by(|a, b| a.0.total_cmp(&b.0));
    if let Some((cost, size)) = cheapest {
        output::field("Cheapest", format!("{size} vessels at {cost:.2}"));
    }
    Ok(())
}

/// Execute `dominate`.
pub fn execute_dominate(args: &DominateArgs, config_toml: Option<&str>) -> Result<()> {
    let pool = LoadedPool::read(&args.pool)?;
    let overrides = overrides(
        &args.constraints,
        &ExactArgs {
            time_limit: args.time_limit,
            ..ExactArgs::default()
        },
    );

    let spinner = output::spinner("Searching for dominating fleets");
    let run = match operator::operator().dominate(config_toml, pool.input(), &overrides, args.step)
    {
        Ok(run) => run,
        Err(e) => {
            output::spinner_fail(&spinner, "Search failed");
            return Err(e);
        }
    };
    let dominating = run.result.rows.iter().filter(|r| r.feasible).count();
    output::spinner_success(&spinner, &format!("{dominating} dominating fleets found"));

    if let Some(path) = &args.out {
        csv::write_domination(path, &run.result.rows)?;
        report::wrote(path);
    }

    if output::is_json() {
        return output::result("dominate", &run);
    }

    output::header(env!("CARGO_PKG_VERSION"));
    report::pool(&run.pool);
    report::fleet_report("Greedy baseline", &run.result.baseline);
    output::section("Dominating fleets");
    output::table(run.result.rows.iter().map(DominationLine::from));
    if dominating == 0 {
        output::note("No exact fleet is both as cheap and safer than the baseline");
    }
    Ok(())
}
