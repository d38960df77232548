//! Handler for `claim`.

use crate::adapter::inbound::cli::command::{ClaimArgs, ConstraintArgs, ExactArgs};
use crate::adapter::inbound::cli::select::{overrides, LoadedPool};
use crate::adapter::inbound::cli::{operator, output, report};
use crate::adapter::outbound::export::json;
use crate::error::Result;

/// Execute `claim`.
pub fn execute_claim(args: &ClaimArgs, config_toml: Option<&str>) -> Result<()> {
    let pool = LoadedPool::read(&args.pool)?;
    let overrides = overrides(
        &ConstraintArgs {
            cargo: args.cargo,
            min_safety: args.min_safety,
        },
        &ExactArgs {
            fleet_size: args.fleet_size,
            max_fleet_size: None,
            max_cost: args.max_cost,
            time_limit: args.time_limit,
        },
    );

    let spinner = output::spinner("Checking claim");
    let run = match operator::operator().claim(config_toml, pool.input(), &overrides) {
        Ok(run) => run,
        Err(e) => {
            output::spinner_fail(&spinner, "Claim check failed");
            return Err(e);
        }
    };
    output::spinner_success(&spinner, "Claim checked");

    if let Some(path) = &args.out {
        json::write_json(path, &run.result)?;
        report::wrote(path);
    }

    if output::is_json() {
        return output::result("claim", &run);
    }

    let check = &run.result;
    output::header(env!("CARGO_PKG_VERSION"));
    report::pool(&run.pool);

    output::section("Claim");
    output::field("Fleet size", check.target_fleet_size);
    output::field("Min safety", format!("{:.2}", check.target_safety));
    output::field("Max cost", format!("{:.2}", check.target_cost));
    if check.exact_claim_feasible {
        output::success("Claim is feasible");
    } else {
        output::warning("No fleet meets all three claimed bounds");
    }

    output::section("Best at claimed size and safety");
    output::field("Cost", report::opt(check.best_cost_at_target, 2));
    output::field("Avg safety", report::opt(check.best_safety_at_target, 3));
    let gap = match (check.gap_to_claim, check.gap_pct) {
        (Some(gap), pct) if gap > 0.0 => {
            output::negative(format!("{gap:.2} ({}%)", report::opt(pct, 2)))
        }
        (Some(gap), pct) => output::positive(format!("{gap:.2} ({}%)", report::opt(pct, 2))),
        (None, _) => "-".to_string(),
    };
    output::field("Gap to claim", gap);

    output::section("Cheapest at claimed safety, any size");
    output::field("Cost", report::opt(check.min_cost_any_size, 2));
    output::field(
        "Fleet size",
        check
            .fleet_size_at_min_cost
            .map_or_else(|| "-".to_string(), |n| n.to_string()),
    );
    output::field("Avg safety", report::opt(check.safety_at_min_cost, 3));

    if let Some(note) = &check.note {
        output::hint(note);
    }
    Ok(())
}
