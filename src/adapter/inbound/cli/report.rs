//! Human renderers and file outputs shared by the selection commands.

use std::path::Path;

use tabled::Tabled;

use crate::adapter::inbound::cli::command::FleetOutputArgs;
use crate::adapter::inbound::cli::{operator, output};
use crate::adapter::outbound::export::{csv, json};
use crate::domain::decision::DecisionLog;
use crate::domain::problem::SelectionProblem;
use crate::domain::report::FleetResult;
use crate::domain::vessel::VesselRecord;
use crate::error::Result;
use crate::port::inbound::operator::selection::PoolSummary;

#[derive(Tabled)]
struct VesselRow {
    #[tabled(rename = "Vessel")]
    id: String,
    #[tabled(rename = "DWT")]
    dwt: String,
    #[tabled(rename = "Safety")]
    safety: u8,
    #[tabled(rename = "Fuel")]
    fuel: String,
    #[tabled(rename = "Cost")]
    cost: String,
}

#[derive(Tabled)]
struct DecisionRow {
    #[tabled(rename = "Phase")]
    phase: &'static str,
    #[tabled(rename = "Action")]
    action: &'static str,
    #[tabled(rename = "Vessel")]
    vessel: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

/// Format an optional number, `-` when absent.
pub fn opt(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.decimals$}"))
}

fn check(met: bool) -> String {
    if met {
        output::positive("met")
    } else {
        output::negative("violated")
    }
}

pub fn pool(summary: &PoolSummary) {
    output::section("Vessel pool");
    output::field("Source", &summary.source);
    output::field("Eligible", summary.eligible);
    if summary.excluded > 0 {
        output::field("Excluded", output::muted(summary.excluded));
    }
    output::field("Fuel types", summary.fuel_types.join(", "));
    output::field("Total DWT", format!("{:.0}", summary.total_dwt));
}

pub fn problem(problem: &SelectionProblem) {
    output::section("Constraints");
    output::field("Cargo", format!("{:.0} t", problem.cargo_requirement()));
    output::field("Min safety", format!("{:.2}", problem.min_safety()));
    output::field("Fleet size", problem.fleet_size());
    if let Some(max_cost) = problem.max_cost() {
        output::field("Max cost", format!("{max_cost:.2}"));
    }
}

/// Print a constraint report under `title`.
pub fn fleet_report(title: &str, report: &FleetResult) {
    output::section(title);
    output::field("Vessels", report.fleet_size);
    output::field("Total cost", output::highlight(format!("{:.2}", report.total_cost)));
    output::field(
        "Capacity",
        format!(
            "{:.0} / {:.0} t  {}",
            report.total_dwt,
            report.cargo_requirement,
            check(report.dwt_constraint_met)
        ),
    );
    output::field(
        "Avg safety",
        format!(
            "{:.3} / {:.2}  {}",
            report.avg_safety,
            report.min_safety,
            check(report.safety_constraint_met)
        ),
    );
    let coverage = if report.missing_fuel_types.is_empty() {
        check(true)
    } else {
        format!(
            "{} (missing {})",
            check(false),
            report
                .missing_fuel_types
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        )
    };
    output::field("Fuel types", format!("{}  {coverage}", report.fuel_type_count()));
    output::field("CO2e", format!("{:.2} t", report.total_co2eq));
    output::field("Fuel", format!("{:.2} t", report.total_fuel));

    if report.all_constraints_met {
        output::success("All constraints met");
    } else {
        output::warning("Fleet violates at least one constraint");
    }
}

pub fn fleet_table(fleet: &[VesselRecord]) {
    if fleet.is_empty() {
        return;
    }
    output::table(fleet.iter().map(|v| VesselRow {
        id: v.vessel_id().to_string(),
        dwt: format!("{:.0}", v.dwt()),
        safety: v.safety_score(),
        fuel: v.fuel_type().to_string(),
        cost: format!("{:.2}", v.adjusted_cost()),
    }));
}

pub fn decision_table(log: &DecisionLog) {
    output::section("Decisions");
    output::table(log.iter().map(|d| DecisionRow {
        phase: d.phase().as_str(),
        action: d.action().as_str(),
        vessel: d
            .vessel_id()
            .map_or_else(|| "-".to_string(), ToString::to_string),
        reason: d.reason().to_string(),
    }));
}

/// Note that a file was written.
pub fn wrote(path: &Path) {
    output::note(&format!("Wrote {}", path.display()));
}

/// Write whichever fleet outputs were requested.
pub fn write_fleet_outputs(
    args: &FleetOutputArgs,
    config_toml: Option<&str>,
    fleet: &[VesselRecord],
    report: &FleetResult,
) -> Result<()> {
    if let Some(path) = &args.fleet_out {
        csv::write_fleet(path, fleet)?;
        wrote(path);
    }
    if let Some(path) = &args.report_out {
        json::write_json(path, report)?;
        wrote(path);
    }
    if let Some(path) = &args.submission_out {
        let rows = operator::operator().submission(config_toml, report)?;
        csv::write_submission(path, &rows)?;
        wrote(path);
    }
    Ok(())
}
