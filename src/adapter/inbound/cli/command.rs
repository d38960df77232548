//! Command-line interface definitions.
//!
//! Defines the CLI structure for fleetsel using `clap`. Every selection
//! command reads the vessel attribute table from a CSV path and takes its
//! defaults from the configuration file.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::paths;

/// Constraint-aware cargo fleet selection
#[derive(Parser, Debug)]
#[command(name = "fleetsel")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file [default: ~/.fleetsel/config.toml if present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Forced color setting, `None` for terminal detection.
    #[must_use]
    pub const fn forced(&self) -> Option<bool> {
        match self {
            Self::Auto => None,
            Self::Always => Some(true),
            Self::Never => Some(false),
        }
    }
}

/// Top-level subcommands for the fleetsel CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Select a fleet with the explainable greedy heuristic
    Select(SelectArgs),

    /// Select the cost-optimal fleet with the exact solver
    Optimize(OptimizeArgs),

    /// Run greedy and exact on the same problem and compare costs
    Compare(CompareArgs),

    /// Sweep minimum cost over a grid of safety floors
    Frontier(FrontierArgs),

    /// Sweep minimum cost over fixed fleet sizes
    FleetSizes(FleetSizesArgs),

    /// Search for fleets safer than the greedy fleet at no extra cost
    Dominate(DominateArgs),

    /// Check a claimed (fleet size, safety, cost) operating point
    Claim(ClaimArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `fleetsel config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate a configuration file for correctness.
    Validate,
}

/// Arguments for the `config init` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

/// Vessel attribute table input.
#[derive(Args, Debug, Clone)]
pub struct PoolArgs {
    /// CSV with vessel_id, dwt, safety_score, main_engine_fuel_type,
    /// adjusted_cost and optional co2eq_total, fuel_total columns.
    pub vessels: PathBuf,
}

/// Constraint overrides shared by the selection commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ConstraintArgs {
    /// Minimum total deadweight tonnage.
    #[arg(long)]
    pub cargo: Option<f64>,

    /// Minimum mean safety score (1-5).
    #[arg(long)]
    pub min_safety: Option<f64>,
}

/// Exact-solver bounds and budget.
#[derive(Args, Debug, Clone, Default)]
pub struct ExactArgs {
    /// Select exactly this many vessels.
    #[arg(long, conflicts_with = "max_fleet_size")]
    pub fleet_size: Option<usize>,

    /// Select at most this many vessels.
    #[arg(long)]
    pub max_fleet_size: Option<usize>,

    /// Total cost ceiling.
    #[arg(long)]
    pub max_cost: Option<f64>,

    /// Solver time limit in seconds.
    #[arg(long)]
    pub time_limit: Option<u64>,
}

/// Where to write a selected fleet.
#[derive(Args, Debug, Clone, Default)]
pub struct FleetOutputArgs {
    /// Write the selected vessels as CSV.
    #[arg(long)]
    pub fleet_out: Option<PathBuf>,

    /// Write the constraint report as JSON.
    #[arg(long)]
    pub report_out: Option<PathBuf>,

    /// Write the submission template as CSV.
    #[arg(long)]
    pub submission_out: Option<PathBuf>,
}

/// Arguments for the `select` subcommand.
#[derive(Parser, Debug)]
pub struct SelectArgs {
    #[command(flatten)]
    pub pool: PoolArgs,

    #[command(flatten)]
    pub constraints: ConstraintArgs,

    #[command(flatten)]
    pub output: FleetOutputArgs,

    /// Write the decision log as CSV.
    #[arg(long)]
    pub log_out: Option<PathBuf>,

    /// Print every decision, not just the summary.
    #[arg(long)]
    pub explain: bool,
}

/// Arguments for the `optimize` subcommand.
#[derive(Parser, Debug)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub pool: PoolArgs,

    #[command(flatten)]
    pub constraints: ConstraintArgs,

    #[command(flatten)]
    pub exact: ExactArgs,

    #[command(flatten)]
    pub output: FleetOutputArgs,
}

/// Arguments for the `compare` subcommand.
#[derive(Parser, Debug)]
pub struct CompareArgs {
    #[command(flatten)]
    pub pool: PoolArgs,

    #[command(flatten)]
    pub constraints: ConstraintArgs,

    #[command(flatten)]
    pub exact: ExactArgs,

    /// Write both results as JSON.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Arguments for the `frontier` subcommand.
#[derive(Parser, Debug)]
pub struct FrontierArgs {
    #[command(flatten)]
    pub pool: PoolArgs,

    /// Minimum total deadweight tonnage.
    #[arg(long)]
    pub cargo: Option<f64>,

    /// Comma-separated safety floors [default: configured grid].
    #[arg(long, value_delimiter = ',')]
    pub levels: Option<Vec<f64>>,

    /// Select at most this many vessels at every point.
    #[arg(long)]
    pub max_fleet_size: Option<usize>,

    /// Solver time limit in seconds per point.
    #[arg(long)]
    pub time_limit: Option<u64>,

    /// Write the rows as CSV.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Arguments for the `fleet-sizes` subcommand.
#[derive(Parser, Debug)]
pub struct FleetSizesArgs {
    #[command(flatten)]
    pub pool: PoolArgs,

    #[command(flatten)]
    pub constraints: ConstraintArgs,

    /// Comma-separated fleet sizes [default: configured range].
    #[arg(long, value_delimiter = ',')]
    pub sizes: Option<Vec<usize>>,

    /// Solver time limit in seconds per point.
    #[arg(long)]
    pub time_limit: Option<u64>,

    /// Write the rows as CSV.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Arguments for the `dominate` subcommand.
#[derive(Parser, Debug)]
pub struct DominateArgs {
    #[command(flatten)]
    pub pool: PoolArgs,

    #[command(flatten)]
    pub constraints: ConstraintArgs,

    /// Safety increment between targets [default: configured step].
    #[arg(long)]
    pub step: Option<f64>,

    /// Solver time limit in seconds per target.
    #[arg(long)]
    pub time_limit: Option<u64>,

    /// Write the rows as CSV.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Arguments for the `claim` subcommand.
#[derive(Parser, Debug)]
pub struct ClaimArgs {
    #[command(flatten)]
    pub pool: PoolArgs,

    /// Minimum total deadweight tonnage.
    #[arg(long)]
    pub cargo: Option<f64>,

    /// Claimed fleet size [default: configured claim].
    #[arg(long)]
    pub fleet_size: Option<usize>,

    /// Claimed mean safety [default: configured claim].
    #[arg(long)]
    pub min_safety: Option<f64>,

    /// Claimed total cost [default: configured claim].
    #[arg(long)]
    pub max_cost: Option<f64>,

    /// Solver time limit in seconds per solve.
    #[arg(long)]
    pub time_limit: Option<u64>,

    /// Write the check as JSON.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "fleetsel", "select", "pool.csv", "--json", "-vv", "--config", "x.toml",
        ]);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        match cli.command {
            Commands::Select(args) => assert_eq!(args.pool.vessels, PathBuf::from("pool.csv")),
            other => panic!("expected select, got {other:?}"),
        }
    }

    #[test]
    fn frontier_levels_are_comma_separated() {
        let cli = Cli::parse_from(["fleetsel", "frontier", "pool.csv", "--levels", "3.0,3.5,4"]);
        match cli.command {
            Commands::Frontier(args) => assert_eq!(args.levels, Some(vec![3.0, 3.5, 4.0])),
            other => panic!("expected frontier, got {other:?}"),
        }
    }

    #[test]
    fn fixed_and_max_fleet_size_conflict() {
        let result = Cli::try_parse_from([
            "fleetsel",
            "optimize",
            "pool.csv",
            "--fleet-size",
            "3",
            "--max-fleet-size",
            "4",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn fleet_sizes_is_kebab_case() {
        let cli = Cli::parse_from(["fleetsel", "fleet-sizes", "pool.csv", "--sizes", "2,3"]);
        assert!(matches!(cli.command, Commands::FleetSizes(_)));
    }

    #[test]
    fn color_choice_maps_to_override() {
        assert_eq!(ColorChoice::Auto.forced(), None);
        assert_eq!(ColorChoice::Never.forced(), Some(false));
    }
}
