//! Command dispatch.

use std::path::Path;

use crate::adapter::inbound::cli::command::{Commands, ConfigCommand};
use crate::adapter::inbound::cli::{claim, config, frontier, select};
use crate::error::Result;

/// Execute a parsed command.
///
/// `config_path` is the resolved config file, if any, and `config_toml`
/// its contents; both are `None` when running on built-in defaults.
pub fn execute(
    command: &Commands,
    config_path: Option<&Path>,
    config_toml: Option<&str>,
) -> Result<()> {
    match command {
        Commands::Select(args) => select::execute_select(args, config_toml),
        Commands::Optimize(args) => select::execute_optimize(args, config_toml),
        Commands::Compare(args) => select::execute_compare(args, config_toml),
        Commands::Frontier(args) => frontier::execute_frontier(args, config_toml),
        Commands::FleetSizes(args) => frontier::execute_fleet_sizes(args, config_toml),
        Commands::Dominate(args) => frontier::execute_dominate(args, config_toml),
        Commands::Claim(args) => claim::execute_claim(args, config_toml),
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Show) => config::execute_show(config_path, config_toml),
        Commands::Config(ConfigCommand::Validate) => {
            config::execute_validate(config_path, config_toml)
        }
    }
}

/// Whether `command` reads the config file before running.
#[must_use]
pub const fn reads_config(command: &Commands) -> bool {
    !matches!(command, Commands::Config(ConfigCommand::Init(_)))
}
