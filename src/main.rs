use std::process::ExitCode;

use clap::Parser;
use fleetsel::adapter::inbound::cli::command::Cli;
use fleetsel::adapter::inbound::cli::output::{self, OutputConfig};
use fleetsel::adapter::inbound::cli::{diagnostic, operator, run};
use fleetsel::infrastructure::config::settings::Config;
use fleetsel::infrastructure::operator::entry::Operator;
use tracing::debug;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));
    output::set_color(cli.color.forced());
    if operator::install(Box::new(Operator::new())).is_err() {
        output::error("operator already installed");
        return ExitCode::FAILURE;
    }

    let config_path = if run::reads_config(&cli.command) {
        operator::resolve_config_path(cli.config.as_deref())
    } else {
        None
    };
    let config_toml = match config_path.as_deref().map(operator::read_config_toml) {
        Some(Ok(content)) => Some(content),
        Some(Err(e)) => {
            output::error(&e.to_string());
            return ExitCode::FAILURE;
        }
        None => None,
    };

    // Broken configs still get default logging so the failure is reported
    // by the command below.
    config_toml
        .as_deref()
        .and_then(|content| Config::parse_toml(content).ok())
        .map(|config| config.logging)
        .unwrap_or_default()
        .init(cli.verbose);
    debug!(config = ?config_path, "fleetsel starting");

    match run::execute(&cli.command, config_path.as_deref(), config_toml.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let rendered = config_toml
                .as_deref()
                .and_then(|src| diagnostic::config_parse_diagnostic(&e, src));
            match rendered {
                Some(report) if !output::is_json() => {
                    eprintln!("{:?}", miette::Report::new(report));
                }
                _ => output::error(&e.to_string()),
            }
            ExitCode::FAILURE
        }
    }
}
