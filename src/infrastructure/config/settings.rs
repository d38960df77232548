//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings. Every
//! section is optional; an empty file yields the built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use fleetsel::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging(0);
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::experiment::{ClaimConfig, FrontierConfig, SubmissionConfig};
use super::logging::{LoggingConfig, LOG_FORMATS};
use super::pool::PoolConfig;
use super::selection::SelectionConfig;
use super::solver::SolverConfig;
use crate::domain::vessel::MAX_SAFETY_SCORE;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Default constraint set.
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Exact solver backend and time limit.
    #[serde(default)]
    pub solver: SolverConfig,

    /// Fuel label normalisation applied while screening the pool.
    #[serde(default)]
    pub pool: PoolConfig,

    /// Sweep grids.
    #[serde(default)]
    pub frontier: FrontierConfig,

    /// Claimed operating point for `claim`.
    #[serde(default)]
    pub claim: ClaimConfig,

    /// Submission template metadata.
    #[serde(default)]
    pub submission: SubmissionConfig,
}

fn invalid(field: &'static str, reason: &str) -> crate::error::Error {
    ConfigError::InvalidValue {
        field,
        reason: reason.to_string(),
    }
    .into()
}

fn in_safety_scale(value: f64) -> bool {
    value.is_finite() && (0.0..=f64::from(MAX_SAFETY_SCORE)).contains(&value)
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(invalid("logging.format", "must be one of: pretty, json"));
        }

        let selection = &self.selection;
        if !selection.cargo_requirement.is_finite() || selection.cargo_requirement < 0.0 {
            return Err(invalid(
                "selection.cargo_requirement",
                "must be a finite number >= 0",
            ));
        }
        if !in_safety_scale(selection.min_safety) {
            return Err(invalid("selection.min_safety", "must be between 0 and 5"));
        }
        if !selection.require_all_fuel_types && selection.required_fuel_types.is_empty() {
            return Err(ConfigError::MissingField {
                field: "selection.required_fuel_types",
            }
            .into());
        }

        if self.solver.time_limit_secs == 0 {
            return Err(invalid("solver.time_limit_secs", "must be greater than 0"));
        }

        let frontier = &self.frontier;
        if !in_safety_scale(frontier.safety_start) || !in_safety_scale(frontier.safety_stop) {
            return Err(invalid(
                "frontier.safety_start",
                "safety range must lie between 0 and 5",
            ));
        }
        if frontier.safety_stop < frontier.safety_start {
            return Err(invalid("frontier.safety_stop", "must be >= safety_start"));
        }
        if !(frontier.safety_step.is_finite() && frontier.safety_step > 0.0) {
            return Err(invalid("frontier.safety_step", "must be greater than 0"));
        }
        if frontier.fleet_size_min == 0 {
            return Err(invalid("frontier.fleet_size_min", "must be greater than 0"));
        }
        if frontier.fleet_size_max < frontier.fleet_size_min {
            return Err(invalid("frontier.fleet_size_max", "must be >= fleet_size_min"));
        }
        if frontier.max_fleet_size == Some(0) {
            return Err(invalid("frontier.max_fleet_size", "must be greater than 0"));
        }
        if !in_safety_scale(frontier.fleet_size_safety) {
            return Err(invalid(
                "frontier.fleet_size_safety",
                "must be between 0 and 5",
            ));
        }
        if !(frontier.domination_step.is_finite() && frontier.domination_step > 0.0) {
            return Err(invalid("frontier.domination_step", "must be greater than 0"));
        }

        if self.claim.fleet_size == 0 {
            return Err(invalid("claim.fleet_size", "must be greater than 0"));
        }
        if !in_safety_scale(self.claim.min_safety) {
            return Err(invalid("claim.min_safety", "must be between 0 and 5"));
        }
        if !(self.claim.max_cost.is_finite() && self.claim.max_cost > 0.0) {
            return Err(invalid("claim.max_cost", "must be greater than 0"));
        }

        if !matches!(self.submission.sensitivity.as_str(), "Yes" | "No") {
            return Err(invalid("submission.sensitivity", "must be Yes or No"));
        }

        Ok(())
    }

    /// Initialize logging based on configuration and `-v` count.
    pub fn init_logging(&self, verbosity: u8) {
        self.logging.init(verbosity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::infrastructure::config::selection::DEFAULT_CARGO_REQUIREMENT;
    use crate::infrastructure::config::solver::SolverBackend;

    fn field_of(err: Error) -> &'static str {
        match err {
            Error::Config(ConfigError::InvalidValue { field, .. }) => field,
            Error::Config(ConfigError::MissingField { field }) => field,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.selection.cargo_requirement, DEFAULT_CARGO_REQUIREMENT);
        assert_eq!(config.selection.min_safety, 3.0);
        assert!(config.selection.require_all_fuel_types);
        assert_eq!(config.solver.backend, SolverBackend::Highs);
        assert_eq!(config.solver.time_limit_secs, 120);
        assert_eq!(config.frontier.fleet_sizes(), (18..=26).collect::<Vec<_>>());
        assert_eq!(config.frontier.safety_levels().len(), 11);
        assert_eq!(config.claim.fleet_size, 22);
        assert_eq!(config.submission.team_name, "YourTeamName");
        assert_eq!(
            config.pool.catalog().resolve("DISTILLATE FUEL").as_deref(),
            Some("Distillate fuel")
        );
    }

    #[test]
    fn parses_sections() {
        let config = Config::parse_toml(
            r#"
            [logging]
            level = "debug"
            format = "json"

            [selection]
            cargo_requirement = 1000.0
            min_safety = 4.0
            require_all_fuel_types = false
            required_fuel_types = ["LNG", "Methanol"]

            [solver]
            time_limit_secs = 5

            [pool.fuel_aliases]
            "LIQUEFIED NATURAL GAS" = "LNG"

            [submission]
            team_name = "Tidewater"
            sensitivity = "No"
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.format, "json");
        assert_eq!(config.selection.min_safety, 4.0);
        assert_eq!(config.selection.required_fuel_types.len(), 2);
        assert_eq!(config.solver.time_limit().as_secs(), 5);
        assert_eq!(
            config.pool.catalog().resolve("LIQUEFIED NATURAL GAS").as_deref(),
            Some("LNG")
        );
        assert_eq!(config.submission.team_name, "Tidewater");
        assert_eq!(config.submission.category, "A");
    }

    #[test]
    fn rejects_out_of_scale_safety() {
        let err = Config::parse_toml("[selection]\nmin_safety = 6.0\n").unwrap_err();
        assert_eq!(field_of(err), "selection.min_safety");
    }

    #[test]
    fn rejects_explicit_fuel_list_when_empty() {
        let err =
            Config::parse_toml("[selection]\nrequire_all_fuel_types = false\n").unwrap_err();
        assert_eq!(field_of(err), "selection.required_fuel_types");
    }

    #[test]
    fn rejects_inverted_fleet_size_range() {
        let err = Config::parse_toml("[frontier]\nfleet_size_min = 10\nfleet_size_max = 5\n")
            .unwrap_err();
        assert_eq!(field_of(err), "frontier.fleet_size_max");
    }

    #[test]
    fn rejects_zero_time_limit() {
        let err = Config::parse_toml("[solver]\ntime_limit_secs = 0\n").unwrap_err();
        assert_eq!(field_of(err), "solver.time_limit_secs");
    }

    #[test]
    fn rejects_unknown_backend() {
        let err = Config::parse_toml("[solver]\nbackend = \"cplex\"\n").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = Config::parse_toml("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert_eq!(field_of(err), "logging.format");
    }
}
