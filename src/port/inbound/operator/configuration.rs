//! Configuration projections for operator-facing adapters.

use crate::error::Result;

/// Selection section of a configuration view.
#[derive(Debug, Clone)]
pub struct ConfigSelection {
    pub cargo_requirement: f64,
    pub min_safety: f64,
    /// `None` when every fuel type in the pool is required.
    pub required_fuel_types: Option<Vec<String>>,
}

/// Sweep section of a configuration view.
#[derive(Debug, Clone)]
pub struct ConfigFrontier {
    pub safety_levels: Vec<f64>,
    pub max_fleet_size: Option<usize>,
    pub fleet_sizes: Vec<usize>,
    pub fleet_size_safety: f64,
    pub domination_step: f64,
}

/// Full configuration projection for operator-facing output.
#[derive(Debug, Clone)]
pub struct ConfigView {
    pub log_level: String,
    pub log_format: String,
    pub selection: ConfigSelection,
    pub solver_backend: String,
    pub time_limit_secs: u64,
    pub fuel_aliases: Vec<(String, String)>,
    pub known_fuel_types: Vec<String>,
    pub frontier: ConfigFrontier,
    pub claim_fleet_size: usize,
    pub claim_min_safety: f64,
    pub claim_max_cost: f64,
    pub team_name: String,
    pub category: String,
}

/// Validation output for `config validate`.
#[derive(Debug, Clone, Default)]
pub struct ConfigValidationReport {
    pub warnings: Vec<String>,
}

/// Configuration use-cases for operator-facing adapters.
pub trait ConfigurationOperator: Send + Sync {
    /// Build a projection for `config show`; `None` shows the defaults.
    fn show_config(&self, config_toml: Option<&str>) -> Result<ConfigView>;

    /// Validate config and return non-fatal warnings.
    fn validate_config(&self, config_toml: &str) -> Result<ConfigValidationReport>;
}
