//! Canonical test configurations.
//!
//! Single source of truth for config text used across tests, sized to the
//! scenario pool in [`super::domain`].

use crate::infrastructure::config::settings::Config;

/// TOML text that matches the scenario: requirement 2500 t, floor 3.0,
/// short sweeps, and a claim the scenario can answer.
pub const SCENARIO_TOML: &str = r#"
[selection]
cargo_requirement = 2500.0
min_safety = 3.0

[solver]
time_limit_secs = 5

[frontier]
safety_start = 3.0
safety_stop = 4.0
safety_step = 0.5
fleet_size_min = 1
fleet_size_max = 3
fleet_size_safety = 3.0
domination_step = 0.5

[claim]
fleet_size = 2
min_safety = 3.0
max_cost = 200.0

[submission]
team_name = "Tidewater"
"#;

/// Parsed [`SCENARIO_TOML`].
///
/// # Panics
///
/// Panics if the canned text stops parsing.
#[must_use]
pub fn scenario() -> Config {
    Config::parse_toml(SCENARIO_TOML).expect("scenario config parses")
}
