//! Configuration operator implementation.

use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::operator::configuration::{
    ConfigFrontier, ConfigSelection, ConfigValidationReport, ConfigView, ConfigurationOperator,
};

use super::entry::Operator;
use super::shared::load_config;

/// Time limits above this are legal but probably a typo.
const LONG_TIME_LIMIT_SECS: u64 = 3600;

impl ConfigurationOperator for Operator {
    fn show_config(&self, config_toml: Option<&str>) -> Result<ConfigView> {
        let config = load_config(config_toml)?;

        Ok(ConfigView {
            log_level: config.logging.level.clone(),
            log_format: config.logging.format.clone(),
            selection: ConfigSelection {
                cargo_requirement: config.selection.cargo_requirement,
                min_safety: config.selection.min_safety,
                required_fuel_types: (!config.selection.require_all_fuel_types)
                    .then(|| config.selection.required_fuel_types.clone()),
            },
            solver_backend: config.solver.backend.to_string(),
            time_limit_secs: config.solver.time_limit_secs,
            fuel_aliases: config
                .pool
                .fuel_aliases
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            known_fuel_types: config.pool.known_fuel_types.clone(),
            frontier: ConfigFrontier {
                safety_levels: config.frontier.safety_levels(),
                max_fleet_size: config.frontier.max_fleet_size,
                fleet_sizes: config.frontier.fleet_sizes(),
                fleet_size_safety: config.frontier.fleet_size_safety,
                domination_step: config.frontier.domination_step,
            },
            claim_fleet_size: config.claim.fleet_size,
            claim_min_safety: config.claim.min_safety,
            claim_max_cost: config.claim.max_cost,
            team_name: config.submission.team_name,
            category: config.submission.category,
        })
    }

    fn validate_config(&self, config_toml: &str) -> Result<ConfigValidationReport> {
        let config = Config::parse_toml(config_toml)?;
        let mut warnings = Vec::new();

        if config.selection.require_all_fuel_types
            && !config.selection.required_fuel_types.is_empty()
        {
            warnings.push(
                "selection.required_fuel_types is ignored while require_all_fuel_types = true"
                    .to_string(),
            );
        }

        for (alias, canonical) in &config.pool.fuel_aliases {
            if !config.pool.known_fuel_types.is_empty()
                && !config.pool.known_fuel_types.contains(canonical)
            {
                warnings.push(format!(
                    "fuel alias '{alias}' maps to '{canonical}', which is not a known fuel type"
                ));
            }
        }

        if config.solver.time_limit_secs > LONG_TIME_LIMIT_SECS {
            warnings.push(format!(
                "solver.time_limit_secs = {} exceeds one hour per solve",
                config.solver.time_limit_secs
            ));
        }

        if config.frontier.safety_levels().len() < 2 {
            warnings.push("frontier safety grid has fewer than two levels".to_string());
        }

        if config.submission.team_name == "YourTeamName" {
            warnings.push("submission.team_name is still the placeholder".to_string());
        }

        Ok(ConfigValidationReport { warnings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::config::SCENARIO_TOML;

    #[test]
    fn show_defaults_without_file() {
        let view = Operator::new().show_config(None).unwrap();
        assert_eq!(view.solver_backend, "highs");
        assert_eq!(view.time_limit_secs, 120);
        assert!(view.selection.required_fuel_types.is_none());
        assert_eq!(view.frontier.fleet_sizes.first(), Some(&18));
        assert_eq!(view.claim_fleet_size, 22);
    }

    #[test]
    fn scenario_config_is_clean() {
        let report = Operator::new().validate_config(SCENARIO_TOML).unwrap();
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    }

    #[test]
    fn warns_on_placeholder_and_unknown_alias_target() {
        let report = Operator::new()
            .validate_config(
                r#"
                [pool]
                known_fuel_types = ["LNG"]

                [pool.fuel_aliases]
                "DISTILLATE FUEL" = "Distillate fuel"
                "#,
            )
            .unwrap();

        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings[0].contains("DISTILLATE FUEL"));
        assert!(report.warnings[1].contains("placeholder"));
    }
}
