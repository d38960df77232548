//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use crate::adapter::inbound::cli::{operator, output};
use crate::error::{ConfigError, Result};

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note(&format!(
        "2. Run: fleetsel -c {} config validate",
        path.display()
    ));
    output::note(&format!(
        "3. Run: fleetsel -c {} select vessels.csv",
        path.display()
    ));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: Option<&Path>, config_toml: Option<&str>) -> Result<()> {
    let config = operator::operator().show_config(config_toml)?;

    output::section("Effective Configuration");
    match path {
        Some(path) => output::field("Source", path.display()),
        None => output::field("Source", output::muted("built-in defaults")),
    }
    output::field("Log level", &config.log_level);
    output::field("Log format", &config.log_format);

    output::section("Selection");
    output::field(
        "Cargo",
        format!("{:.0} t", config.selection.cargo_requirement),
    );
    output::field("Min safety", format!("{:.2}", config.selection.min_safety));
    match &config.selection.required_fuel_types {
        Some(types) => output::field("Fuel types", types.join(", ")),
        None => output::field("Fuel types", "every type in the pool"),
    }

    output::section("Solver");
    output::field("Backend", &config.solver_backend);
    output::field("Time limit", format!("{}s", config.time_limit_secs));

    output::section("Fuel Types");
    for (raw, canonical) in &config.fuel_aliases {
        output::note(&format!("{raw} -> {canonical}"));
    }
    if !config.known_fuel_types.is_empty() {
        output::field("Known", config.known_fuel_types.join(", "));
    }

    output::section("Frontier");
    let levels: Vec<String> = config
        .frontier
        .safety_levels
        .iter()
        .map(|l| format!("{l:.1}"))
        .collect();
    output::field("Safety levels", levels.join(", "));
    output::field(
        "Max fleet size",
        config
            .frontier
            .max_fleet_size
            .map_or_else(|| "unbounded".to_string(), |n| n.to_string()),
    );
    match (
        config.frontier.fleet_sizes.first(),
        config.frontier.fleet_sizes.last(),
    ) {
        (Some(lo), Some(hi)) => output::field("Fleet sizes", format!("{lo}..={hi}")),
        _ => output::field("Fleet sizes", "-"),
    }
    output::field(
        "Size sweep safety",
        format!("{:.2}", config.frontier.fleet_size_safety),
    );
    output::field(
        "Domination step",
        format!("{:.2}", config.frontier.domination_step),
    );

    output::section("Claim");
    output::field("Fleet size", config.claim_fleet_size);
    output::field("Min safety", format!("{:.2}", config.claim_min_safety));
    output::field("Max cost", format!("{:.2}", config.claim_max_cost));

    output::section("Submission");
    output::field("Team", &config.team_name);
    output::field("Category", &config.category);

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: Option<&Path>, config_toml: Option<&str>) -> Result<()> {
    let (Some(path), Some(config_toml)) = (path, config_toml) else {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "no config file found; pass -c <path> or run `fleetsel config init`"
                .to_string(),
        }
        .into());
    };

    output::section("Config Validation");
    output::field("Path", path.display());
    let validation = operator::operator().validate_config(config_toml)?;
    output::success("Config file is valid");

    if !validation.warnings.is_empty() {
        output::section("Warnings");
        for warning in &validation.warnings {
            output::warning(warning);
        }
    }

    output::field(
        "Next",
        format!("fleetsel -c {} config show", path.display()),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_temp_dir() -> TempDir {
        tempfile::tempdir().expect("Failed to create temp directory")
    }

    #[test]
    fn test_config_template_is_valid_toml() {
        let result: std::result::Result<toml::Value, _> = toml::from_str(CONFIG_TEMPLATE);
        assert!(result.is_ok(), "CONFIG_TEMPLATE is not valid TOML");
    }

    #[test]
    fn test_config_template_names_every_section() {
        for section in [
            "[logging]",
            "[selection]",
            "[solver]",
            "[pool]",
            "[frontier]",
            "[claim]",
            "[submission]",
        ] {
            assert!(CONFIG_TEMPLATE.contains(section), "missing {section}");
        }
    }

    #[test]
    fn test_execute_init_writes_template_content() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");

        execute_init(&config_path, false).unwrap();
        let content = fs::read_to_string(&config_path).unwrap();
        assert_eq!(content, CONFIG_TEMPLATE);
    }

    #[test]
    fn test_execute_init_creates_parent_directories() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        execute_init(&config_path, false).unwrap();
        assert!(config_path.exists());
    }

    #[test]
    fn test_execute_init_fails_if_file_exists_without_force() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "existing content").unwrap();

        let error = execute_init(&config_path, false).unwrap_err();
        assert!(error.to_string().contains("--force"));

        let content = fs::read_to_string(&config_path).unwrap();
        assert_eq!(content, "existing content");
    }

    #[test]
    fn test_execute_init_overwrites_with_force() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "existing content").unwrap();

        execute_init(&config_path, true).unwrap();
        let content = fs::read_to_string(&config_path).unwrap();
        assert_eq!(content, CONFIG_TEMPLATE);
    }

    #[test]
    fn test_execute_validate_requires_a_file() {
        let error = execute_validate(None, None).unwrap_err();
        assert!(error.to_string().contains("config init"));
    }
}
