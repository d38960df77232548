use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use fleetsel::error::{ConfigError, Error};
use fleetsel::infrastructure::config::settings::Config;
use fleetsel::infrastructure::config::solver::SolverBackend;

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn write_temp_config(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!("fleetsel-config-test-{nanos}-{suffix}.toml"));
    fs::write(&path, contents).expect("write temp config");
    path
}

fn load(contents: &str) -> Result<Config, Error> {
    let path = write_temp_config(contents);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);
    result
}

#[test]
fn shipped_template_loads_cleanly() {
    let template = include_str!("../config.toml.example");
    let config = load(template).expect("template is a valid config");

    assert_eq!(config.solver.backend, SolverBackend::Highs);
    assert_eq!(config.claim.fleet_size, 22);
    assert_eq!(
        config.pool.fuel_aliases.get("DISTILLATE FUEL").map(String::as_str),
        Some("Distillate fuel")
    );
}

#[test]
fn empty_file_yields_defaults() {
    let config = load("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn config_rejects_out_of_scale_safety_floor() {
    let toml = r#"
[selection]
min_safety = 5.5
"#;

    match load(toml) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "selection.min_safety",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid safety floor error, got {err}"),
        Ok(config) => panic!(
            "Expected invalid safety floor to be rejected, got {}",
            config.selection.min_safety
        ),
    }
}

#[test]
fn config_rejects_missing_explicit_fuel_types() {
    let toml = r#"
[selection]
require_all_fuel_types = false
"#;

    assert!(
        matches!(
            load(toml),
            Err(Error::Config(ConfigError::MissingField {
                field: "selection.required_fuel_types"
            }))
        ),
        "Expected an empty explicit fuel type list to be rejected"
    );
}

#[test]
fn config_rejects_zero_time_limit() {
    let toml = r#"
[solver]
time_limit_secs = 0
"#;

    assert!(matches!(
        load(toml),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "solver.time_limit_secs",
            ..
        }))
    ));
}

#[test]
fn config_rejects_unknown_backend() {
    let toml = r#"
[solver]
backend = "cplex"
"#;

    assert!(matches!(
        load(toml),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn config_rejects_inverted_fleet_size_range() {
    let toml = r#"
[frontier]
fleet_size_min = 10
fleet_size_max = 5
"#;

    assert!(matches!(
        load(toml),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "frontier.fleet_size_max",
            ..
        }))
    ));
}

#[test]
fn config_rejects_unknown_sensitivity_answer() {
    let toml = r#"
[submission]
sensitivity = "Maybe"
"#;

    assert!(matches!(
        load(toml),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "submission.sensitivity",
            ..
        }))
    ));
}

#[test]
fn missing_file_is_a_read_error() {
    let result = Config::load("/definitely/not/here/config.toml");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}
