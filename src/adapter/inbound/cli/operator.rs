//! Inbound operator accessor for CLI handlers.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::{ConfigError, PoolError, Result};
use crate::port::inbound::operator::port::OperatorPort;

use super::paths;

static OPERATOR: OnceLock<Box<dyn OperatorPort>> = OnceLock::new();

/// Installs the operator implementation used by CLI handlers.
pub fn install(operator: Box<dyn OperatorPort>) -> std::result::Result<(), Box<dyn OperatorPort>> {
    OPERATOR.set(operator)
}

/// Returns the configured operator capability surface for CLI handlers.
///
/// # Panics
///
/// Panics if [`install`] was never called; `main` installs the operator
/// before dispatching any command.
#[must_use]
pub fn operator() -> &'static dyn OperatorPort {
    match OPERATOR.get() {
        Some(operator) => operator.as_ref(),
        None => panic!("CLI operator not installed; call cli::operator::install from main"),
    }
}

/// Config file to use: the explicit path, else the default one if present.
#[must_use]
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Some(paths::default_config()).filter(|path| path.is_file()),
    }
}

/// Load config TOML from disk for operator-facing use-cases.
pub fn read_config_toml(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile(e).into())
}

/// Load the vessel attribute table from disk.
pub fn read_vessel_table(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| {
        PoolError::Read {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let path = Path::new("somewhere/config.toml");
        assert_eq!(resolve_config_path(Some(path)), Some(path.to_path_buf()));
    }

    #[test]
    fn missing_table_is_a_pool_read_error() {
        let err = read_vessel_table(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.csv"));
    }
}
