//! Path utilities for fleetsel.
//!
//! User-level settings live under `~/.fleetsel/`:
//! - `~/.fleetsel/config.toml` - default configuration

use std::path::PathBuf;

/// Returns the fleetsel home directory (`~/.fleetsel/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".fleetsel")
}

/// Returns the default config file path (`~/.fleetsel/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
