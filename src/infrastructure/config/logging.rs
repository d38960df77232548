//! Logging configuration and initialization.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// `pretty` or `json`.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "warn".into()
}

fn default_format() -> String {
    "pretty".into()
}

/// Formats accepted by [`LoggingConfig::init`].
pub const LOG_FORMATS: &[&str] = &["pretty", "json"];

impl LoggingConfig {
    /// Level after applying `-v` flags: one step per flag, capped at `trace`.
    #[must_use]
    pub fn effective_level(&self, verbosity: u8) -> String {
        match verbosity {
            0 => self.level.clone(),
            1 => "info".into(),
            2 => "debug".into(),
            _ => "trace".into(),
        }
    }

    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// Logs go to stderr so stdout stays reserved for command output.
    /// `RUST_LOG`, when set, overrides the configured level.
    pub fn init(&self, verbosity: u8) {
        let level = self.effective_level(verbosity);
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

        let result = match self.format.as_str() {
            "json" => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };
        if result.is_err() {
            tracing::debug!("Tracing subscriber already installed");
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}
