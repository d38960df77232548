//! Exact solver configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Available integer programming backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverBackend {
    /// HiGHS via good_lp.
    #[default]
    Highs,
}

impl std::fmt::Display for SolverBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Highs => f.write_str("highs"),
        }
    }
}

/// Exact solver settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    #[serde(default)]
    pub backend: SolverBackend,
    /// Wall-clock budget per solve (seconds).
    #[serde(default = "default_time_limit_secs")]
    pub time_limit_secs: u64,
}

const fn default_time_limit_secs() -> u64 {
    120
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            backend: SolverBackend::default(),
            time_limit_secs: default_time_limit_secs(),
        }
    }
}

impl SolverConfig {
    #[must_use]
    pub const fn time_limit(&self) -> Duration {
        Duration::from_secs(self.time_limit_secs)
    }
}
