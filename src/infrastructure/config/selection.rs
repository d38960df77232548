//! Selection problem configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::pool::VesselPool;
use crate::domain::problem::SelectionProblem;

/// Monthly cargo requirement in tonnes: 54.92 Mt annual bunker sales / 12.
pub const DEFAULT_CARGO_REQUIREMENT: f64 = 54.92e6 / 12.0;

/// Default constraint set for selection runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Minimum total deadweight tonnage.
    #[serde(default = "default_cargo_requirement")]
    pub cargo_requirement: f64,
    /// Minimum mean safety score (1-5 scale).
    #[serde(default = "default_min_safety")]
    pub min_safety: f64,
    /// Require one vessel of every fuel type present in the pool.
    #[serde(default = "default_require_all_fuel_types")]
    pub require_all_fuel_types: bool,
    /// Fuel types to cover when `require_all_fuel_types` is off.
    #[serde(default)]
    pub required_fuel_types: Vec<String>,
}

fn default_cargo_requirement() -> f64 {
    DEFAULT_CARGO_REQUIREMENT
}

const fn default_min_safety() -> f64 {
    3.0
}

const fn default_require_all_fuel_types() -> bool {
    true
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            cargo_requirement: default_cargo_requirement(),
            min_safety: default_min_safety(),
            require_all_fuel_types: default_require_all_fuel_types(),
            required_fuel_types: Vec::new(),
        }
    }
}

impl SelectionConfig {
    /// Fuel types a fleet drawn from `pool` must cover.
    #[must_use]
    pub fn required_fuel_types(&self, pool: &VesselPool) -> BTreeSet<String> {
        if self.require_all_fuel_types {
            pool.fuel_types()
        } else {
            self.required_fuel_types.iter().cloned().collect()
        }
    }

    /// Build the base problem for `pool`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidProblem`] for out-of-range values.
    pub fn problem_for(
        &self,
        pool: &VesselPool,
        cargo_requirement: f64,
        min_safety: f64,
    ) -> Result<SelectionProblem, DomainError> {
        SelectionProblem::try_new(cargo_requirement, min_safety, self.required_fuel_types(pool))
    }
}
