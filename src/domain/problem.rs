//! Selection problem parameters.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::pool::VesselPool;
use super::vessel::MAX_SAFETY_SCORE;

/// Bound on the number of selected vessels.
///
/// Honoured by the exact strategy only. A fixed size and a maximum size are
/// mutually exclusive, which the enum makes unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "size")]
pub enum FleetSize {
    /// Any number of vessels.
    #[default]
    Unbounded,
    /// Exactly this many vessels.
    Exactly(usize),
    /// At most this many vessels.
    AtMost(usize),
}

impl FleetSize {
    /// Build a bound from the optional fixed/max pair used by callers.
    ///
    /// A fixed size takes precedence over a maximum.
    #[must_use]
    pub fn from_options(fixed: Option<usize>, max: Option<usize>) -> Self {
        match (fixed, max) {
            (Some(n), _) => Self::Exactly(n),
            (None, Some(n)) => Self::AtMost(n),
            (None, None) => Self::Unbounded,
        }
    }
}

impl fmt::Display for FleetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => write!(f, "unconstrained"),
            Self::Exactly(n) => write!(f, "fixed_{n}"),
            Self::AtMost(n) => write!(f, "max_{n}"),
        }
    }
}

/// Constraint set for one selection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionProblem {
    cargo_requirement: f64,
    min_safety: f64,
    required_fuel_types: BTreeSet<String>,
    #[serde(default)]
    fleet_size: FleetSize,
    #[serde(default)]
    max_cost: Option<f64>,
}

impl SelectionProblem {
    /// Create a problem with an explicit set of required fuel types.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidProblem`] if the cargo requirement is
    /// negative or non-finite, or the safety floor is outside `0..=5`.
    pub fn try_new(
        cargo_requirement: f64,
        min_safety: f64,
        required_fuel_types: BTreeSet<String>,
    ) -> Result<Self, DomainError> {
        if !cargo_requirement.is_finite() || cargo_requirement < 0.0 {
            return Err(DomainError::InvalidProblem {
                field: "cargo_requirement",
                reason: format!("must be finite and >= 0, got {cargo_requirement}"),
            });
        }
        if !min_safety.is_finite() || !(0.0..=f64::from(MAX_SAFETY_SCORE)).contains(&min_safety) {
            return Err(DomainError::InvalidProblem {
                field: "min_safety",
                reason: format!("must be within 0..=5, got {min_safety}"),
            });
        }
        Ok(Self {
            cargo_requirement,
            min_safety,
            required_fuel_types,
            fleet_size: FleetSize::Unbounded,
            max_cost: None,
        })
    }

    /// Create a problem that requires every fuel type present in the pool.
    ///
    /// # Errors
    ///
    /// See [`SelectionProblem::try_new`].
    pub fn for_pool(
        pool: &VesselPool,
        cargo_requirement: f64,
        min_safety: f64,
    ) -> Result<Self, DomainError> {
        Self::try_new(cargo_requirement, min_safety, pool.fuel_types())
    }

    /// Replace the required fuel types.
    #[must_use]
    pub fn with_required_fuel_types(mut self, required: BTreeSet<String>) -> Self {
        self.required_fuel_types = required;
        self
    }

    /// Replace the safety floor, keeping every other parameter.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidProblem`] for a floor outside `0..=5`.
    pub fn with_min_safety(self, min_safety: f64) -> Result<Self, DomainError> {
        let mut next = Self::try_new(
            self.cargo_requirement,
            min_safety,
            self.required_fuel_types,
        )?;
        next.fleet_size = self.fleet_size;
        next.max_cost = self.max_cost;
        Ok(next)
    }

    /// Set the fleet-size bound.
    #[must_use]
    pub fn with_fleet_size(mut self, fleet_size: FleetSize) -> Self {
        self.fleet_size = fleet_size;
        self
    }

    /// Set or clear the total cost ceiling.
    #[must_use]
    pub fn with_max_cost(mut self, max_cost: Option<f64>) -> Self {
        self.max_cost = max_cost;
        self
    }

    /// Minimum total deadweight tonnage.
    #[must_use]
    pub const fn cargo_requirement(&self) -> f64 {
        self.cargo_requirement
    }

    /// Minimum mean safety score.
    #[must_use]
    pub const fn min_safety(&self) -> f64 {
        self.min_safety
    }

    /// Fuel types that need at least one representative.
    #[must_use]
    pub const fn required_fuel_types(&self) -> &BTreeSet<String> {
        &self.required_fuel_types
    }

    /// Fleet-size bound (exact strategy only).
    #[must_use]
    pub const fn fleet_size(&self) -> FleetSize {
        self.fleet_size
    }

    /// Cost ceiling (exact strategy only).
    #[must_use]
    pub const fn max_cost(&self) -> Option<f64> {
        self.max_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_requirement() {
        let err = SelectionProblem::try_new(-1.0, 3.0, BTreeSet::new()).unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidProblem {
                field: "cargo_requirement",
                ..
            }
        ));
    }

    #[test]
    fn rejects_floor_above_scale() {
        let err = SelectionProblem::try_new(1.0, 5.5, BTreeSet::new()).unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidProblem {
                field: "min_safety",
                ..
            }
        ));
    }

    #[test]
    fn with_min_safety_keeps_bounds() {
        let problem = SelectionProblem::try_new(10.0, 3.0, BTreeSet::new())
            .unwrap()
            .with_fleet_size(FleetSize::Exactly(4))
            .with_max_cost(Some(99.0))
            .with_min_safety(4.2)
            .unwrap();
        assert_eq!(problem.min_safety(), 4.2);
        assert_eq!(problem.fleet_size(), FleetSize::Exactly(4));
        assert_eq!(problem.max_cost(), Some(99.0));
    }

    #[test]
    fn fixed_size_wins_over_max() {
        assert_eq!(
            FleetSize::from_options(Some(22), Some(30)),
            FleetSize::Exactly(22)
        );
        assert_eq!(FleetSize::from_options(None, Some(30)), FleetSize::AtMost(30));
        assert_eq!(FleetSize::from_options(None, None), FleetSize::Unbounded);
    }

    #[test]
    fn fleet_size_labels() {
        assert_eq!(FleetSize::Unbounded.to_string(), "unconstrained");
        assert_eq!(FleetSize::Exactly(22).to_string(), "fixed_22");
        assert_eq!(FleetSize::AtMost(9).to_string(), "max_9");
    }
}
