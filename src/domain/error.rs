//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! These errors are returned by `try_new` constructors that validate inputs.
//!
//! # Examples
//!
//! Handling validation errors:
//!
//! ```
//! use fleetsel::domain::error::DomainError;
//! use fleetsel::domain::vessel::VesselRecord;
//!
//! // Safety scores outside 1..=5 fail validation
//! let result = VesselRecord::try_new("v-1", 50_000.0, 7, "LNG", 1_000_000.0);
//!
//! assert!(matches!(result, Err(DomainError::SafetyScoreOutOfRange { .. })));
//! ```

use thiserror::Error;

use super::id::VesselId;

/// Errors that occur when domain invariants are violated.
///
/// These errors are returned by `try_new` constructors and other methods
/// that validate domain rules.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A required attribute was absent in the upstream table.
    #[error("vessel {vessel_id}: missing required field {field}")]
    MissingField {
        /// The vessel whose record is incomplete.
        vessel_id: VesselId,
        /// The missing column.
        field: &'static str,
    },

    /// Deadweight tonnage must be a positive, finite number.
    #[error("vessel {vessel_id}: dwt must be positive, got {dwt}")]
    NonPositiveDwt {
        /// The offending vessel.
        vessel_id: VesselId,
        /// The invalid dwt that was provided.
        dwt: f64,
    },

    /// Adjusted cost must be finite and non-negative.
    #[error("vessel {vessel_id}: adjusted cost must be finite and >= 0, got {cost}")]
    InvalidCost {
        /// The offending vessel.
        vessel_id: VesselId,
        /// The invalid cost that was provided.
        cost: f64,
    },

    /// Safety scores are integers in 1..=5.
    #[error("vessel {vessel_id}: safety score must be an integer in 1..=5, got {score}")]
    SafetyScoreOutOfRange {
        /// The offending vessel.
        vessel_id: VesselId,
        /// The invalid score as read upstream.
        score: f64,
    },

    /// Fuel type label could not be mapped to a known category.
    #[error("vessel {vessel_id}: unmapped fuel type '{label}'")]
    UnmappedFuelType {
        /// The offending vessel.
        vessel_id: VesselId,
        /// The raw label.
        label: String,
    },

    /// Vessel ids are unique keys across the pool.
    #[error("duplicate vessel id {vessel_id} in pool")]
    DuplicateVesselId {
        /// The repeated id.
        vessel_id: VesselId,
    },

    /// Selection problem parameters are not usable.
    #[error("invalid selection problem: {field} {reason}")]
    InvalidProblem {
        /// Parameter name.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}
