//! Auditable decision log produced by the greedy strategy.
//!
//! Each [`SelectionDecision`] carries a structured [`DecisionDetail`] with the
//! numbers behind the decision, and a human-readable reason rendered from it.
//! The [`DecisionLog`] only supports appending; its order is decision order.

use std::fmt;

use serde::Serialize;

use super::id::VesselId;

/// What happened to a vessel (or to a fuel type, for errors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionAction {
    Selected,
    Rejected,
    Error,
}

impl DecisionAction {
    /// Stable lowercase name used in exports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Selected => "selected",
            Self::Rejected => "rejected",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for DecisionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Greedy phase that produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPhase {
    Seed,
    Fill,
    SafetyRecovery,
}

impl SelectionPhase {
    /// Stable lowercase name used in exports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Seed => "seed",
            Self::Fill => "fill",
            Self::SafetyRecovery => "safety_recovery",
        }
    }
}

impl fmt::Display for SelectionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric justification of a decision.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecisionDetail {
    /// No eligible vessel of a required fuel type exists.
    FuelTypeUnavailable { fuel_type: String },

    /// Cheapest-per-tonne representative of a fuel type.
    FuelRepresentative {
        fuel_type: String,
        cost_per_dwt: f64,
        safety_score: u8,
        dwt: f64,
    },

    /// Vessel accepted while filling capacity.
    ValueFill {
        value_metric: f64,
        running_dwt: f64,
        cargo_requirement: f64,
        running_safety: f64,
    },

    /// Rejected: the mean would dip and even all-5 additions cannot recover it.
    UnrecoverableSafety {
        tentative_safety: f64,
        projected_safety: f64,
        estimated_additions: usize,
    },

    /// Rejected: the vessel would complete capacity with the mean below floor.
    FinalVesselBelowFloor { tentative_safety: f64 },

    /// High-safety vessel added to lift the fleet mean.
    SafetyLift { safety_score: u8, running_safety: f64 },
}

impl fmt::Display for DecisionDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FuelTypeUnavailable { fuel_type } => {
                write!(f, "No vessels available for fuel type {fuel_type}")
            }
            Self::FuelRepresentative {
                fuel_type,
                cost_per_dwt,
                safety_score,
                dwt,
            } => write!(
                f,
                "Fuel-type representative for {fuel_type}. cost_per_dwt=${cost_per_dwt:.2}, \
                 safety={safety_score}, dwt={dwt:.0}"
            ),
            Self::ValueFill {
                value_metric,
                running_dwt,
                cargo_requirement,
                running_safety,
            } => write!(
                f,
                "Value={value_metric:.6} DWT/$, running DWT={running_dwt:.0}/{cargo_requirement:.0}, \
                 safety_avg={running_safety:.2}."
            ),
            Self::UnrecoverableSafety {
                tentative_safety,
                projected_safety,
                ..
            } => write!(
                f,
                "Would drop safety avg to {tentative_safety:.2} with poor recovery prospect \
                 ({projected_safety:.2})."
            ),
            Self::FinalVesselBelowFloor { tentative_safety } => write!(
                f,
                "Would drop safety avg to {tentative_safety:.2} with this as final vessel."
            ),
            Self::SafetyLift {
                safety_score,
                running_safety,
            } => write!(
                f,
                "High-safety vessel (score={safety_score}) to raise fleet avg to {running_safety:.2}."
            ),
        }
    }
}

/// One entry of the decision log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionDecision {
    vessel_id: Option<VesselId>,
    action: DecisionAction,
    phase: SelectionPhase,
    reason: String,
    detail: DecisionDetail,
}

impl SelectionDecision {
    /// Create a decision; the reason text is rendered from `detail`.
    #[must_use]
    pub fn new(
        vessel_id: Option<VesselId>,
        action: DecisionAction,
        phase: SelectionPhase,
        detail: DecisionDetail,
    ) -> Self {
        Self {
            vessel_id,
            action,
            phase,
            reason: detail.to_string(),
            detail,
        }
    }

    /// Vessel concerned, or `None` for pool-wide errors.
    #[must_use]
    pub const fn vessel_id(&self) -> Option<&VesselId> {
        self.vessel_id.as_ref()
    }

    #[must_use]
    pub const fn action(&self) -> DecisionAction {
        self.action
    }

    #[must_use]
    pub const fn phase(&self) -> SelectionPhase {
        self.phase
    }

    /// Human-readable rationale.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Structured rationale.
    #[must_use]
    pub const fn detail(&self) -> &DecisionDetail {
        &self.detail
    }
}

/// Append-only, ordered decision log.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DecisionLog {
    entries: Vec<SelectionDecision>,
}

impl DecisionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a decision at the end of the log.
    pub fn push(&mut self, decision: SelectionDecision) {
        self.entries.push(decision);
    }

    /// All decisions in the order they were taken.
    #[must_use]
    pub fn entries(&self) -> &[SelectionDecision] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectionDecision> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decisions taken in one phase, in order.
    pub fn in_phase(&self, phase: SelectionPhase) -> impl Iterator<Item = &SelectionDecision> {
        self.entries.iter().filter(move |d| d.phase == phase)
    }
}

impl<'a> IntoIterator for &'a DecisionLog {
    type Item = &'a SelectionDecision;
    type IntoIter = std::slice::Iter<'a, SelectionDecision>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
