//! Feasibility check for a claimed `(fleet size, safety, cost)` point.
//!
//! Three exact solves answer three questions:
//!
//! 1. Is the claim itself feasible (all three bounds)?
//! 2. What is the cheapest fleet at the claimed size and safety?
//! 3. What is the cheapest fleet at the claimed safety, any size?

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::application::selection::exact::ExactSelector;
use crate::domain::pool::VesselPool;
use crate::domain::problem::{FleetSize, SelectionProblem};
use crate::error::Result;

/// A claimed fleet operating point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClaimTarget {
    pub fleet_size: usize,
    pub min_safety: f64,
    pub max_cost: f64,
}

/// Answer to a claim check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimCheck {
    pub target_fleet_size: usize,
    pub target_safety: f64,
    pub target_cost: f64,
    /// Whether a fleet meets all three claimed bounds at once.
    pub exact_claim_feasible: bool,
    pub best_cost_at_target: Option<f64>,
    pub best_safety_at_target: Option<f64>,
    pub best_fleet_size: Option<usize>,
    /// Best achievable cost at the claimed size minus the claimed cost.
    pub gap_to_claim: Option<f64>,
    pub gap_pct: Option<f64>,
    pub min_cost_any_size: Option<f64>,
    pub fleet_size_at_min_cost: Option<usize>,
    pub safety_at_min_cost: Option<f64>,
    pub note: Option<String>,
}

/// Check `target` against `pool`.
///
/// Capacity and fuel coverage come from `base`; its own fleet-size bound and
/// cost ceiling are replaced by the claim's.
///
/// # Errors
///
/// Returns a domain error if the claimed safety is outside the scale.
pub fn check_claim(
    selector: &ExactSelector,
    pool: &VesselPool,
    base: &SelectionProblem,
    target: ClaimTarget,
) -> Result<ClaimCheck> {
    info!(
        fleet_size = target.fleet_size,
        min_safety = target.min_safety,
        max_cost = target.max_cost,
        "Checking claim"
    );

    let at_safety = base
        .clone()
        .with_min_safety(target.min_safety)?
        .with_fleet_size(FleetSize::Unbounded)
        .with_max_cost(None);
    let at_size = at_safety
        .clone()
        .with_fleet_size(FleetSize::Exactly(target.fleet_size));
    let constrained = at_size.clone().with_max_cost(Some(target.max_cost));

    let constrained = selector.solve_labeled(pool, &constrained, "claim_check_constrained");
    let best = selector.solve_labeled(pool, &at_size, "claim_check_best");
    let any_size = selector.solve_labeled(pool, &at_safety, "claim_check_any_size");

    let mut check = ClaimCheck {
        target_fleet_size: target.fleet_size,
        target_safety: target.min_safety,
        target_cost: target.max_cost,
        exact_claim_feasible: constrained.is_optimal(),
        best_cost_at_target: None,
        best_safety_at_target: None,
        best_fleet_size: None,
        gap_to_claim: None,
        gap_pct: None,
        min_cost_any_size: None,
        fleet_size_at_min_cost: None,
        safety_at_min_cost: None,
        note: None,
    };

    match best.report() {
        Some(report) => {
            let gap = report.total_cost - target.max_cost;
            check.best_cost_at_target = Some(report.total_cost);
            check.best_safety_at_target = Some(report.avg_safety);
            check.best_fleet_size = Some(report.fleet_size);
            check.gap_to_claim = Some(gap);
            check.gap_pct = (target.max_cost != 0.0).then(|| gap / target.max_cost * 100.0);
        }
        None => {
            check.note = Some(format!(
                "Infeasible even without cost ceiling at fleet_size={}",
                target.fleet_size
            ));
        }
    }

    if let Some(report) = any_size.report() {
        check.min_cost_any_size = Some(report.total_cost);
        check.fleet_size_at_min_cost = Some(report.fleet_size);
        check.safety_at_min_cost = Some(report.avg_safety);
    }

    info!(
        feasible = check.exact_claim_feasible,
        best_cost = ?check.best_cost_at_target,
        gap = ?check.gap_to_claim,
        "Claim check complete"
    );
    Ok(check)
}
