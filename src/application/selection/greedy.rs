//! Explainable greedy fleet selection.
//!
//! The heuristic runs three ordered phases that all append to one
//! [`DecisionLog`]:
//!
//! 1. **Seed**: one cheapest-per-tonne representative per required fuel type
//! 2. **Fill**: best capacity-per-dollar vessels until the cargo requirement
//!    is met, skipping vessels that would sink the safety mean beyond
//!    recovery
//! 3. **Safety recovery**: only when the mean is still below the floor and
//!    capacity is unmet, add high-safety vessels until both floors hold
//!
//! The fleet is then scored by the validator. Infeasibility is reported,
//! never raised.
//!
//! Candidate sequences are ranked once, up front, and never re-sorted; an
//! explicit set of selected ids decides membership.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::validator;
use crate::domain::decision::{
    DecisionAction, DecisionDetail, DecisionLog, SelectionDecision, SelectionPhase,
};
use crate::domain::id::VesselId;
use crate::domain::metrics;
use crate::domain::pool::VesselPool;
use crate::domain::problem::SelectionProblem;
use crate::domain::report::FleetResult;
use crate::domain::vessel::{VesselRecord, MAX_SAFETY_SCORE};

/// Lowest safety score admitted during safety recovery.
pub const RECOVERY_MIN_SAFETY: u8 = 4;

/// Result of one greedy run.
#[derive(Debug, Clone, Serialize)]
pub struct GreedyOutcome {
    /// Selected vessels, in pool order.
    pub fleet: Vec<VesselRecord>,
    /// Every decision, in the order it was taken.
    pub log: DecisionLog,
    /// Constraint report for `fleet`.
    pub report: FleetResult,
}

/// Greedy three-phase selection strategy.
///
/// Stateless; each call to [`GreedySelector::select`] owns its accumulators,
/// so one selector can serve any number of independent runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedySelector;

impl GreedySelector {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Select a fleet from `pool` for `problem`.
    ///
    /// Fleet-size and cost bounds on the problem are ignored; they apply to
    /// the exact strategy only.
    #[must_use]
    pub fn select(&self, pool: &VesselPool, problem: &SelectionProblem) -> GreedyOutcome {
        let mut run = GreedyRun::new(problem);

        // Ranked once: best capacity per dollar first, ties in pool order.
        let mut by_value: Vec<&VesselRecord> = pool.vessels().iter().collect();
        by_value.sort_by(|a, b| metrics::value_metric(b).total_cmp(&metrics::value_metric(a)));

        run.seed(pool);
        run.fill(&by_value);
        run.recover(&by_value);

        let fleet: Vec<VesselRecord> = pool
            .vessels()
            .iter()
            .filter(|v| run.fleet.contains(v.vessel_id()))
            .cloned()
            .collect();
        let report = validator::validate_for(problem, &fleet);

        info!(
            fleet_size = report.fleet_size,
            total_dwt = report.total_dwt,
            total_cost = report.total_cost,
            avg_safety = report.avg_safety,
            all_constraints_met = report.all_constraints_met,
            "Greedy selection complete"
        );

        GreedyOutcome {
            fleet,
            log: run.log,
            report,
        }
    }
}

/// Running totals of the fleet under construction.
#[derive(Debug, Default)]
struct RunningFleet {
    selected: HashSet<VesselId>,
    scores: Vec<u8>,
    dwt: f64,
    cost: f64,
}

impl RunningFleet {
    fn contains(&self, id: &VesselId) -> bool {
        self.selected.contains(id)
    }

    fn add(&mut self, vessel: &VesselRecord) {
        self.selected.insert(vessel.vessel_id().clone());
        self.scores.push(vessel.safety_score());
        self.dwt += vessel.dwt();
        self.cost += vessel.adjusted_cost();
    }

    fn average_safety(&self) -> f64 {
        metrics::fleet_average_safety(&self.scores)
    }

    /// Mean safety if `score` joined the fleet.
    fn tentative_safety(&self, score: u8) -> f64 {
        let mut scores = self.scores.clone();
        scores.push(score);
        metrics::fleet_average_safety(&scores)
    }

    fn score_sum(&self) -> f64 {
        self.scores.iter().map(|&s| f64::from(s)).sum()
    }
}

struct GreedyRun<'p> {
    problem: &'p SelectionProblem,
    fleet: RunningFleet,
    log: DecisionLog,
}

impl<'p> GreedyRun<'p> {
    fn new(problem: &'p SelectionProblem) -> Self {
        Self {
            problem,
            fleet: RunningFleet::default(),
            log: DecisionLog::new(),
        }
    }

    fn record(
        &mut self,
        vessel: Option<&VesselRecord>,
        action: DecisionAction,
        phase: SelectionPhase,
        detail: DecisionDetail,
    ) {
        let decision =
            SelectionDecision::new(vessel.map(|v| v.vessel_id().clone()), action, phase, detail);
        debug!(
            vessel_id = ?decision.vessel_id().map(VesselId::as_str),
            action = %decision.action(),
            phase = %decision.phase(),
            reason = decision.reason(),
            "Selection decision"
        );
        self.log.push(decision);
    }

    fn seed(&mut self, pool: &VesselPool) {
        let problem = self.problem;
        info!(
            fuel_types = problem.required_fuel_types().len(),
            "Seeding fleet with fuel-type representatives"
        );

        for fuel_type in problem.required_fuel_types() {
            let mut candidates: Vec<&VesselRecord> = pool
                .vessels()
                .iter()
                .filter(|v| v.fuel_type() == fuel_type && !self.fleet.contains(v.vessel_id()))
                .collect();
            candidates.sort_by(|a, b| seed_order(a, b));

            let Some(chosen) = candidates.first().copied() else {
                warn!(fuel_type = %fuel_type, "No candidates for required fuel type");
                self.record(
                    None,
                    DecisionAction::Error,
                    SelectionPhase::Seed,
                    DecisionDetail::FuelTypeUnavailable {
                        fuel_type: fuel_type.clone(),
                    },
                );
                continue;
            };

            self.fleet.add(chosen);
            self.record(
                Some(chosen),
                DecisionAction::Selected,
                SelectionPhase::Seed,
                DecisionDetail::FuelRepresentative {
                    fuel_type: fuel_type.clone(),
                    cost_per_dwt: metrics::cost_per_dwt(chosen),
                    safety_score: chosen.safety_score(),
                    dwt: chosen.dwt(),
                },
            );
        }

        info!(
            vessels = self.fleet.scores.len(),
            dwt = self.fleet.dwt,
            cost = self.fleet.cost,
            avg_safety = self.fleet.average_safety(),
            "Seeding complete"
        );
    }

    fn fill(&mut self, by_value: &[&VesselRecord]) {
        let requirement = self.problem.cargo_requirement();
        let min_safety = self.problem.min_safety();
        info!(cargo_requirement = requirement, "Filling fleet to meet DWT requirement");

        let candidates: Vec<&VesselRecord> = by_value
            .iter()
            .copied()
            .filter(|v| !self.fleet.contains(v.vessel_id()))
            .collect();
        // Fixed before the loop; sizes the optimistic recovery estimate.
        let median_dwt = metrics::median(candidates.iter().map(|v| v.dwt()));

        for vessel in candidates {
            if self.fleet.dwt >= requirement {
                break;
            }

            let tentative = self.fleet.tentative_safety(vessel.safety_score());
            if tentative < min_safety {
                let dwt_remaining = requirement - self.fleet.dwt - vessel.dwt();
                if dwt_remaining > 0.0 {
                    let estimated_additions = estimate_additions(dwt_remaining, median_dwt);
                    let projected = projected_safety(
                        self.fleet.score_sum() + f64::from(vessel.safety_score()),
                        self.fleet.scores.len() + 1,
                        estimated_additions,
                    );
                    if projected < min_safety {
                        self.record(
                            Some(vessel),
                            DecisionAction::Rejected,
                            SelectionPhase::Fill,
                            DecisionDetail::UnrecoverableSafety {
                                tentative_safety: tentative,
                                projected_safety: projected,
                                estimated_additions,
                            },
                        );
                        continue;
                    }
                } else {
                    self.record(
                        Some(vessel),
                        DecisionAction::Rejected,
                        SelectionPhase::Fill,
                        DecisionDetail::FinalVesselBelowFloor {
                            tentative_safety: tentative,
                        },
                    );
                    continue;
                }
            }

            self.fleet.add(vessel);
            self.record(
                Some(vessel),
                DecisionAction::Selected,
                SelectionPhase::Fill,
                DecisionDetail::ValueFill {
                    value_metric: metrics::value_metric(vessel),
                    running_dwt: self.fleet.dwt,
                    cargo_requirement: requirement,
                    running_safety: self.fleet.average_safety(),
                },
            );
        }
    }

    fn recover(&mut self, by_value: &[&VesselRecord]) {
        let requirement = self.problem.cargo_requirement();
        let min_safety = self.problem.min_safety();

        if self.fleet.average_safety() >= min_safety || self.fleet.dwt >= requirement {
            return;
        }
        info!(
            avg_safety = self.fleet.average_safety(),
            min_safety, "Safety recovery: adding high-safety vessels"
        );

        let candidates: Vec<&VesselRecord> = by_value
            .iter()
            .copied()
            .filter(|v| {
                v.safety_score() >= RECOVERY_MIN_SAFETY && !self.fleet.contains(v.vessel_id())
            })
            .collect();

        for vessel in candidates {
            if self.fleet.dwt >= requirement && self.fleet.average_safety() >= min_safety {
                break;
            }
            self.fleet.add(vessel);
            self.record(
                Some(vessel),
                DecisionAction::Selected,
                SelectionPhase::SafetyRecovery,
                DecisionDetail::SafetyLift {
                    safety_score: vessel.safety_score(),
                    running_safety: self.fleet.average_safety(),
                },
            );
        }
    }
}

/// Seed ranking: ascending cost per tonne, then ascending absolute cost.
///
/// The sort is stable, so vessels tied on both keys keep pool order.
fn seed_order(a: &VesselRecord, b: &VesselRecord) -> Ordering {
    metrics::cost_per_dwt(a)
        .total_cmp(&metrics::cost_per_dwt(b))
        .then_with(|| a.adjusted_cost().total_cmp(&b.adjusted_cost()))
}

/// Estimated number of further vessels needed to cover `dwt_remaining`,
/// sized by the median candidate. Always at least one.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn estimate_additions(dwt_remaining: f64, median_dwt: Option<f64>) -> usize {
    match median_dwt {
        Some(median) if median > 0.0 => ((dwt_remaining / median).floor() as usize).max(1),
        _ => 1,
    }
}

/// Fleet mean if `additions` further vessels all scored the maximum.
#[allow(clippy::cast_precision_loss)]
fn projected_safety(score_sum: f64, count: usize, additions: usize) -> f64 {
    let best = f64::from(MAX_SAFETY_SCORE);
    (score_sum + best * additions as f64) / (count + additions) as f64
}
