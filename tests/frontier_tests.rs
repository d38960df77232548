//! Experiment drivers against the HiGHS backend on the scenario pool.

use fleetsel::application::frontier::claim::{check_claim, ClaimTarget};
use fleetsel::application::frontier::sweep::{
    domination_search, fleet_size_sweep, pareto_sweep, RowStatus,
};
use fleetsel::application::selection::exact::ExactSelector;
use fleetsel::application::selection::greedy::GreedySelector;
use fleetsel::infrastructure::factory::solver::build_exact_selector;
use fleetsel::testkit::config;
use fleetsel::testkit::domain::{scenario_pool, scenario_problem};

fn selector() -> ExactSelector {
    build_exact_selector(&config::scenario().solver)
}

fn assert_cost(actual: Option<f64>, expected: f64) {
    let actual = actual.expect("row has a cost");
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected cost {expected}, got {actual}"
    );
}

#[test]
fn pareto_cost_never_falls_as_safety_rises() {
    let levels = config::scenario().frontier.safety_levels();
    assert_eq!(levels, vec![3.0, 3.5, 4.0]);

    let rows = pareto_sweep(&selector(), &scenario_pool(), &scenario_problem(), &levels);

    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.is_feasible()));
    assert_cost(rows[0].total_cost, 190.0);
    assert_cost(rows[1].total_cost, 250.0);
    assert_cost(rows[2].total_cost, 250.0);
    assert_eq!(rows[1].scenario_label, "pareto_safety_3.5");
}

#[test]
fn fleet_size_sweep_marks_impossible_sizes() {
    let sizes = config::scenario().frontier.fleet_sizes();
    assert_eq!(sizes, vec![1, 2, 3]);

    let rows = fleet_size_sweep(&selector(), &scenario_pool(), &scenario_problem(), &sizes);

    // One vessel cannot cover two fuel types.
    assert_eq!(rows[0].status, RowStatus::Infeasible);
    assert!(rows[0].total_cost.is_none());
    assert_cost(rows[1].total_cost, 190.0);
    assert_cost(rows[2].total_cost, 250.0);
    assert_eq!(rows[2].fleet_size, Some(3));
}

#[test]
fn safer_fleet_exists_at_greedy_cost() {
    let pool = scenario_pool();
    let problem = scenario_problem();
    let baseline = GreedySelector::new().select(&pool, &problem).report;

    let rows = domination_search(&selector(), &pool, &problem, &baseline, 0.5).unwrap();

    let first = &rows[0];
    assert_eq!(first.target_safety, 3.5);
    assert!(first.feasible);
    assert!(first.total_cost.unwrap() <= baseline.total_cost + 1e-6);
    assert!(first.avg_safety.unwrap() > baseline.avg_safety);

    // Only A1 scores 5, so a fleet covering both fuel types cannot reach it.
    let last = rows.last().unwrap();
    assert_eq!(last.target_safety, 5.0);
    assert!(!last.feasible);
}

#[test]
fn configured_claim_is_feasible_with_room_to_spare() {
    let target = ClaimTarget::from(&config::scenario().claim);
    let check = check_claim(&selector(), &scenario_pool(), &scenario_problem(), target).unwrap();

    assert!(check.exact_claim_feasible);
    assert_cost(check.best_cost_at_target, 190.0);
    assert_cost(check.gap_to_claim, -10.0);
    assert_cost(check.min_cost_any_size, 190.0);
    assert_eq!(check.fleet_size_at_min_cost, Some(2));
}

#[test]
fn overly_cheap_claim_reports_the_gap() {
    let target = ClaimTarget {
        fleet_size: 2,
        min_safety: 3.0,
        max_cost: 150.0,
    };
    let check = check_claim(&selector(), &scenario_pool(), &scenario_problem(), target).unwrap();

    assert!(!check.exact_claim_feasible);
    assert_cost(check.gap_to_claim, 40.0);
}
