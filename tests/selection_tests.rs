//! End-to-end selection: CSV table in, greedy and exact fleets out.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use fleetsel::adapter::outbound::pool::csv::parse_pool;
use fleetsel::application::frontier::compare::compare;
use fleetsel::application::selection::exact::ExactSelector;
use fleetsel::application::selection::greedy::GreedySelector;
use fleetsel::application::selection::validator;
use fleetsel::domain::decision::{DecisionAction, SelectionPhase};
use fleetsel::domain::pool::{FuelCatalog, VesselPool};
use fleetsel::domain::problem::{FleetSize, SelectionProblem};
use fleetsel::infrastructure::config::solver::SolverConfig;
use fleetsel::infrastructure::factory::solver::build_exact_selector;
use fleetsel::port::outbound::solver::SolutionStatus;
use fleetsel::testkit::domain::{
    ids, pool_of, problem_for, scenario_pool, vessel, SCENARIO_CARGO, SCENARIO_CSV,
    SCENARIO_MIN_SAFETY,
};
use fleetsel::testkit::solver::BruteForceSolver;

fn pool() -> VesselPool {
    parse_pool(SCENARIO_CSV, Path::new("scenario.csv"), &FuelCatalog::default())
        .expect("scenario table parses")
}

fn problem(pool: &VesselPool) -> SelectionProblem {
    SelectionProblem::for_pool(pool, SCENARIO_CARGO, SCENARIO_MIN_SAFETY)
        .expect("scenario problem is valid")
}

#[test]
fn csv_rows_without_cost_are_screened_out() {
    let pool = pool();
    assert_eq!(pool.len(), 5);
    assert_eq!(pool.excluded().len(), 1);
    assert_eq!(pool.excluded()[0].vessel_id.as_str(), "X9");
}

#[test]
fn greedy_fleet_meets_every_constraint() {
    let pool = pool();
    let outcome = GreedySelector::new().select(&pool, &problem(&pool));

    assert_eq!(ids(&outcome.fleet), vec!["A2", "B1", "B2"]);
    assert_eq!(outcome.report.total_cost, 250.0);
    assert_eq!(outcome.report.total_dwt, 3300.0);
    assert!(outcome.report.all_constraints_met);

    let seeds: Vec<_> = outcome.log.in_phase(SelectionPhase::Seed).collect();
    assert_eq!(seeds.len(), 2);
    assert!(seeds
        .iter()
        .all(|d| d.action() == DecisionAction::Selected));
}

#[test]
fn greedy_report_matches_independent_validation() {
    let pool = pool();
    let problem = problem(&pool);
    let outcome = GreedySelector::new().select(&pool, &problem);

    let rechecked = validator::validate_for(&problem, &outcome.fleet);
    assert_eq!(rechecked, outcome.report);
}

#[test]
fn highs_finds_the_cheaper_fleet() {
    let pool = pool();
    let selector = build_exact_selector(&SolverConfig::default());
    let outcome = selector.solve(&pool, &problem(&pool));

    assert_eq!(outcome.status, SolutionStatus::Optimal);
    let fleet = outcome.fleet.as_deref().expect("optimal outcome has a fleet");
    assert_eq!(ids(fleet), vec!["A2", "B1"]);

    let report = outcome.report().expect("optimal outcome is validated");
    assert!((report.total_cost - 190.0).abs() < 1e-6);
    assert!(report.all_constraints_met);
}

#[test]
fn highs_honours_a_fixed_fleet_size() {
    let pool = pool();
    let problem = problem(&pool).with_fleet_size(FleetSize::Exactly(3));
    let outcome = build_exact_selector(&SolverConfig::default()).solve(&pool, &problem);

    let report = outcome.report().expect("three-vessel fleet exists");
    assert_eq!(report.fleet_size, 3);
    assert!((report.total_cost - 250.0).abs() < 1e-6);
}

#[test]
fn highs_reports_infeasible_cost_ceiling() {
    let pool = pool();
    let problem = problem(&pool).with_max_cost(Some(150.0));
    let outcome = build_exact_selector(&SolverConfig::default()).solve(&pool, &problem);

    assert_eq!(outcome.status, SolutionStatus::Infeasible);
    assert!(outcome.fleet.is_none());
}

#[test]
fn exact_never_costs_more_than_greedy() {
    let pool = pool();
    let selector = build_exact_selector(&SolverConfig::default());
    let comparison = compare(&GreedySelector::new(), &selector, &pool, &problem(&pool));

    let savings = comparison.savings.expect("exact solve is optimal");
    assert!((savings - 60.0).abs() < 1e-6);
    assert!(comparison.exact_is_cheaper());
}

#[test]
fn repeated_solves_return_the_same_fleets() {
    let pool = pool();
    let problem = problem(&pool);

    let greedy = GreedySelector::new();
    let (first, second) = (greedy.select(&pool, &problem), greedy.select(&pool, &problem));
    assert_eq!(ids(&first.fleet), ids(&second.fleet));
    assert_eq!(first.report, second.report);

    let exact = build_exact_selector(&SolverConfig::default());
    let (first, second) = (exact.solve(&pool, &problem), exact.solve(&pool, &problem));
    assert_eq!(first.status, second.status);
    assert_eq!(
        first.fleet.as_deref().map(ids),
        second.fleet.as_deref().map(ids)
    );
    assert_eq!(first.report(), second.report());
}

#[test]
fn cargo_beyond_pool_capacity_fails_both_strategies() {
    let pool = pool();
    // The five eligible vessels carry 4600 t between them.
    let problem = SelectionProblem::for_pool(&pool, 10_000.0, SCENARIO_MIN_SAFETY)
        .expect("problem is valid");

    let greedy = GreedySelector::new().select(&pool, &problem);
    assert!(!greedy.report.dwt_constraint_met);
    assert!(!greedy.report.all_constraints_met);

    let exact = build_exact_selector(&SolverConfig::default()).solve(&pool, &problem);
    assert_ne!(exact.status, SolutionStatus::Optimal);
    assert!(exact.report().map_or(true, |r| !r.dwt_constraint_met));
}

fn brute_force() -> ExactSelector {
    ExactSelector::new(Arc::new(BruteForceSolver), Duration::from_secs(1))
}

#[test]
fn exact_cost_bounds_greedy_cost_on_every_pool() {
    let three_fuels = pool_of(vec![
        vessel("L1", 1200.0, 4, "LNG", 90.0),
        vessel("L2", 400.0, 3, "LNG", 20.0),
        vessel("M1", 900.0, 5, "Methanol", 110.0),
        vessel("M2", 700.0, 2, "Methanol", 35.0),
        vessel("D1", 1500.0, 3, "Distillate", 80.0),
        vessel("D2", 600.0, 4, "Distillate", 50.0),
    ]);
    let one_fuel = pool_of(vec![
        vessel("1", 300.0, 5, "LNG", 45.0),
        vessel("2", 900.0, 3, "LNG", 60.0),
        vessel("3", 650.0, 4, "LNG", 70.0),
        vessel("4", 1100.0, 2, "LNG", 55.0),
        vessel("5", 500.0, 5, "LNG", 90.0),
    ]);
    let cases = [
        (scenario_pool(), SCENARIO_CARGO, SCENARIO_MIN_SAFETY),
        (three_fuels.clone(), 3000.0, 3.0),
        (three_fuels.clone(), 2000.0, 3.5),
        (three_fuels, 4500.0, 3.0),
        (one_fuel.clone(), 1500.0, 3.0),
        (one_fuel, 2500.0, 3.5),
    ];

    let exact = brute_force();
    let mut compared = 0;
    for (pool, cargo, min_safety) in &cases {
        let problem = problem_for(pool, *cargo, *min_safety);
        let greedy = GreedySelector::new().select(pool, &problem);
        if !greedy.report.all_constraints_met {
            continue;
        }
        let outcome = exact.solve(pool, &problem);
        let optimum = outcome
            .report()
            .unwrap_or_else(|| panic!("greedy fleet exists, so exact must be optimal ({cargo}, {min_safety})"));
        assert!(
            optimum.total_cost <= greedy.report.total_cost + 1e-9,
            "exact {} exceeds greedy {} at ({cargo}, {min_safety})",
            optimum.total_cost,
            greedy.report.total_cost
        );
        compared += 1;
    }
    assert!(compared >= 1, "no case produced a feasible greedy fleet");
}
