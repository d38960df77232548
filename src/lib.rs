//! Fleetsel - constraint-aware cargo fleet selection.
//!
//! Picks a subset of candidate vessels that carries a cargo requirement at
//! minimum total cost, keeps the fleet's average safety score above a floor,
//! and covers every required main-engine fuel type.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - vessels, pools, problems, decision logs and fleet reports
//! - [`application`] - the greedy heuristic, the exact ILP strategy, the
//!   fleet validator and the experiment drivers built on top of them
//! - [`port`] - the operator surface offered to adapters and the
//!   [`Solver`](port::outbound::solver::Solver) abstraction it depends on
//! - [`adapter`] - the CLI, the HiGHS backend, and CSV/JSON import and export
//! - [`infrastructure`] - configuration, logging and wiring
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use fleetsel::adapter::outbound::pool::csv::load_pool;
//! use fleetsel::application::selection::greedy::GreedySelector;
//! use fleetsel::infrastructure::config::settings::Config;
//!
//! let config = Config::default();
//! let pool = load_pool(Path::new("vessels.csv"), &config.pool.catalog())?;
//! let selection = &config.selection;
//! let problem =
//!     selection.problem_for(&pool, selection.cargo_requirement, selection.min_safety)?;
//! let outcome = GreedySelector::new().select(&pool, &problem);
//! println!("{} vessels, cost {:.2}", outcome.fleet.len(), outcome.report.total_cost);
//! # Ok::<(), fleetsel::error::Error>(())
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
