//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`]: vessel and pool builders, including the five-vessel
//!   reference scenario.
//! - [`solver`]: deterministic [`Solver`](crate::port::outbound::solver::Solver)
//!   stand-ins: `CannedSolver` and `BruteForceSolver`.
//! - [`config`]: canonical test configurations.

pub mod config;
pub mod domain;
pub mod solver;
