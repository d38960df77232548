//! Solver factory.
//!
//! Provides factory functions for constructing the exact selection backend.

use std::sync::Arc;

use crate::adapter::outbound::solver::highs::HiGHSSolver;
use crate::application::selection::exact::ExactSelector;
use crate::infrastructure::config::solver::{SolverBackend, SolverConfig};
use crate::port::outbound::solver::Solver;

/// Build the configured integer programming solver.
pub fn build_solver(config: &SolverConfig) -> Arc<dyn Solver> {
    match config.backend {
        SolverBackend::Highs => Arc::new(HiGHSSolver::new()),
    }
}

/// Build an exact selector over the configured solver and time limit.
pub fn build_exact_selector(config: &SolverConfig) -> ExactSelector {
    ExactSelector::new(build_solver(config), config.time_limit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_backend_is_highs() {
        let config = SolverConfig::default();
        assert_eq!(build_solver(&config).name(), "highs");

        let selector = build_exact_selector(&config);
        assert_eq!(selector.solver_name(), "highs");
        assert_eq!(selector.time_limit().as_secs(), 120);
    }
}
