//! Solver backends implementing `port::outbound::solver::Solver`.

pub mod highs;
