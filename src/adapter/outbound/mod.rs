//! Outbound adapters (driven side).

pub mod export;
pub mod pool;
pub mod solver;
