//! Fleet selection domain: vessels, pools, problems, decisions and reports.
//!
//! Everything here is pure data plus invariant-checking constructors and
//! aggregation functions. Nothing in this layer performs I/O or depends on
//! a solver backend.

pub mod constraint;
pub mod decision;
pub mod error;
pub mod id;
pub mod metrics;
pub mod pool;
pub mod problem;
pub mod report;
pub mod vessel;
