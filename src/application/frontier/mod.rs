//! Experiment drivers that orchestrate many exact solves.

pub mod claim;
pub mod compare;
pub mod sweep;
