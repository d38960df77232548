//! Application layer: selection strategies and experiment orchestration.
//!
//! Use cases here combine domain types with outbound ports. They never touch
//! files, terminals or concrete solver backends directly.

pub mod frontier;
pub mod selection;
pub mod submission;
