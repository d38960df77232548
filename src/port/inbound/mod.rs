//! Inbound (driving) ports consumed by inbound adapters.
//!
//! # Modules
//!
//! - [`operator`]: Operator-facing use cases for configuration and fleet selection

pub mod operator;
