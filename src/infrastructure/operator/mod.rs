//! Operator implementations for inbound adapters.

pub mod configuration;
pub mod entry;
pub mod selection;

mod shared;
