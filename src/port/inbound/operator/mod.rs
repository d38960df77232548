//! Operator-facing inbound ports.
//!
//! Inputs cross these traits as text (config TOML, vessel CSV) so adapters
//! decide where the bytes come from.

pub mod configuration;
pub mod port;
pub mod selection;
