//! Trait definitions (hexagonal ports).
//!
//! Ports define the extension points in the hexagonal architecture. Outbound
//! ports are implemented by adapters that wrap external systems (the ILP
//! solver); inbound ports are consumed by driving adapters (the CLI).
//!
//! ```text
//!  ┌─────────┐    ┌──────────────────────┐    ┌──────────┐
//!  │   CLI   │───▶│ Application + Domain │───▶│  Solver  │
//!  │ Adapter │    │                      │    │ Adapter  │
//!  └─────────┘    └──────────────────────┘    └──────────┘
//! ```

pub mod inbound;
pub mod outbound;
