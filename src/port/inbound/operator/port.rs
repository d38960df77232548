//! Unified operator capability surface for inbound adapters.

use super::configuration::ConfigurationOperator;
use super::selection::SelectionOperator;

/// Unified operator capability surface consumed by inbound adapters.
pub trait OperatorPort: ConfigurationOperator + SelectionOperator {}

impl<T> OperatorPort for T where T: ConfigurationOperator + SelectionOperator {}
