//! Concrete operator installed by the binary.

/// Operator implementation backing every inbound use-case.
///
/// Stateless: each call parses its own configuration and pool, so one
/// instance serves the whole process.
#[derive(Debug, Default, Clone, Copy)]
pub struct Operator;

impl Operator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}
