//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Vessel identifier - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors. Upstream tables use numeric ids; they are
/// carried as text so that ordering and hashing never depend on parsing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VesselId(String);

impl VesselId {
    /// Create a new `VesselId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the vessel ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VesselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VesselId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for VesselId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<u64> for VesselId {
    fn from(n: u64) -> Self {
        Self::new(n.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_inner_value() {
        let id = VesselId::from("9876543");
        assert_eq!(id.to_string(), "9876543");
        assert_eq!(id.as_str(), "9876543");
    }

    #[test]
    fn numeric_ids_convert_to_text() {
        assert_eq!(VesselId::from(42_u64), VesselId::from("42"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&VesselId::from("A1")).unwrap();
        assert_eq!(json, "\"A1\"");
    }
}
