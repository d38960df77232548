//! Vessel pool screening configuration.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::pool::FuelCatalog;

/// How raw fuel labels are normalised during screening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Raw label to canonical category.
    #[serde(default = "default_fuel_aliases")]
    pub fuel_aliases: BTreeMap<String, String>,
    /// When non-empty, labels outside this list make a vessel ineligible.
    #[serde(default)]
    pub known_fuel_types: Vec<String>,
}

fn default_fuel_aliases() -> BTreeMap<String, String> {
    BTreeMap::from([("DISTILLATE FUEL".to_string(), "Distillate fuel".to_string())])
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            fuel_aliases: default_fuel_aliases(),
            known_fuel_types: Vec::new(),
        }
    }
}

impl PoolConfig {
    /// Build the fuel catalog used to screen rows.
    #[must_use]
    pub fn catalog(&self) -> FuelCatalog {
        FuelCatalog::new(
            self.fuel_aliases
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            self.known_fuel_types.iter().cloned().collect::<BTreeSet<_>>(),
        )
    }
}
