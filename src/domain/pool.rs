//! The candidate vessel pool.
//!
//! A [`VesselPool`] is built once per run and never mutated afterwards, so it
//! can be shared by reference across strategies and sweeps without locking.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::VesselId;
use super::metrics;
use super::vessel::{VesselAttributes, VesselRecord};

/// Normalises raw fuel labels onto the categories used for coverage.
///
/// Aliases are matched after trimming. When `known` is non-empty, any label
/// that does not resolve to one of its members is unmapped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelCatalog {
    #[serde(default)]
    aliases: HashMap<String, String>,
    #[serde(default)]
    known: BTreeSet<String>,
}

impl FuelCatalog {
    /// Create a catalog from an alias map and an optional set of known labels.
    #[must_use]
    pub fn new(aliases: HashMap<String, String>, known: BTreeSet<String>) -> Self {
        Self { aliases, known }
    }

    /// Resolve a raw label to its canonical category.
    ///
    /// Returns `None` when the label is blank or, with a non-empty known
    /// set, not a member of it.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let canonical = self
            .aliases
            .get(trimmed)
            .map_or(trimmed, String::as_str)
            .to_string();
        if self.known.is_empty() || self.known.contains(&canonical) {
            Some(canonical)
        } else {
            None
        }
    }
}

/// A row that was dropped during screening.
#[derive(Debug, Clone, PartialEq)]
pub struct ExcludedVessel {
    /// Row identifier as read upstream.
    pub vessel_id: VesselId,
    /// Why the row is not rankable.
    pub reason: DomainError,
}

/// Immutable pool of eligible candidate vessels.
#[derive(Debug, Clone, Default)]
pub struct VesselPool {
    vessels: Vec<VesselRecord>,
    excluded: Vec<ExcludedVessel>,
}

impl VesselPool {
    /// Build a pool from validated records.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DuplicateVesselId`] if two records share an id.
    pub fn new(vessels: Vec<VesselRecord>) -> Result<Self, DomainError> {
        ensure_unique(&vessels)?;
        Ok(Self {
            vessels,
            excluded: Vec::new(),
        })
    }

    /// Screen raw upstream rows into a pool.
    ///
    /// Rows with absent or out-of-range required attributes, or a fuel label
    /// the catalog cannot map, are excluded rather than failing the run.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DuplicateVesselId`] if two eligible rows share
    /// an id.
    pub fn screen(
        rows: impl IntoIterator<Item = VesselAttributes>,
        catalog: &FuelCatalog,
    ) -> Result<Self, DomainError> {
        let mut vessels = Vec::new();
        let mut excluded = Vec::new();

        for row in rows {
            let vessel_id = VesselId::new(row.vessel_id.trim());
            let raw_label = row.main_engine_fuel_type.clone().unwrap_or_default();
            let Some(fuel_type) = catalog.resolve(&raw_label) else {
                excluded.push(ExcludedVessel {
                    reason: DomainError::UnmappedFuelType {
                        vessel_id: vessel_id.clone(),
                        label: raw_label,
                    },
                    vessel_id,
                });
                continue;
            };

            match row.into_record(fuel_type) {
                Ok(record) => vessels.push(record),
                Err(reason) => excluded.push(ExcludedVessel { vessel_id, reason }),
            }
        }

        ensure_unique(&vessels)?;
        Ok(Self { vessels, excluded })
    }

    /// Eligible vessels, in upstream order.
    #[must_use]
    pub fn vessels(&self) -> &[VesselRecord] {
        &self.vessels
    }

    /// Rows dropped during screening.
    #[must_use]
    pub fn excluded(&self) -> &[ExcludedVessel] {
        &self.excluded
    }

    /// Number of eligible vessels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vessels.len()
    }

    /// Whether the pool has no eligible vessels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vessels.is_empty()
    }

    /// Look up a vessel by id.
    #[must_use]
    pub fn get(&self, id: &VesselId) -> Option<&VesselRecord> {
        self.vessels.iter().find(|v| v.vessel_id() == id)
    }

    /// Every distinct fuel type in the pool, in lexicographic order.
    #[must_use]
    pub fn fuel_types(&self) -> BTreeSet<String> {
        metrics::fuel_types_present(&self.vessels)
    }

    /// Total deadweight tonnage of the whole pool.
    #[must_use]
    pub fn total_dwt(&self) -> f64 {
        metrics::total_dwt(&self.vessels)
    }
}

fn ensure_unique(vessels: &[VesselRecord]) -> Result<(), DomainError> {
    let mut seen = HashSet::with_capacity(vessels.len());
    for v in vessels {
        if !seen.insert(v.vessel_id()) {
            return Err(DomainError::DuplicateVesselId {
                vessel_id: v.vessel_id().clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, fuel: Option<&str>, cost: Option<f64>) -> VesselAttributes {
        VesselAttributes {
            vessel_id: id.to_string(),
            dwt: Some(1000.0),
            safety_score: Some(3.0),
            main_engine_fuel_type: fuel.map(str::to_string),
            adjusted_cost: cost,
            co2eq_total: None,
            fuel_total: None,
        }
    }

    #[test]
    fn catalog_applies_aliases() {
        let catalog = FuelCatalog::new(
            HashMap::from([("DISTILLATE FUEL".into(), "Distillate fuel".into())]),
            BTreeSet::new(),
        );
        assert_eq!(
            catalog.resolve(" DISTILLATE FUEL "),
            Some("Distillate fuel".into())
        );
        assert_eq!(catalog.resolve("LNG"), Some("LNG".into()));
        assert_eq!(catalog.resolve("  "), None);
    }

    #[test]
    fn catalog_with_known_set_rejects_strangers() {
        let catalog = FuelCatalog::new(HashMap::new(), BTreeSet::from(["LNG".to_string()]));
        assert_eq!(catalog.resolve("LNG"), Some("LNG".into()));
        assert_eq!(catalog.resolve("Whale oil"), None);
    }

    #[test]
    fn screen_excludes_incomplete_rows() {
        let rows = vec![
            row("1", Some("LNG"), Some(10.0)),
            row("2", Some("LNG"), None),
            row("3", None, Some(10.0)),
        ];
        let pool = VesselPool::screen(rows, &FuelCatalog::default()).unwrap();

        assert_eq!(pool.len(), 1);
        assert_eq!(pool.excluded().len(), 2);
        assert!(matches!(
            pool.excluded()[0].reason,
            DomainError::MissingField {
                field: "adjusted_cost",
                ..
            }
        ));
        assert!(matches!(
            pool.excluded()[1].reason,
            DomainError::UnmappedFuelType { .. }
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let v = VesselRecord::try_new("1", 10.0, 3, "LNG", 1.0).unwrap();
        let err = VesselPool::new(vec![v.clone(), v]).unwrap_err();
        assert_eq!(
            err,
            DomainError::DuplicateVesselId {
                vessel_id: VesselId::from("1")
            }
        );
    }

    #[test]
    fn fuel_types_are_sorted_and_distinct() {
        let pool = VesselPool::new(vec![
            VesselRecord::try_new("1", 10.0, 3, "Methanol", 1.0).unwrap(),
            VesselRecord::try_new("2", 10.0, 3, "LNG", 1.0).unwrap(),
            VesselRecord::try_new("3", 10.0, 3, "LNG", 1.0).unwrap(),
        ])
        .unwrap();
        let fuels: Vec<_> = pool.fuel_types().into_iter().collect();
        assert_eq!(fuels, vec!["LNG".to_string(), "Methanol".to_string()]);
        assert_eq!(pool.total_dwt(), 30.0);
        assert!(pool.get(&VesselId::from("2")).is_some());
    }
}
