//! Vessel attribute records consumed by fleet selection.
//!
//! A [`VesselRecord`] is the validated, read-only view of one row of the
//! upstream attribute table. Cost, emissions and fuel totals are computed
//! upstream; this crate only reads them.

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::VesselId;

/// Lowest safety score a vessel can carry.
pub const MIN_SAFETY_SCORE: u8 = 1;

/// Highest safety score a vessel can carry.
pub const MAX_SAFETY_SCORE: u8 = 5;

/// A single candidate vessel.
///
/// Use [`VesselRecord::try_new`] to construct; the constructor enforces the
/// attribute invariants so that every record in a pool is rankable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VesselRecord {
    vessel_id: VesselId,
    dwt: f64,
    safety_score: u8,
    main_engine_fuel_type: String,
    adjusted_cost: f64,
    co2eq_total: f64,
    fuel_total: f64,
}

impl VesselRecord {
    /// Create a validated vessel record.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if `dwt` is not positive, `adjusted_cost` is
    /// negative or non-finite, the safety score is outside 1..=5, or the fuel
    /// label is blank.
    pub fn try_new(
        vessel_id: impl Into<VesselId>,
        dwt: f64,
        safety_score: u8,
        main_engine_fuel_type: impl Into<String>,
        adjusted_cost: f64,
    ) -> Result<Self, DomainError> {
        let vessel_id = vessel_id.into();
        let main_engine_fuel_type = main_engine_fuel_type.into().trim().to_string();

        if !dwt.is_finite() || dwt <= 0.0 {
            return Err(DomainError::NonPositiveDwt { vessel_id, dwt });
        }
        if !adjusted_cost.is_finite() || adjusted_cost < 0.0 {
            return Err(DomainError::InvalidCost {
                vessel_id,
                cost: adjusted_cost,
            });
        }
        if !(MIN_SAFETY_SCORE..=MAX_SAFETY_SCORE).contains(&safety_score) {
            return Err(DomainError::SafetyScoreOutOfRange {
                vessel_id,
                score: f64::from(safety_score),
            });
        }
        if main_engine_fuel_type.is_empty() {
            return Err(DomainError::UnmappedFuelType {
                vessel_id,
                label: main_engine_fuel_type,
            });
        }

        Ok(Self {
            vessel_id,
            dwt,
            safety_score,
            main_engine_fuel_type,
            adjusted_cost,
            co2eq_total: 0.0,
            fuel_total: 0.0,
        })
    }

    /// Attach the informational emission and fuel totals.
    ///
    /// Non-finite values are stored as zero; they are carried to reports
    /// only and never influence selection.
    #[must_use]
    pub fn with_emissions(mut self, co2eq_total: f64, fuel_total: f64) -> Self {
        self.co2eq_total = if co2eq_total.is_finite() { co2eq_total } else { 0.0 };
        self.fuel_total = if fuel_total.is_finite() { fuel_total } else { 0.0 };
        self
    }

    /// Get the vessel ID.
    #[must_use]
    pub const fn vessel_id(&self) -> &VesselId {
        &self.vessel_id
    }

    /// Get the deadweight tonnage.
    #[must_use]
    pub const fn dwt(&self) -> f64 {
        self.dwt
    }

    /// Get the safety score (1..=5).
    #[must_use]
    pub const fn safety_score(&self) -> u8 {
        self.safety_score
    }

    /// Get the main engine fuel type label.
    #[must_use]
    pub fn fuel_type(&self) -> &str {
        &self.main_engine_fuel_type
    }

    /// Get the fully decomposed monthly cost.
    #[must_use]
    pub const fn adjusted_cost(&self) -> f64 {
        self.adjusted_cost
    }

    /// Get the total CO2-equivalent emissions.
    #[must_use]
    pub const fn co2eq_total(&self) -> f64 {
        self.co2eq_total
    }

    /// Get the total fuel consumption.
    #[must_use]
    pub const fn fuel_total(&self) -> f64 {
        self.fuel_total
    }
}

/// One raw row of the upstream attribute table.
///
/// Every attribute is optional because upstream joins can leave holes.
/// [`VesselAttributes::into_record`] turns a complete row into a
/// [`VesselRecord`]; incomplete rows are reported as ineligible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VesselAttributes {
    pub vessel_id: String,
    pub dwt: Option<f64>,
    pub safety_score: Option<f64>,
    pub main_engine_fuel_type: Option<String>,
    pub adjusted_cost: Option<f64>,
    pub co2eq_total: Option<f64>,
    pub fuel_total: Option<f64>,
}

impl VesselAttributes {
    /// Validate the row and build a record, using `fuel_type` as the
    /// already-normalised fuel label.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingField`] for absent required attributes,
    /// and the [`VesselRecord::try_new`] errors for out-of-range values.
    pub fn into_record(self, fuel_type: String) -> Result<VesselRecord, DomainError> {
        let vessel_id = VesselId::new(self.vessel_id.trim());
        let missing = |field| DomainError::MissingField {
            vessel_id: vessel_id.clone(),
            field,
        };

        let dwt = self.dwt.ok_or_else(|| missing("dwt"))?;
        let cost = self.adjusted_cost.ok_or_else(|| missing("adjusted_cost"))?;
        let raw_score = self.safety_score.ok_or_else(|| missing("safety_score"))?;
        let score = safety_score_from_f64(raw_score).ok_or_else(|| {
            DomainError::SafetyScoreOutOfRange {
                vessel_id: vessel_id.clone(),
                score: raw_score,
            }
        })?;

        let record = VesselRecord::try_new(vessel_id, dwt, score, fuel_type, cost)?;
        Ok(record.with_emissions(
            self.co2eq_total.unwrap_or(0.0),
            self.fuel_total.unwrap_or(0.0),
        ))
    }
}

/// Convert an upstream numeric score into the integer scale, if it is one.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn safety_score_from_f64(raw: f64) -> Option<u8> {
    if !raw.is_finite() || raw.fract() != 0.0 {
        return None;
    }
    let lo = f64::from(MIN_SAFETY_SCORE);
    let hi = f64::from(MAX_SAFETY_SCORE);
    if (lo..=hi).contains(&raw) {
        Some(raw as u8)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_accepts_valid_record() {
        let v = VesselRecord::try_new("A1", 1000.0, 5, "  LNG ", 100.0).unwrap();
        assert_eq!(v.vessel_id().as_str(), "A1");
        assert_eq!(v.fuel_type(), "LNG");
        assert_eq!(v.safety_score(), 5);
        assert_eq!(v.co2eq_total(), 0.0);
    }

    #[test]
    fn try_new_rejects_zero_dwt() {
        let err = VesselRecord::try_new("A1", 0.0, 3, "LNG", 100.0).unwrap_err();
        assert!(matches!(err, DomainError::NonPositiveDwt { .. }));
    }

    #[test]
    fn try_new_rejects_nan_cost() {
        let err = VesselRecord::try_new("A1", 10.0, 3, "LNG", f64::NAN).unwrap_err();
        assert!(matches!(err, DomainError::InvalidCost { .. }));
    }

    #[test]
    fn try_new_allows_zero_cost() {
        assert!(VesselRecord::try_new("A1", 10.0, 3, "LNG", 0.0).is_ok());
    }

    #[test]
    fn try_new_rejects_blank_fuel() {
        let err = VesselRecord::try_new("A1", 10.0, 3, "   ", 1.0).unwrap_err();
        assert!(matches!(err, DomainError::UnmappedFuelType { .. }));
    }

    #[test]
    fn with_emissions_zeroes_non_finite_values() {
        let v = VesselRecord::try_new("A1", 10.0, 3, "LNG", 1.0)
            .unwrap()
            .with_emissions(f64::NAN, 12.5);
        assert_eq!(v.co2eq_total(), 0.0);
        assert_eq!(v.fuel_total(), 12.5);
    }

    #[test]
    fn attributes_missing_cost_are_reported() {
        let row = VesselAttributes {
            vessel_id: "7".into(),
            dwt: Some(100.0),
            safety_score: Some(3.0),
            main_engine_fuel_type: Some("LNG".into()),
            adjusted_cost: None,
            ..Default::default()
        };
        let err = row.into_record("LNG".into()).unwrap_err();
        assert_eq!(
            err,
            DomainError::MissingField {
                vessel_id: VesselId::from("7"),
                field: "adjusted_cost",
            }
        );
    }

    #[test]
    fn attributes_reject_fractional_safety() {
        let row = VesselAttributes {
            vessel_id: "7".into(),
            dwt: Some(100.0),
            safety_score: Some(3.5),
            adjusted_cost: Some(10.0),
            ..Default::default()
        };
        let err = row.into_record("LNG".into()).unwrap_err();
        assert!(matches!(err, DomainError::SafetyScoreOutOfRange { .. }));
    }

    #[test]
    fn attributes_carry_emissions() {
        let row = VesselAttributes {
            vessel_id: " 7 ".into(),
            dwt: Some(100.0),
            safety_score: Some(4.0),
            adjusted_cost: Some(10.0),
            co2eq_total: Some(3.25),
            fuel_total: None,
            ..Default::default()
        };
        let v = row.into_record("LNG".into()).unwrap();
        assert_eq!(v.vessel_id().as_str(), "7");
        assert_eq!(v.safety_score(), 4);
        assert_eq!(v.co2eq_total(), 3.25);
        assert_eq!(v.fuel_total(), 0.0);
    }
}
