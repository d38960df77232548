//! Fixed-schema submission table built from a [`FleetResult`].
//!
//! The downstream template has eleven rows, each with a header name, a data
//! type, units, and the submitted value. Floats are rounded half-to-even to
//! two decimal places.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::domain::report::FleetResult;

/// Decimal places kept for float submissions.
const SUBMISSION_DP: u32 = 2;

/// Free-text fields of a submission that do not come from the fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionMeta {
    pub team_name: String,
    pub category: String,
    pub report_file_name: String,
    /// Whether a sensitivity analysis was performed (`Yes`/`No`).
    pub sensitivity: String,
}

impl Default for SubmissionMeta {
    fn default() -> Self {
        Self {
            team_name: String::new(),
            category: String::new(),
            report_file_name: String::new(),
            sensitivity: "Yes".into(),
        }
    }
}

/// One row of the submission template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRow {
    #[serde(rename = "Header Name")]
    pub header_name: &'static str,
    #[serde(rename = "Data Type")]
    pub data_type: &'static str,
    #[serde(rename = "Units")]
    pub units: &'static str,
    #[serde(rename = "Submission")]
    pub submission: String,
}

impl SubmissionRow {
    fn new(
        header_name: &'static str,
        data_type: &'static str,
        units: &'static str,
        submission: impl ToString,
    ) -> Self {
        Self {
            header_name,
            data_type,
            units,
            submission: submission.to_string(),
        }
    }
}

/// Round to the submission precision.
///
/// Non-finite values have no decimal form and are passed through as text.
fn rounded(value: f64) -> String {
    Decimal::from_f64(value).map_or_else(
        || value.to_string(),
        |d| {
            d.round_dp_with_strategy(SUBMISSION_DP, RoundingStrategy::MidpointNearestEven)
                .normalize()
                .to_string()
        },
    )
}

/// Map a fleet report onto the submission template.
#[must_use]
pub fn format_submission(report: &FleetResult, meta: &SubmissionMeta) -> Vec<SubmissionRow> {
    vec![
        SubmissionRow::new("team_name", "String", "-", &meta.team_name),
        SubmissionRow::new("category", "String", "-", &meta.category),
        SubmissionRow::new("report_file_name", "String", "-", &meta.report_file_name),
        SubmissionRow::new(
            "sum_of_fleet_deadweight",
            "Float",
            "tonnes",
            rounded(report.total_dwt),
        ),
        SubmissionRow::new(
            "total_cost_of_fleet",
            "Float",
            "dollars",
            rounded(report.total_cost),
        ),
        SubmissionRow::new(
            "average_fleet_safety_score",
            "Float",
            "-",
            rounded(report.avg_safety),
        ),
        SubmissionRow::new(
            "no_of_unique_main_engine_fuel_types_in_fleet",
            "Integer",
            "-",
            report.fuel_type_count(),
        ),
        SubmissionRow::new(
            "sensitivity_analysis_performance",
            "String",
            "Yes/No",
            &meta.sensitivity,
        ),
        SubmissionRow::new("size_of_fleet_count", "Integer", "-", report.fleet_size),
        SubmissionRow::new(
            "total_emission_CO2_eq",
            "Float",
            "tonnes",
            rounded(report.total_co2eq),
        ),
        SubmissionRow::new(
            "total_fuel_consumption",
            "Float",
            "tonnes",
            rounded(report.total_fuel),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::selection::validator;
    use crate::testkit::domain::{fuel_types, vessel};

    fn report() -> FleetResult {
        let fleet = vec![
            vessel("1", 1000.123, 4, "LNG", 10.005).with_emissions(1.234, 2.0),
            vessel("2", 500.0, 3, "Methanol", 20.0).with_emissions(0.5, 1.0),
            vessel("3", 250.0, 3, "LNG", 5.0),
        ];
        validator::validate(&fleet, 100.0, 3.0, &fuel_types(&["LNG", "Methanol"]))
    }

    #[test]
    fn eleven_rows_in_template_order() {
        let rows = format_submission(&report(), &SubmissionMeta::default());
        let headers: Vec<_> = rows.iter().map(|r| r.header_name).collect();
        assert_eq!(
            headers,
            vec![
                "team_name",
                "category",
                "report_file_name",
                "sum_of_fleet_deadweight",
                "total_cost_of_fleet",
                "average_fleet_safety_score",
                "no_of_unique_main_engine_fuel_types_in_fleet",
                "sensitivity_analysis_performance",
                "size_of_fleet_count",
                "total_emission_CO2_eq",
                "total_fuel_consumption",
            ]
        );
    }

    #[test]
    fn values_are_rounded_and_counted() {
        let meta = SubmissionMeta {
            team_name: "Tidewater".into(),
            category: "Technical".into(),
            report_file_name: "report.pdf".into(),
            sensitivity: "No".into(),
        };
        let rows = format_submission(&report(), &meta);
        let value = |name: &str| {
            rows.iter()
                .find(|r| r.header_name == name)
                .map(|r| r.submission.clone())
                .unwrap()
        };

        assert_eq!(value("team_name"), "Tidewater");
        assert_eq!(value("sum_of_fleet_deadweight"), "1750.12");
        assert_eq!(value("average_fleet_safety_score"), "3.33");
        assert_eq!(value("no_of_unique_main_engine_fuel_types_in_fleet"), "2");
        assert_eq!(value("size_of_fleet_count"), "3");
        assert_eq!(value("total_emission_CO2_eq"), "1.73");
        assert_eq!(value("total_fuel_consumption"), "3");
        assert_eq!(value("sensitivity_analysis_performance"), "No");
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert_eq!(rounded(f64::NAN), "NaN");
    }
}
