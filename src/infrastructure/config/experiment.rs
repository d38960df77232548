//! Frontier, claim and submission settings.

use serde::{Deserialize, Serialize};

use crate::application::frontier::claim::ClaimTarget;
use crate::application::frontier::sweep::safety_grid;
use crate::application::submission::SubmissionMeta;

/// Sweep grids for `frontier`, `fleet-sizes` and `dominate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontierConfig {
    #[serde(default = "default_safety_start")]
    pub safety_start: f64,
    #[serde(default = "default_safety_stop")]
    pub safety_stop: f64,
    #[serde(default = "default_safety_step")]
    pub safety_step: f64,
    /// Optional fleet-size cap applied to every Pareto point.
    #[serde(default)]
    pub max_fleet_size: Option<usize>,
    #[serde(default = "default_fleet_size_min")]
    pub fleet_size_min: usize,
    #[serde(default = "default_fleet_size_max")]
    pub fleet_size_max: usize,
    /// Safety floor for the fleet-size sweep.
    #[serde(default = "default_fleet_size_safety")]
    pub fleet_size_safety: f64,
    /// Increment between domination targets.
    #[serde(default = "default_domination_step")]
    pub domination_step: f64,
}

const fn default_safety_start() -> f64 {
    3.0
}

const fn default_safety_stop() -> f64 {
    5.0
}

const fn default_safety_step() -> f64 {
    0.2
}

const fn default_fleet_size_min() -> usize {
    18
}

const fn default_fleet_size_max() -> usize {
    26
}

const fn default_fleet_size_safety() -> f64 {
    3.0
}

const fn default_domination_step() -> f64 {
    0.1
}

impl Default for FrontierConfig {
    fn default() -> Self {
        Self {
            safety_start: default_safety_start(),
            safety_stop: default_safety_stop(),
            safety_step: default_safety_step(),
            max_fleet_size: None,
            fleet_size_min: default_fleet_size_min(),
            fleet_size_max: default_fleet_size_max(),
            fleet_size_safety: default_fleet_size_safety(),
            domination_step: default_domination_step(),
        }
    }
}

impl FrontierConfig {
    /// Safety levels of the Pareto sweep.
    #[must_use]
    pub fn safety_levels(&self) -> Vec<f64> {
        safety_grid(self.safety_start, self.safety_stop, self.safety_step)
    }

    /// Fleet sizes of the fleet-size sweep.
    #[must_use]
    pub fn fleet_sizes(&self) -> Vec<usize> {
        (self.fleet_size_min..=self.fleet_size_max).collect()
    }
}

/// Default claim to check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimConfig {
    #[serde(default = "default_claim_fleet_size")]
    pub fleet_size: usize,
    #[serde(default = "default_claim_min_safety")]
    pub min_safety: f64,
    #[serde(default = "default_claim_max_cost")]
    pub max_cost: f64,
}

const fn default_claim_fleet_size() -> usize {
    22
}

const fn default_claim_min_safety() -> f64 {
    4.0
}

const fn default_claim_max_cost() -> f64 {
    20_300_000.0
}

impl Default for ClaimConfig {
    fn default() -> Self {
        Self {
            fleet_size: default_claim_fleet_size(),
            min_safety: default_claim_min_safety(),
            max_cost: default_claim_max_cost(),
        }
    }
}

impl From<&ClaimConfig> for ClaimTarget {
    fn from(config: &ClaimConfig) -> Self {
        Self {
            fleet_size: config.fleet_size,
            min_safety: config.min_safety,
            max_cost: config.max_cost,
        }
    }
}

/// Submission template metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionConfig {
    #[serde(default = "default_team_name")]
    pub team_name: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_report_file_name")]
    pub report_file_name: String,
    /// `Yes` or `No`.
    #[serde(default = "default_sensitivity")]
    pub sensitivity: String,
}

fn default_team_name() -> String {
    "YourTeamName".into()
}

fn default_category() -> String {
    "A".into()
}

fn default_report_file_name() -> String {
    "MaritimeHackathon2026_CasePaper_YourTeamName.pdf".into()
}

fn default_sensitivity() -> String {
    "Yes".into()
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            team_name: default_team_name(),
            category: default_category(),
            report_file_name: default_report_file_name(),
            sensitivity: default_sensitivity(),
        }
    }
}

impl From<&SubmissionConfig> for SubmissionMeta {
    fn from(config: &SubmissionConfig) -> Self {
        Self {
            team_name: config.team_name.clone(),
            category: config.category.clone(),
            report_file_name: config.report_file_name.clone(),
            sensitivity: config.sensitivity.clone(),
        }
    }
}
