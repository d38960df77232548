//! Linear constraint types for the selection integer program.
//!
//! These types describe a constraint row independently of any solver
//! backend; adapters translate them into their own model representation.

use serde::{Deserialize, Serialize};

/// A single linear constraint: `sum(coefficients[i] * x[i]) {>=, <=, =} rhs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    /// Short label used in logs and diagnostics.
    pub name: String,
    /// Coefficient per decision variable.
    pub coefficients: Vec<f64>,
    pub sense: ConstraintSense,
    pub rhs: f64,
}

impl Constraint {
    /// Create a `>=` constraint.
    #[must_use]
    pub fn geq(name: impl Into<String>, coefficients: Vec<f64>, rhs: f64) -> Self {
        Self {
            name: name.into(),
            coefficients,
            sense: ConstraintSense::GreaterEqual,
            rhs,
        }
    }

    /// Create a `<=` constraint.
    #[must_use]
    pub fn leq(name: impl Into<String>, coefficients: Vec<f64>, rhs: f64) -> Self {
        Self {
            name: name.into(),
            coefficients,
            sense: ConstraintSense::LessEqual,
            rhs,
        }
    }

    /// Create an `=` constraint.
    #[must_use]
    pub fn eq(name: impl Into<String>, coefficients: Vec<f64>, rhs: f64) -> Self {
        Self {
            name: name.into(),
            coefficients,
            sense: ConstraintSense::Equal,
            rhs,
        }
    }

    /// Left-hand side evaluated at `values`.
    #[must_use]
    pub fn lhs(&self, values: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(values)
            .map(|(c, x)| c * x)
            .sum()
    }

    /// Whether `values` satisfy this constraint within `tolerance`.
    #[must_use]
    pub fn is_satisfied(&self, values: &[f64], tolerance: f64) -> bool {
        let lhs = self.lhs(values);
        match self.sense {
            ConstraintSense::GreaterEqual => lhs >= self.rhs - tolerance,
            ConstraintSense::LessEqual => lhs <= self.rhs + tolerance,
            ConstraintSense::Equal => (lhs - self.rhs).abs() <= tolerance,
        }
    }
}

/// Constraint sense (comparison operator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintSense {
    /// Greater than or equal (>=).
    GreaterEqual,
    /// Less than or equal (<=).
    LessEqual,
    /// Equal (=).
    Equal,
}

/// Bounds on a variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableBounds {
    /// Lower bound (`None` = -infinity).
    pub lower: Option<f64>,
    /// Upper bound (`None` = +infinity).
    pub upper: Option<f64>,
}

impl Default for VariableBounds {
    fn default() -> Self {
        Self {
            lower: Some(0.0),
            upper: None,
        }
    }
}

impl VariableBounds {
    /// Binary variable bounds `[0, 1]`.
    #[must_use]
    pub const fn binary() -> Self {
        Self {
            lower: Some(0.0),
            upper: Some(1.0),
        }
    }

    /// Non-negative variable `[0, +inf)`.
    #[must_use]
    pub fn non_negative() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn satisfaction_respects_sense_and_tolerance() {
        let c = Constraint::geq("dwt", vec![2.0, 3.0], 5.0);
        assert!(c.is_satisfied(&[1.0, 1.0], 0.0));
        assert!(!c.is_satisfied(&[1.0, 0.0], 0.0));

        let eq = Constraint::eq("size", vec![1.0, 1.0], 1.0);
        assert!(eq.is_satisfied(&[1.0, 1e-10], 1e-9));
        assert!(!eq.is_satisfied(&[1.0, 1.0], 1e-9));

        let le = Constraint::leq("cost", vec![10.0], 9.0);
        assert!(!le.is_satisfied(&[1.0], 1e-9));
    }
}
