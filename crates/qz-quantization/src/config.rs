//! Quantizer configuration and convergence reporting.

use qz_core::{ensure, errors::Result, Real, Size};

/// Imaginary shift applied to every characteristic-function argument.
///
/// The Fourier integrands are evaluated at `u + i·SHIFT` rather than on
/// the real axis, which damps the oscillation of the kernels and keeps
/// the Beta-function orders away from their poles.
pub const FREQUENCY_SHIFT: Real = 0.001;

/// A fixed-cost quadrature rule: interval and number of evaluation
/// points for the composite trapezoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationRule {
    /// Lower integration bound, strictly positive (the integrands are
    /// singular at the origin).
    pub lower: Real,
    /// Upper integration bound.
    pub upper: Real,
    /// Number of trapezoid evaluation points, at least 2.
    pub evaluation_points: Size,
}

impl IntegrationRule {
    fn validate(&self, what: &str) -> Result<()> {
        ensure!(
            self.lower > 0.0 && self.upper > self.lower,
            "{what}: integration bounds must satisfy 0 < lower < upper, got [{}, {}]",
            self.lower,
            self.upper
        );
        ensure!(
            self.evaluation_points >= 2,
            "{what}: need at least 2 evaluation points, got {}",
            self.evaluation_points
        );
        Ok(())
    }
}

/// Configuration of the quantizer fixed point.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizerConfig {
    /// Newton updates whose magnitude falls at or below this value are
    /// treated as collapsed and replaced by the seed point.
    pub lower_threshold: Real,
    /// Newton updates whose magnitude reaches this value are treated as
    /// runaway and replaced by the seed point.
    pub upper_threshold: Real,
    /// Iteration cap.
    pub max_iterations: Size,
    /// Euclidean distance between consecutive grids below which the
    /// iteration stops.
    pub tolerance: Real,
    /// Quadrature rule for the gradient and Jacobian integrals.
    pub grid_rule: IntegrationRule,
    /// Quadrature rule for the Gil–Pelaez weight integrals (finer, the
    /// `1/u` kernel decays slowly).
    pub weight_rule: IntegrationRule,
}

impl Default for QuantizerConfig {
    fn default() -> Self {
        Self {
            lower_threshold: 0.001,
            upper_threshold: 0.1,
            max_iterations: 10,
            tolerance: 0.01,
            grid_rule: IntegrationRule {
                lower: 0.01,
                upper: 100.0,
                evaluation_points: 129,
            },
            weight_rule: IntegrationRule {
                lower: 0.001,
                upper: 100.0,
                evaluation_points: 8193,
            },
        }
    }
}

impl QuantizerConfig {
    /// Thresholds suited to a wide-support variable such as an equity
    /// price, where genuine Newton updates span many orders of
    /// magnitude. Everything else keeps the defaults.
    pub fn wide_support() -> Self {
        Self {
            lower_threshold: 1e-8,
            upper_threshold: 1e5,
            ..Self::default()
        }
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.lower_threshold > 0.0 && self.upper_threshold > self.lower_threshold,
            "thresholds must satisfy 0 < lower < upper, got ({}, {})",
            self.lower_threshold,
            self.upper_threshold
        );
        ensure!(self.max_iterations >= 1, "max_iterations must be at least 1");
        ensure!(
            self.tolerance > 0.0,
            "tolerance must be positive, got {}",
            self.tolerance
        );
        self.grid_rule.validate("grid rule")?;
        self.weight_rule.validate("weight rule")?;
        Ok(())
    }
}

/// How the fixed-point iteration ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceReport {
    /// Number of Newton iterations performed.
    pub iterations: Size,
    /// Euclidean distance between the last two grids.
    pub final_distance: Real,
    /// Whether the distance fell below the tolerance within the cap.
    pub converged: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        QuantizerConfig::default().validate().unwrap();
        QuantizerConfig::wide_support().validate().unwrap();
    }

    #[test]
    fn bad_thresholds_rejected() {
        use qz_core::Error;

        let mut c = QuantizerConfig::default();
        c.lower_threshold = 0.5;
        c.upper_threshold = 0.1;
        match c.validate() {
            Err(Error::Precondition(msg)) => assert!(msg.contains("thresholds")),
            other => panic!("expected precondition error, got {other:?}"),
        }
        c.lower_threshold = 0.0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn bad_rules_rejected() {
        let mut c = QuantizerConfig::default();
        c.grid_rule.lower = 0.0;
        assert!(c.validate().is_err());

        let mut c = QuantizerConfig::default();
        c.weight_rule.evaluation_points = 1;
        assert!(c.validate().is_err());
    }

    #[test]
    fn zero_iterations_rejected() {
        let mut c = QuantizerConfig::default();
        c.max_iterations = 0;
        assert!(c.validate().is_err());
    }
}
