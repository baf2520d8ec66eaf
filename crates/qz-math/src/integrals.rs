//! Numerical integration.
//!
//! The quantization integrals need a deterministic rule with a fixed,
//! configured cost: the same integrand sampled at the same abscissae must
//! produce bit-identical results across runs. The composite trapezoidal
//! rule over equally spaced evaluation points provides exactly that.
//!
//! Integrands with a singularity at the origin are handled by the caller
//! fixing the lower bound slightly away from zero, not by guarding here.

use qz_core::{
    errors::{Error, Result},
    Real,
};

/// A numerical integrator.
pub trait Integrator {
    /// Integrate `f` on `[a, b]`.
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real>;
}

/// Composite trapezoidal rule over a fixed number of equally spaced
/// evaluation points.
///
/// With `n` evaluation points the interval is partitioned into `n − 1`
/// equal panels. No adaptive refinement and no state between calls.
#[derive(Debug, Clone)]
pub struct TrapezoidalIntegral {
    evaluation_points: usize,
}

impl TrapezoidalIntegral {
    /// Create a trapezoidal integrator with the given number of
    /// evaluation points (at least 2).
    pub fn new(evaluation_points: usize) -> Result<Self> {
        if evaluation_points < 2 {
            return Err(Error::InvalidArgument(format!(
                "TrapezoidalIntegral: need at least 2 evaluation points, got {evaluation_points}"
            )));
        }
        Ok(Self { evaluation_points })
    }

    /// Number of evaluation points.
    pub fn evaluation_points(&self) -> usize {
        self.evaluation_points
    }
}

impl Integrator for TrapezoidalIntegral {
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real> {
        if a == b {
            return Ok(0.0);
        }
        let n = self.evaluation_points;
        let h = (b - a) / (n - 1) as Real;
        let mut sum = 0.5 * (f(a) + f(b));
        for i in 1..n - 1 {
            sum += f(a + i as Real * h);
        }
        Ok(sum * h)
    }
}
