//! # qz-math
//!
//! Mathematical building blocks for quantization-rs: the complex special
//! functions (Gamma, Beta, incomplete Beta over `num_complex::Complex64`),
//! deterministic fixed-count quadrature, and the tridiagonal matrix type
//! whose determinant and inverse are computed through continuant
//! recursions.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Numerical integration.
pub mod integrals;

/// Complex Gamma, Beta, and incomplete Beta.
pub mod special_functions;

/// Tridiagonal matrices with continuant-based inversion.
pub mod tridiagonal;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use integrals::{Integrator, TrapezoidalIntegral};
pub use special_functions::{beta, gamma, incomplete_beta};
pub use tridiagonal::TridiagonalMatrix;
