//! # qz-quantization
//!
//! Optimal scalar quantization of a random variable known through the
//! characteristic function of its logarithm. The grid is the stationary
//! point of the quadratic distortion, found by a Newton iteration whose
//! gradient and tridiagonal Jacobian are Fourier integrals of Beta-kernel
//! integrands; the companion weights are the Voronoi-cell probabilities
//! recovered by Gil–Pelaez inversion at the cell midpoints.
//!
//! The engine itself is a pair of pure functions over a characteristic
//! function closure; [`QuantizedTenorModel`] and
//! [`QuantizedBlackScholesModel`] wrap them for the two model families.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Quantizer configuration and convergence reporting.
pub mod config;

/// Initial grid construction.
pub mod seeding;

/// The Newton fixed-point engine and companion weights.
pub mod engine;

/// Quantized tenor-model façade.
pub mod tenor_model;

/// Quantized Black–Scholes façade.
pub mod black_scholes;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use black_scholes::QuantizedBlackScholesModel;
pub use config::{ConvergenceReport, IntegrationRule, QuantizerConfig, FREQUENCY_SHIFT};
pub use engine::{companion_weights, generate_grid};
pub use seeding::{tenor_seed, SeedRule};
pub use tenor_model::QuantizedTenorModel;
