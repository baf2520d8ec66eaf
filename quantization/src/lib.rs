//! # quantization
//!
//! Optimal scalar quantization of a random variable known only through
//! the characteristic function of its logarithm, with companion weights
//! recovered by Gil–Pelaez inversion and pricing on the resulting
//! discrete distribution.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `qz-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! quantization = "0.1"
//! ```
//!
//! ```rust
//! use quantization::models::BlackScholesModel;
//! use quantization::quantization::QuantizedBlackScholesModel;
//!
//! let model = BlackScholesModel::new(100.0, 0.04, 0.2).unwrap();
//! let quantized = QuantizedBlackScholesModel::new(model, 1.0, 10).unwrap();
//! assert!((quantized.weights().iter().sum::<f64>() - 1.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use qz_core as core;

/// Complex special functions, quadrature, and tridiagonal continuants.
pub use qz_math as math;

/// Model traits, tenors, and the concrete reference models.
pub use qz_models as models;

/// Quantizer engine, configuration, and quantized-model façades.
pub use qz_quantization as quantization;

/// Pricing on quantized grids.
pub use qz_pricing as pricing;
