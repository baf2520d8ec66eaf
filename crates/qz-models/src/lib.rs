//! # qz-models
//!
//! Model abstractions for quantization-rs: the characteristic-function
//! source and multi-curve model traits, tenor structures, and two concrete
//! models — a flat-curve lognormal tenor model and a Black–Scholes equity
//! model — used as characteristic-function suppliers by the quantizer.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Characteristic-function and multi-curve model traits.
pub mod characteristic_function;

/// Tenors and tenor families.
pub mod tenor;

/// Black–Scholes equity model.
pub mod black_scholes;

/// Flat-curve lognormal tenor model.
pub mod lognormal_tenor_model;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use black_scholes::BlackScholesModel;
pub use characteristic_function::{
    CharacteristicFunction, CharacteristicFunctionSource, MultiCurveModel,
};
pub use lognormal_tenor_model::LognormalTenorModel;
pub use tenor::{Tenor, TenorFamily};
