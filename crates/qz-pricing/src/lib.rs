//! # qz-pricing
//!
//! Pricing against quantized distributions: expectations of payoffs over
//! a grid-and-weights pair, and a European option engine on the
//! quantized Black–Scholes terminal spot.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// European options on a quantized terminal spot.
pub mod quantization_european_engine;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use quantization_european_engine::{discrete_expectation, QuantizationEuropeanEngine};
