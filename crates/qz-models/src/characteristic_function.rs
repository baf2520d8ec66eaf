//! Characteristic-function and multi-curve model traits.
//!
//! A model enters the quantization machinery through exactly one seam: it
//! supplies the characteristic function `u ↦ E[exp(iuX)]` of the random
//! variable to be quantized, evaluated at complex arguments. Everything
//! downstream (grid fixed point, companion weights) is written against
//! that closure, not against any concrete model type.

use num_complex::Complex64;
use qz_core::{errors::Result, DiscountFactor, Rate, Real, Time};

/// A characteristic function `u ↦ E[exp(iuX)]`, callable at complex
/// arguments, borrowed from the model that produced it.
pub type CharacteristicFunction<'a> = Box<dyn Fn(Complex64) -> Complex64 + 'a>;

/// A model that can hand out the characteristic function of one of its
/// components at a given maturity.
pub trait CharacteristicFunctionSource {
    /// Characteristic function of the named component's value at
    /// `maturity`. Fails when the component is unknown or the maturity
    /// lies outside the model's reach.
    fn characteristic_function(
        &self,
        maturity: Time,
        component: &str,
    ) -> Result<CharacteristicFunction<'_>>;
}

/// A multi-curve interest-rate model: forward curves per tenor component,
/// a discounting curve, and a finite time horizon.
pub trait MultiCurveModel: CharacteristicFunctionSource {
    /// Instantaneous forward rate of the named component's curve at
    /// `maturity`.
    fn forward(&self, component: &str, maturity: Time) -> Result<Rate>;

    /// Discount factor for a payment at `maturity`.
    fn discount_factor(&self, maturity: Time) -> Result<DiscountFactor>;

    /// Largest time the model is defined up to.
    fn time_horizon(&self) -> Time;

    /// A copy of the model with its free parameters replaced. Used by
    /// calibration loops that re-quantize after every parameter move.
    fn with_parameters(&self, parameters: &[Real]) -> Result<Self>
    where
        Self: Sized;
}
