//! Flat-curve lognormal tenor model.
//!
//! Each tenor component carries the random accrual factor
//! `X = 1 + δ·L(T)`, modelled lognormal with mean `e = 1 + δ·f` for a flat
//! forward rate `f` and a single volatility. The model hands the
//! quantizer the characteristic function of `ln X`,
//! `φ(u) = exp(iuμ − σ²Tu²/2)` with `μ = ln e − σ²T/2`. Discounting is a
//! flat continuously compounded curve.

use num_complex::Complex64;
use qz_core::{
    ensure,
    errors::{Error, Result},
    DiscountFactor, Rate, Real, Time,
};

use crate::characteristic_function::{
    CharacteristicFunction, CharacteristicFunctionSource, MultiCurveModel,
};
use crate::tenor::Tenor;

/// A multi-curve model with flat forward and discount curves and
/// lognormal tenor accrual factors.
#[derive(Debug, Clone)]
pub struct LognormalTenorModel {
    tenors: Vec<Tenor>,
    forward_rate: Rate,
    volatility: Real,
    discount_rate: Rate,
    horizon: Time,
}

impl LognormalTenorModel {
    /// Build the model. Volatility and horizon must be positive.
    pub fn new(
        tenors: Vec<Tenor>,
        forward_rate: Rate,
        volatility: Real,
        discount_rate: Rate,
        horizon: Time,
    ) -> Result<Self> {
        ensure!(
            volatility > 0.0,
            "LognormalTenorModel: volatility must be positive, got {volatility}"
        );
        ensure!(
            horizon > 0.0,
            "LognormalTenorModel: time horizon must be positive, got {horizon}"
        );
        Ok(Self {
            tenors,
            forward_rate,
            volatility,
            discount_rate,
            horizon,
        })
    }

    /// The tenors the model knows about.
    pub fn tenors(&self) -> &[Tenor] {
        &self.tenors
    }

    fn tenor(&self, component: &str) -> Result<&Tenor> {
        self.tenors
            .iter()
            .find(|t| t.name() == component)
            .ok_or_else(|| {
                Error::InvalidArgument(format!("unknown tenor component '{component}'"))
            })
    }

    fn check_maturity(&self, maturity: Time) -> Result<()> {
        ensure!(maturity > 0.0, "maturity must be positive, got {maturity}");
        ensure!(
            maturity <= self.horizon,
            "maturity {maturity} exceeds model horizon {}",
            self.horizon
        );
        Ok(())
    }
}

impl CharacteristicFunctionSource for LognormalTenorModel {
    fn characteristic_function(
        &self,
        maturity: Time,
        component: &str,
    ) -> Result<CharacteristicFunction<'_>> {
        let tenor = self.tenor(component)?;
        self.check_maturity(maturity)?;
        let e = 1.0 + tenor.length() * self.forward_rate;
        let variance = self.volatility * self.volatility * maturity;
        let mu = e.ln() - 0.5 * variance;
        Ok(Box::new(move |u: Complex64| {
            (Complex64::i() * u * mu - 0.5 * variance * u * u).exp()
        }))
    }
}

impl MultiCurveModel for LognormalTenorModel {
    fn forward(&self, component: &str, maturity: Time) -> Result<Rate> {
        self.tenor(component)?;
        self.check_maturity(maturity)?;
        Ok(self.forward_rate)
    }

    fn discount_factor(&self, maturity: Time) -> Result<DiscountFactor> {
        ensure!(maturity >= 0.0, "maturity must be non-negative, got {maturity}");
        Ok((-self.discount_rate * maturity).exp())
    }

    fn time_horizon(&self) -> Time {
        self.horizon
    }

    fn with_parameters(&self, parameters: &[Real]) -> Result<Self> {
        if parameters.len() != 2 {
            return Err(Error::InvalidArgument(format!(
                "LognormalTenorModel has 2 free parameters (forward rate, volatility), got {}",
                parameters.len()
            )));
        }
        Self::new(
            self.tenors.clone(),
            parameters[0],
            parameters[1],
            self.discount_rate,
            self.horizon,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model() -> LognormalTenorModel {
        LognormalTenorModel::new(
            vec![Tenor::new("EUR-6M", 0.5).unwrap()],
            0.02,
            0.05,
            0.02,
            10.0,
        )
        .unwrap()
    }

    #[test]
    fn cf_is_one_at_origin() {
        let m = model();
        let cf = m.characteristic_function(1.0, "EUR-6M").unwrap();
        let v = cf(Complex64::new(0.0, 0.0));
        assert_relative_eq!(v.re, 1.0, epsilon = 1e-14);
        assert_relative_eq!(v.im, 0.0, epsilon = 1e-14);
    }

    #[test]
    fn cf_at_minus_i_recovers_mean() {
        // φ(−i) = E[exp(ln X)] = E[X] = 1 + δ·f
        let m = model();
        let cf = m.characteristic_function(1.0, "EUR-6M").unwrap();
        let v = cf(Complex64::new(0.0, -1.0));
        assert_relative_eq!(v.re, 1.01, epsilon = 1e-12);
        assert_relative_eq!(v.im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn cf_modulus_bounded_on_real_axis() {
        let m = model();
        let cf = m.characteristic_function(1.0, "EUR-6M").unwrap();
        for u in [0.1, 1.0, 5.0, 25.0] {
            assert!(cf(Complex64::new(u, 0.0)).norm() <= 1.0 + 1e-14);
        }
    }

    #[test]
    fn unknown_component_rejected() {
        let m = model();
        assert!(m.characteristic_function(1.0, "EUR-1Y").is_err());
        assert!(m.forward("EUR-1Y", 1.0).is_err());
    }

    #[test]
    fn maturity_beyond_horizon_rejected() {
        let m = model();
        assert!(m.characteristic_function(11.0, "EUR-6M").is_err());
        assert!(m.characteristic_function(0.0, "EUR-6M").is_err());
    }

    #[test]
    fn discounting_is_flat() {
        let m = model();
        assert_relative_eq!(
            m.discount_factor(1.5).unwrap(),
            (-0.02f64 * 1.5).exp(),
            epsilon = 1e-15
        );
        assert!(m.discount_factor(-0.5).is_err());
    }

    #[test]
    fn with_parameters_replaces_forward_and_volatility() {
        let m = model().with_parameters(&[0.03, 0.1]).unwrap();
        assert_relative_eq!(m.forward("EUR-6M", 1.0).unwrap(), 0.03);
        assert!(model().with_parameters(&[0.03]).is_err());
        assert!(model().with_parameters(&[0.03, -0.1]).is_err());
    }
}
