//! Black–Scholes equity model.
//!
//! Serves two roles: a characteristic-function source for the quantizer
//! (the characteristic function of `ln S_T`, which is Gaussian) and the
//! closed-form European option values the quantized prices are checked
//! against. Also provides the stratified conditional-mean grid the
//! quantizer is seeded with.

use num_complex::Complex64;
use qz_core::{
    ensure,
    errors::{Error, Result},
    Rate, Real, Size, Time,
};
use statrs::distribution::{ContinuousCDF, Normal};

use crate::characteristic_function::{CharacteristicFunction, CharacteristicFunctionSource};

fn standard_normal() -> Result<Normal> {
    Normal::new(0.0, 1.0).map_err(|e| Error::Runtime(e.to_string()))
}

/// Geometric Brownian motion under the risk-neutral measure:
/// `dS = rS dt + σS dW`.
#[derive(Debug, Clone, Copy)]
pub struct BlackScholesModel {
    spot: Real,
    rate: Rate,
    volatility: Real,
}

impl BlackScholesModel {
    /// Build the model. Spot and volatility must be positive.
    pub fn new(spot: Real, rate: Rate, volatility: Real) -> Result<Self> {
        ensure!(spot > 0.0, "BlackScholesModel: spot must be positive, got {spot}");
        ensure!(
            volatility > 0.0,
            "BlackScholesModel: volatility must be positive, got {volatility}"
        );
        Ok(Self { spot, rate, volatility })
    }

    /// Initial spot.
    pub fn spot(&self) -> Real {
        self.spot
    }

    /// Risk-free rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// Lognormal volatility.
    pub fn volatility(&self) -> Real {
        self.volatility
    }

    /// Forward value `E[S_T] = S₀·exp(rT)`.
    pub fn forward_value(&self, maturity: Time) -> Real {
        self.spot * (self.rate * maturity).exp()
    }

    fn d1_d2(&self, maturity: Time, strike: Real) -> (Real, Real) {
        let sd = self.volatility * maturity.sqrt();
        let d1 = ((self.spot / strike).ln()
            + (self.rate + 0.5 * self.volatility * self.volatility) * maturity)
            / sd;
        (d1, d1 - sd)
    }

    fn check_option(&self, maturity: Time, strike: Real) -> Result<()> {
        ensure!(maturity > 0.0, "option maturity must be positive, got {maturity}");
        ensure!(strike > 0.0, "strike must be positive, got {strike}");
        Ok(())
    }

    /// Closed-form European call value.
    pub fn call_value(&self, maturity: Time, strike: Real) -> Result<Real> {
        self.check_option(maturity, strike)?;
        let normal = standard_normal()?;
        let (d1, d2) = self.d1_d2(maturity, strike);
        let df = (-self.rate * maturity).exp();
        Ok(self.spot * normal.cdf(d1) - strike * df * normal.cdf(d2))
    }

    /// Closed-form European put value.
    pub fn put_value(&self, maturity: Time, strike: Real) -> Result<Real> {
        self.check_option(maturity, strike)?;
        let normal = standard_normal()?;
        let (d1, d2) = self.d1_d2(maturity, strike);
        let df = (-self.rate * maturity).exp();
        Ok(strike * df * normal.cdf(-d2) - self.spot * normal.cdf(-d1))
    }

    /// Conditional means of `S_T` over `n` equal-probability strata.
    ///
    /// With `z_i = Φ⁻¹(i/n)` the i-th point is
    /// `E[S_T]·(Φ(z_{i+1} − σ√T) − Φ(z_i − σ√T))·n`, the expectation of
    /// `S_T` restricted to its i-th probability-1/n slice. The points are
    /// strictly increasing and average to the forward, which makes them a
    /// natural quantizer seed.
    pub fn stratified_grid(&self, maturity: Time, n: Size) -> Result<Vec<Real>> {
        ensure!(maturity > 0.0, "maturity must be positive, got {maturity}");
        ensure!(n >= 2, "stratified grid needs at least 2 points, got {n}");
        let normal = standard_normal()?;
        let forward = self.forward_value(maturity);
        let sd = self.volatility * maturity.sqrt();
        let mut grid = Vec::with_capacity(n);
        let mut lower = 0.0; // Φ(z_0 − sd) with z_0 = −∞
        for i in 1..=n {
            let upper = if i == n {
                1.0
            } else {
                normal.cdf(normal.inverse_cdf(i as Real / n as Real) - sd)
            };
            grid.push(forward * (upper - lower) * n as Real);
            lower = upper;
        }
        Ok(grid)
    }
}

impl CharacteristicFunctionSource for BlackScholesModel {
    /// Characteristic function of `ln S_T`; the component tag is ignored,
    /// the model has a single underlying.
    fn characteristic_function(
        &self,
        maturity: Time,
        _component: &str,
    ) -> Result<CharacteristicFunction<'_>> {
        ensure!(maturity > 0.0, "maturity must be positive, got {maturity}");
        let variance = self.volatility * self.volatility * maturity;
        let mu = self.spot.ln() + self.rate * maturity - 0.5 * variance;
        Ok(Box::new(move |u: Complex64| {
            (Complex64::i() * u * mu - 0.5 * variance * u * u).exp()
        }))
    }
}
