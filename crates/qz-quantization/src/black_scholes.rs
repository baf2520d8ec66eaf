//! Quantized Black–Scholes façade.
//!
//! Quantizes the terminal spot `S_T` of a [`BlackScholesModel`] at
//! construction. The seed is the model's stratified conditional-mean
//! grid, the thresholds are the wide-support pair (an equity grid spans
//! several orders of magnitude), and the weights are plain probabilities,
//! so the distribution-function normalization uses a unit discount
//! factor.

use qz_core::{ensure, errors::Result, Real, Size, Time};
use qz_models::{BlackScholesModel, CharacteristicFunctionSource};

use crate::config::{ConvergenceReport, QuantizerConfig};
use crate::engine::{companion_weights, generate_grid};

/// The terminal spot of a Black–Scholes model quantized to a finite
/// grid.
#[derive(Debug, Clone)]
pub struct QuantizedBlackScholesModel {
    model: BlackScholesModel,
    maturity: Time,
    grid: Vec<Real>,
    weights: Vec<Real>,
    report: ConvergenceReport,
}

impl QuantizedBlackScholesModel {
    /// Quantize `S_T` at `maturity` to `level` points with the
    /// wide-support configuration.
    pub fn new(model: BlackScholesModel, maturity: Time, level: Size) -> Result<Self> {
        Self::with_config(model, maturity, level, QuantizerConfig::wide_support())
    }

    /// Quantize with an explicit configuration.
    pub fn with_config(
        model: BlackScholesModel,
        maturity: Time,
        level: Size,
        config: QuantizerConfig,
    ) -> Result<Self> {
        config.validate()?;
        ensure!(level >= 2, "quantization level must be at least 2, got {level}");
        ensure!(maturity > 0.0, "maturity must be positive, got {maturity}");

        let seed = model.stratified_grid(maturity, level)?;
        let cf = model.characteristic_function(maturity, "spot")?;
        let (grid, report) = generate_grid(&cf, &seed, &config)?;
        let weights = companion_weights(&cf, &grid, 1.0, &config)?;
        drop(cf);

        Ok(Self {
            model,
            maturity,
            grid,
            weights,
            report,
        })
    }

    /// The wrapped model.
    pub fn model(&self) -> &BlackScholesModel {
        &self.model
    }

    /// Quantization maturity.
    pub fn maturity(&self) -> Time {
        self.maturity
    }

    /// Number of grid points.
    pub fn level(&self) -> Size {
        self.grid.len()
    }

    /// The optimal grid, sorted ascending.
    pub fn grid(&self) -> &[Real] {
        &self.grid
    }

    /// The companion probabilities; they sum to one.
    pub fn weights(&self) -> &[Real] {
        &self.weights
    }

    /// How the grid fixed point ended.
    pub fn report(&self) -> ConvergenceReport {
        self.report
    }

    /// Expectation of the quantized spot, `Σ wᵢ xᵢ`.
    pub fn expectation(&self) -> Real {
        self.grid.iter().zip(&self.weights).map(|(x, w)| x * w).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantizes_the_terminal_spot() {
        let model = BlackScholesModel::new(100.0, 0.04, 0.2).unwrap();
        let q = QuantizedBlackScholesModel::new(model, 1.0, 10).unwrap();
        assert_eq!(q.grid().len(), 10);
        assert!((q.weights().iter().sum::<Real>() - 1.0).abs() < 1e-12);
        assert!(q.grid().windows(2).all(|w| w[0] <= w[1]));
        assert!(q.grid().iter().all(|&x| x > 0.0));
    }

    #[test]
    fn invalid_requests_rejected() {
        let model = BlackScholesModel::new(100.0, 0.04, 0.2).unwrap();
        assert!(QuantizedBlackScholesModel::new(model, 0.0, 10).is_err());
        assert!(QuantizedBlackScholesModel::new(model, 1.0, 1).is_err());
    }
}
