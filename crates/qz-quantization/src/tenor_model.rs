//! Quantized tenor-model façade.
//!
//! Wraps a [`MultiCurveModel`], quantizes one tenor component's accrual
//! factor at construction, and exposes the grid, the companion weights,
//! and the convergence report. All argument validation happens before the
//! model is asked for anything, so a malformed request never triggers a
//! characteristic-function evaluation.

use qz_core::{ensure, errors::Result, DiscountFactor, Real, Size, Time};
use qz_models::{MultiCurveModel, Tenor};

use crate::config::{ConvergenceReport, QuantizerConfig};
use crate::engine::{companion_weights, generate_grid};
use crate::seeding::tenor_seed;

/// A tenor component's accrual factor quantized to a finite grid.
#[derive(Debug, Clone)]
pub struct QuantizedTenorModel<M: MultiCurveModel> {
    model: M,
    tenor: Tenor,
    maturity: Time,
    config: QuantizerConfig,
    discount_factor: DiscountFactor,
    grid: Vec<Real>,
    weights: Vec<Real>,
    report: ConvergenceReport,
}

impl<M: MultiCurveModel> QuantizedTenorModel<M> {
    /// Quantize `tenor`'s accrual factor at `maturity` to `level` points.
    ///
    /// The accrual period `[maturity, maturity + length]` must fit inside
    /// the model's time horizon and the level must be at least 2.
    pub fn new(
        model: M,
        tenor: Tenor,
        maturity: Time,
        level: Size,
        config: QuantizerConfig,
    ) -> Result<Self> {
        config.validate()?;
        ensure!(level >= 2, "quantization level must be at least 2, got {level}");
        ensure!(maturity > 0.0, "maturity must be positive, got {maturity}");
        let payment = maturity + tenor.length();
        ensure!(
            payment <= model.time_horizon(),
            "accrual period ends at {payment}, beyond the model horizon {}",
            model.time_horizon()
        );

        let mean = 1.0 + tenor.length() * model.forward(tenor.name(), maturity)?;
        let seed = tenor_seed(tenor.family(), mean, tenor.length(), level)?;
        let discount_factor = model.discount_factor(payment)?;
        let cf = model.characteristic_function(maturity, tenor.name())?;
        let (grid, report) = generate_grid(&cf, &seed, &config)?;
        let weights = companion_weights(&cf, &grid, discount_factor, &config)?;
        drop(cf);

        Ok(Self {
            model,
            tenor,
            maturity,
            config,
            discount_factor,
            grid,
            weights,
            report,
        })
    }

    /// Re-quantize at the same tenor, maturity, and level on a copy of
    /// the model with its free parameters replaced.
    pub fn with_parameters(&self, parameters: &[Real]) -> Result<Self> {
        Self::new(
            self.model.with_parameters(parameters)?,
            self.tenor.clone(),
            self.maturity,
            self.grid.len(),
            self.config.clone(),
        )
    }

    /// The wrapped model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The quantized tenor.
    pub fn tenor(&self) -> &Tenor {
        &self.tenor
    }

    /// Fixing time of the quantized accrual factor.
    pub fn maturity(&self) -> Time {
        self.maturity
    }

    /// Discount factor to the accrual period's payment date.
    pub fn discount_factor(&self) -> DiscountFactor {
        self.discount_factor
    }

    /// Number of grid points.
    pub fn level(&self) -> Size {
        self.grid.len()
    }

    /// The optimal grid, sorted ascending.
    pub fn grid(&self) -> &[Real] {
        &self.grid
    }

    /// The companion weights; they sum to one.
    pub fn weights(&self) -> &[Real] {
        &self.weights
    }

    /// How the grid fixed point ended.
    pub fn report(&self) -> ConvergenceReport {
        self.report
    }

    /// Expectation of the quantized accrual factor, `Σ wᵢ xᵢ`.
    pub fn expectation(&self) -> Real {
        self.grid.iter().zip(&self.weights).map(|(x, w)| x * w).sum()
    }
}
