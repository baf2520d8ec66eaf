//! End-to-end quantization of a lognormal tenor accrual factor, checked
//! against the exact lognormal distortion.

use qz_models::{LognormalTenorModel, Tenor};
use qz_quantization::{QuantizedTenorModel, QuantizerConfig};
use statrs::distribution::{ContinuousCDF, Normal};

const FORWARD: f64 = 0.02;
const VOLATILITY: f64 = 0.05;
const MATURITY: f64 = 1.0;
const TENOR_LENGTH: f64 = 0.5;

fn model() -> LognormalTenorModel {
    LognormalTenorModel::new(
        vec![Tenor::new("EUR-6M", TENOR_LENGTH).unwrap()],
        FORWARD,
        VOLATILITY,
        0.02,
        10.0,
    )
    .unwrap()
}

fn quantize(level: usize) -> QuantizedTenorModel<LognormalTenorModel> {
    let config = QuantizerConfig {
        lower_threshold: 0.5,
        upper_threshold: 2.0,
        ..QuantizerConfig::default()
    };
    QuantizedTenorModel::new(
        model(),
        Tenor::new("EUR-6M", TENOR_LENGTH).unwrap(),
        MATURITY,
        level,
        config,
    )
    .unwrap()
}

/// Exact `E[min_i (X − x_i)²]` for lognormal `X`, by partial moments of
/// each Voronoi cell.
fn distortion(grid: &[f64]) -> f64 {
    let e = 1.0 + TENOR_LENGTH * FORWARD;
    let sdv = VOLATILITY * MATURITY.sqrt();
    let mu = e.ln() - 0.5 * sdv * sdv;
    let normal = Normal::new(0.0, 1.0).unwrap();
    let phi = |z: f64| normal.cdf(z);
    let z_of = |x: f64| {
        if x == 0.0 {
            f64::NEG_INFINITY
        } else if x.is_infinite() {
            f64::INFINITY
        } else {
            (x.ln() - mu) / sdv
        }
    };

    let n = grid.len();
    let mut bounds = Vec::with_capacity(n + 1);
    bounds.push(0.0);
    for w in grid.windows(2) {
        bounds.push(0.5 * (w[0] + w[1]));
    }
    bounds.push(f64::INFINITY);

    let mut d = 0.0;
    for i in 0..n {
        let (za, zb) = (z_of(bounds[i]), z_of(bounds[i + 1]));
        let m0 = phi(zb) - phi(za);
        let m1 = (mu + 0.5 * sdv * sdv).exp() * (phi(zb - sdv) - phi(za - sdv));
        let m2 = (2.0 * mu + 2.0 * sdv * sdv).exp() * (phi(zb - 2.0 * sdv) - phi(za - 2.0 * sdv));
        d += m2 - 2.0 * grid[i] * m1 + grid[i] * grid[i] * m0;
    }
    d
}

#[test]
fn distortion_decreases_with_level() {
    let d: Vec<f64> = [5usize, 10, 20]
        .iter()
        .map(|&level| {
            let q = quantize(level);
            assert!(q.grid().windows(2).all(|w| w[0] < w[1]));
            distortion(q.grid())
        })
        .collect();
    assert!(d[0] > d[1], "D(5) = {} vs D(10) = {}", d[0], d[1]);
    assert!(d[1] > d[2], "D(10) = {} vs D(20) = {}", d[1], d[2]);
    assert!(d[2] < 5e-4, "D(20) = {}", d[2]);
}

#[test]
fn quantized_expectation_tracks_the_accrual_mean() {
    let q = quantize(10);
    let e = 1.0 + TENOR_LENGTH * FORWARD;
    assert!(
        (q.expectation() - e).abs() < 0.01,
        "expectation {} vs mean {e}",
        q.expectation()
    );
}

#[test]
fn weights_peak_at_the_distribution_mode() {
    let q = quantize(20);
    let weights = q.weights();
    let peak = weights
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .unwrap();
    // the mode of the narrow lognormal sits near the center of the grid
    assert!(peak > 2 && peak < 18, "peak at {peak}");
    let mode = q.grid()[peak];
    assert!((mode - 1.01).abs() < 0.2, "peak point {mode}");
}
