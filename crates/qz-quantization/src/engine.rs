//! The Newton fixed-point engine and the Gil–Pelaez companion weights.
//!
//! `generate_grid` drives the stationarity condition of the quadratic
//! distortion: at each iteration the distortion gradient and its
//! tridiagonal Jacobian are assembled from Fourier integrals of the
//! characteristic function against complex Beta kernels, the Jacobian is
//! inverted through its continuant recursions, and the Newton step is
//! folded into the update `r_i = |v_i − (J⁻¹g)_i|`. Updates that collapse
//! below the lower threshold or run away past the upper threshold are
//! replaced by the corresponding seed point; the grid is re-sorted after
//! every iteration and the loop stops when consecutive grids are closer
//! than the tolerance in Euclidean norm.
//!
//! `companion_weights` recovers the Voronoi-cell probabilities of a grid
//! by Gil–Pelaez inversion of the distribution function at the cell
//! midpoints. The two boundary cells are half-lines and get the
//! half-mass formulas; the result is normalized to sum to one.
//!
//! Both functions take the characteristic function of the *logarithm* of
//! the quantized variable and a strictly positive grid.

use nalgebra::DVector;
use num_complex::Complex64;
use qz_core::{ensure, errors::Result, fail, Real};
use qz_math::{beta, Integrator, TrapezoidalIntegral, TridiagonalMatrix};
use std::f64::consts::PI;

use crate::config::{ConvergenceReport, QuantizerConfig, FREQUENCY_SHIFT};

fn check_grid(points: &[Real], what: &str) -> Result<()> {
    ensure!(
        points.len() >= 2,
        "{what} needs at least 2 points, got {}",
        points.len()
    );
    ensure!(
        points.iter().all(|&x| x > 0.0),
        "{what} must be strictly positive everywhere"
    );
    Ok(())
}

/// Run the Newton fixed point from `seed` and return the optimal grid
/// together with a convergence report.
///
/// `cf` is the characteristic function of the logarithm of the variable;
/// `seed` must be strictly positive and is also the fallback for
/// out-of-band updates.
pub fn generate_grid<F>(
    cf: F,
    seed: &[Real],
    config: &QuantizerConfig,
) -> Result<(Vec<Real>, ConvergenceReport)>
where
    F: Fn(Complex64) -> Complex64,
{
    config.validate()?;
    check_grid(seed, "quantizer seed")?;
    let n = seed.len();
    let quad = TrapezoidalIntegral::new(config.grid_rule.evaluation_points)?;
    let (lo, up) = (config.grid_rule.lower, config.grid_rule.upper);
    let shifted = |u: Real| cf(Complex64::new(u, FREQUENCY_SHIFT));

    let mut v = seed.to_vec();
    let mut distance = Real::INFINITY;
    for iteration in 1..=config.max_iterations {
        let mut next = {
            // Ratios of the Voronoi cell edges to the grid point; the
            // two boundary cells are cut off at the thresholds.
            let edges = |j: usize| -> (Real, Real) {
                let a = if j == 0 {
                    config.lower_threshold / v[0]
                } else {
                    (v[j - 1] + v[j]) / (2.0 * v[j])
                };
                let b = if j < n - 1 {
                    2.0 * v[j] / (v[j] + v[j + 1])
                } else {
                    v[n - 1] / config.upper_threshold
                };
                (a, b)
            };
            let one = Complex64::new(1.0, 0.0);

            let mut gradient = Vec::with_capacity(n);
            for j in 0..n {
                let (a, b) = edges(j);
                let ln_vj = v[j].ln();
                let integral = quad.integrate(
                    |u| {
                        let e = (-Complex64::i() * u * ln_vj).exp() * shifted(u);
                        let a_pow = Complex64::new(a, 0.0).powc(Complex64::new(0.0, -u));
                        let t1 = beta(
                            Complex64::new(FREQUENCY_SHIFT, -u),
                            Complex64::new(2.0, FREQUENCY_SHIFT),
                        ) * (one
                            - a_pow
                            - a_pow * (1.0 - a)
                                / beta(
                                    Complex64::new(FREQUENCY_SHIFT, -u),
                                    Complex64::new(1.0, FREQUENCY_SHIFT),
                                ));
                        let b_pow = Complex64::new(b, 0.0).powc(Complex64::new(-1.0, u));
                        // The first cell's divisor carries the
                        // first-order kernel, every other cell the
                        // second-order one.
                        let divisor = if j == 0 {
                            beta(Complex64::new(-1.0, u), Complex64::new(1.0, FREQUENCY_SHIFT))
                        } else {
                            beta(Complex64::new(-1.0, u), Complex64::new(2.0, FREQUENCY_SHIFT))
                        };
                        let t2 = beta(
                            Complex64::new(-1.0, u),
                            Complex64::new(2.0, FREQUENCY_SHIFT),
                        ) * (one - b_pow - b_pow * (1.0 - b) / divisor);
                        (e * (t1 - t2)).re
                    },
                    lo,
                    up,
                )?;
                gradient.push(2.0 / PI * v[j] * integral);
            }

            // Distribution-function integrals at the cell midpoints,
            // shared by both off-diagonal bands.
            let mut cell = Vec::with_capacity(n - 1);
            for j in 0..n - 1 {
                let ln_mid = (0.5 * (v[j] + v[j + 1])).ln();
                cell.push(quad.integrate(
                    |u| ((-Complex64::i() * u * ln_mid).exp() * shifted(u)).re,
                    lo,
                    up,
                )?);
            }

            let mut sub = vec![0.0; n];
            let mut sup = vec![0.0; n];
            for j in 0..n {
                if j > 0 {
                    sub[j] =
                        -2.0 / ((v[j] + v[j - 1]) * PI) * (v[j] - v[j - 1]) * 0.5 * cell[j - 1];
                }
                if j < n - 1 {
                    sup[j] =
                        -2.0 / ((v[j + 1] + v[j]) * PI) * (v[j + 1] - v[j]) * 0.5 * cell[j];
                }
            }
            let mut diag = Vec::with_capacity(n);
            for j in 0..n {
                let (a, b) = edges(j);
                let ln_vj = v[j].ln();
                let integral = quad.integrate(
                    |u| {
                        let e = (-Complex64::i() * u * ln_vj).exp() * shifted(u);
                        let a_pow = Complex64::new(a, 0.0).powc(Complex64::new(0.0, -u));
                        let b_pow = Complex64::new(b, 0.0).powc(Complex64::new(0.0, u));
                        let t1 = beta(
                            Complex64::new(FREQUENCY_SHIFT, -u),
                            Complex64::new(1.0, FREQUENCY_SHIFT),
                        ) * (one - a_pow);
                        let t2 = beta(
                            Complex64::new(FREQUENCY_SHIFT, u),
                            Complex64::new(1.0, FREQUENCY_SHIFT),
                        ) * (one - b_pow);
                        (e * (t1 + t2)).re
                    },
                    lo,
                    up,
                )?;
                diag.push(2.0 / PI * integral + sup[j] + sub[j]);
            }

            let jacobian =
                TridiagonalMatrix::from_bands(sub[1..].to_vec(), diag, sup[..n - 1].to_vec())?;
            let inverse = jacobian.inverse();

            let mut next = Vec::with_capacity(n);
            for i in 0..n {
                let step: Real = (0..n).map(|j| inverse[i][j] * gradient[j]).sum();
                let r = (v[i] - step).abs();
                if r >= config.upper_threshold || r <= config.lower_threshold {
                    next.push(seed[i]);
                } else {
                    next.push(r);
                }
            }
            next
        };

        next.sort_unstable_by(Real::total_cmp);
        distance =
            (DVector::from_column_slice(&v) - DVector::from_column_slice(&next)).norm();
        v = next;
        if distance < config.tolerance {
            return Ok((
                v,
                ConvergenceReport {
                    iterations: iteration,
                    final_distance: distance,
                    converged: true,
                },
            ));
        }
    }
    Ok((
        v,
        ConvergenceReport {
            iterations: config.max_iterations,
            final_distance: distance,
            converged: false,
        },
    ))
}

/// Voronoi-cell probabilities of `grid` under the law with
/// characteristic function `cf` (of the variable's logarithm), obtained
/// by Gil–Pelaez inversion at the cell midpoints.
///
/// `discount_factor` rescales the boundary half-masses the way the
/// model's numéraire-adjusted distribution function is quoted; the
/// returned weights are normalized to sum to one.
pub fn companion_weights<F>(
    cf: F,
    grid: &[Real],
    discount_factor: Real,
    config: &QuantizerConfig,
) -> Result<Vec<Real>>
where
    F: Fn(Complex64) -> Complex64,
{
    config.validate()?;
    check_grid(grid, "quantizer grid")?;
    ensure!(
        discount_factor > 0.0,
        "discount factor must be positive, got {discount_factor}"
    );
    let n = grid.len();
    let quad = TrapezoidalIntegral::new(config.weight_rule.evaluation_points)?;
    let (lo, up) = (config.weight_rule.lower, config.weight_rule.upper);
    let df = discount_factor;

    let mut cell = Vec::with_capacity(n - 1);
    for i in 0..n - 1 {
        let ln_mid = (0.5 * (grid[i] + grid[i + 1])).ln();
        cell.push(quad.integrate(
            |u| {
                ((-Complex64::i() * u * ln_mid).exp() * cf(Complex64::new(u, FREQUENCY_SHIFT))
                    / (Complex64::i() * u))
                    .re
            },
            lo,
            up,
        )?);
    }

    let mut weights = vec![0.0; n];
    weights[0] = (df * 0.5 - cell[0] / PI).abs() / df;
    weights[n - 1] = (df * 0.5 + cell[n - 2] / PI).abs() / df;
    for i in 1..n - 1 {
        weights[i] = (cell[i - 1] - cell[i]).abs() / (PI * df);
    }

    let total: Real = weights.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        fail!("degenerate companion weights, total mass {total}");
    }
    for w in &mut weights {
        *w /= total;
    }
    Ok(weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeding::tenor_seed;
    use approx::assert_relative_eq;
    use qz_models::TenorFamily;

    // Characteristic function of N(mu, variance), i.e. of the log of a
    // lognormal variable.
    fn normal_cf(mu: Real, variance: Real) -> impl Fn(Complex64) -> Complex64 {
        move |u: Complex64| (Complex64::i() * u * mu - 0.5 * variance * u * u).exp()
    }

    fn lognormal_scenario() -> (impl Fn(Complex64) -> Complex64, Vec<Real>) {
        // accrual factor X with mean 1.01, 5 % vol, one year
        let e: Real = 1.01;
        let variance = 0.05 * 0.05;
        let cf = normal_cf(e.ln() - 0.5 * variance, variance);
        let seed = tenor_seed(TenorFamily::SixMonth, e, 0.5, 10).unwrap();
        (cf, seed)
    }

    #[test]
    fn default_thresholds_fall_back_to_seed() {
        // With the narrow default band every Newton update is replaced
        // by its seed point, so the very first iteration reproduces the
        // (already sorted) seed and converges at distance zero.
        let (cf, seed) = lognormal_scenario();
        let (grid, report) = generate_grid(&cf, &seed, &QuantizerConfig::default()).unwrap();
        assert!(report.converged);
        assert_eq!(report.iterations, 1);
        assert_eq!(report.final_distance, 0.0);
        for (g, s) in grid.iter().zip(&seed) {
            assert_eq!(g.to_bits(), s.to_bits());
        }
    }

    #[test]
    fn wide_thresholds_take_genuine_newton_steps() {
        let (cf, seed) = lognormal_scenario();
        let config = QuantizerConfig {
            lower_threshold: 0.5,
            upper_threshold: 2.0,
            ..QuantizerConfig::default()
        };
        let (grid, _report) = generate_grid(&cf, &seed, &config).unwrap();
        assert_eq!(grid.len(), seed.len());
        assert!(grid.iter().zip(&seed).any(|(g, s)| g != s), "grid never moved");
        for w in grid.windows(2) {
            assert!(w[0] <= w[1], "grid must be sorted");
        }
        assert!(grid.iter().all(|&x| x > 0.0));
    }

    #[test]
    fn grid_generation_is_deterministic() {
        let (cf, seed) = lognormal_scenario();
        let config = QuantizerConfig {
            lower_threshold: 0.5,
            upper_threshold: 2.0,
            ..QuantizerConfig::default()
        };
        let (a, ra) = generate_grid(&cf, &seed, &config).unwrap();
        let (b, rb) = generate_grid(&cf, &seed, &config).unwrap();
        assert_eq!(ra, rb);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.to_bits(), y.to_bits());
        }
    }

    #[test]
    fn weights_are_a_probability_vector() {
        let (cf, seed) = lognormal_scenario();
        let df = (-0.02f64 * 1.5).exp();
        let weights = companion_weights(&cf, &seed, df, &QuantizerConfig::default()).unwrap();
        assert_eq!(weights.len(), seed.len());
        assert_relative_eq!(weights.iter().sum::<Real>(), 1.0, epsilon = 1e-12);
        assert!(weights.iter().all(|&w| w >= 0.0));
        // mass concentrates near the mean of the lognormal
        let peak = weights
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap();
        assert!(peak > 0 && peak < seed.len() - 1);
    }

    #[test]
    fn weighted_mean_approximates_the_distribution_mean() {
        let (cf, seed) = lognormal_scenario();
        let weights = companion_weights(&cf, &seed, 1.0, &QuantizerConfig::default()).unwrap();
        let mean: Real = seed.iter().zip(&weights).map(|(x, w)| x * w).sum();
        assert_relative_eq!(mean, 1.01, epsilon = 0.01);
    }

    #[test]
    fn invalid_inputs_rejected() {
        let (cf, seed) = lognormal_scenario();
        assert!(generate_grid(&cf, &seed[..1], &QuantizerConfig::default()).is_err());
        assert!(generate_grid(&cf, &[1.0, -1.0], &QuantizerConfig::default()).is_err());
        let mut bad = QuantizerConfig::default();
        bad.tolerance = 0.0;
        assert!(generate_grid(&cf, &seed, &bad).is_err());
        assert!(companion_weights(&cf, &seed, 0.0, &QuantizerConfig::default()).is_err());
        assert!(companion_weights(&cf, &seed[..1], 1.0, &QuantizerConfig::default()).is_err());
    }
}
