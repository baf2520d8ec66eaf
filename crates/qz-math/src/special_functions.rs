//! Gamma and Beta functions continued to the complex plane.
//!
//! The Gamma function uses the Lanczos approximation (g = 7, 9-term
//! coefficient table) for `Re(z) ≥ 0.5` and the reflection formula
//! `Γ(z) = π / (sin(πz)·Γ(1−z))` otherwise. The reflected argument always
//! has real part ≥ 0.5, so the reflection branch evaluates the Lanczos
//! core directly — there is no recursion.
//!
//! The Gamma function has poles at the non-positive integers. At zero the
//! reflection denominator vanishes exactly and the result is non-finite;
//! at the negative integers `sin(πn)` only rounds to ~1e-16, so the pole
//! surfaces as an astronomically large finite value instead. Either way
//! the blow-up propagates through callers; poles are not a guarded error.

use std::f64::consts::PI;

use num_complex::Complex64;
use num_traits::Zero;
use qz_core::Real;

/// Lanczos parameter g.
const LANCZOS_G: f64 = 7.0;

/// Lanczos coefficients for g = 7, n = 9.
const LANCZOS_P: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Complex Gamma function.
///
/// Poles at non-positive integers blow up rather than erroring: zero
/// yields a non-finite value, the negative integers a huge finite one
/// (the reflection sine does not round to exactly zero there).
pub fn gamma(z: Complex64) -> Complex64 {
    if z.re < 0.5 {
        // Reflection formula; 1 − z has real part ≥ 0.5, so the Lanczos
        // core applies without further substitution.
        PI / ((z * PI).sin() * lanczos(Complex64::new(1.0, 0.0) - z))
    } else {
        lanczos(z)
    }
}

/// Lanczos core, valid for `Re(z) ≥ 0.5`.
fn lanczos(z: Complex64) -> Complex64 {
    let z = z - 1.0;
    let mut a = Complex64::new(LANCZOS_P[0], 0.0);
    let t = z + (LANCZOS_G + 0.5);
    for (i, &p) in LANCZOS_P.iter().enumerate().skip(1) {
        a += Complex64::new(p, 0.0) / (z + i as f64);
    }
    t.powc(z + 0.5) * (-t).exp() * a * (2.0 * PI).sqrt()
}

/// Complex Beta function `B(x, y) = Γ(x)Γ(y)/Γ(x+y)`.
pub fn beta(x: Complex64, y: Complex64) -> Complex64 {
    gamma(x) * gamma(y) / gamma(x + y)
}

/// Lower incomplete Beta function `B(x; u, v) = ∫₀ˣ t^{u−1}(1−t)^{v−1} dt`
/// continued to complex orders via a 10-term truncated hypergeometric
/// series.
///
/// The truncation order is fixed; the series is accurate only in the
/// small-argument, moderate-order regime (`x` well below 1, orders of
/// moderate modulus) in which the quantization integrands use it.
pub fn incomplete_beta(x: Real, u: Complex64, v: Complex64) -> Complex64 {
    let mut sum = Complex64::zero();
    let mut factorial = 1.0;
    let mut x_pow = 1.0;
    for i in 0..10 {
        if i > 0 {
            factorial *= i as f64;
            x_pow *= x;
        }
        let k = i as f64;
        sum += gamma(u + k) * gamma(-v + (1.0 + k)) * x_pow / (gamma(u + (1.0 + k)) * factorial);
    }
    Complex64::new(x, 0.0).powc(u) / u * sum * gamma(u + 1.0) / (gamma(u) * gamma(-v + 1.0))
}
