//! Initial grid construction for tenor components.
//!
//! The seed brackets the accrual-factor mean `e = 1 + δ·f` with a band
//! proportional to `δ·√e`; the band width is keyed on the tenor family.
//! Both end points are pinned to the band edges and the interior points
//! are equally spaced from the lower edge.

use qz_core::{ensure, errors::Result, Real, Size};
use qz_models::TenorFamily;

/// Seeding band for one tenor family, in units of `δ·√e`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedRule {
    /// Half-width of the band around the mean.
    pub edge_offset: Real,
    /// Total span divided by the level to obtain the interior step.
    pub span: Real,
}

impl SeedRule {
    /// The band used for a given tenor family.
    pub fn for_family(family: TenorFamily) -> Self {
        match family {
            TenorFamily::SixMonth => Self {
                edge_offset: 0.75,
                span: 1.5,
            },
            TenorFamily::ThreeMonth => Self {
                edge_offset: 1.0,
                span: 2.0,
            },
        }
    }
}

/// Build the initial grid for a tenor component with accrual-factor mean
/// `mean`, accrual length `tenor_length`, and `level` points.
pub fn tenor_seed(
    family: TenorFamily,
    mean: Real,
    tenor_length: Real,
    level: Size,
) -> Result<Vec<Real>> {
    ensure!(level >= 2, "quantization level must be at least 2, got {level}");
    ensure!(mean > 0.0, "accrual-factor mean must be positive, got {mean}");
    let rule = SeedRule::for_family(family);
    let scale = tenor_length * mean.sqrt();
    let offset = rule.edge_offset * scale;
    let step = rule.span * scale / level as Real;
    ensure!(
        mean - offset > 0.0,
        "seed band [{}, {}] leaves the positive half-line",
        mean - offset,
        mean + offset
    );
    let mut seed: Vec<Real> = (0..level)
        .map(|j| mean - offset + j as Real * step)
        .collect();
    seed[level - 1] = mean + offset;
    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn six_month_band() {
        let level = 10;
        let mean = 1.01;
        let delta = 0.5;
        let seed = tenor_seed(TenorFamily::SixMonth, mean, delta, level).unwrap();
        assert_eq!(seed.len(), level);
        let offset = 0.75 * delta * mean.sqrt();
        assert_relative_eq!(seed[0], mean - offset, epsilon = 1e-14);
        assert_relative_eq!(seed[level - 1], mean + offset, epsilon = 1e-14);
        let step = 1.5 * delta * mean.sqrt() / level as f64;
        assert_relative_eq!(seed[1] - seed[0], step, epsilon = 1e-14);
        for w in seed.windows(2) {
            assert!(w[0] < w[1]);
        }
        assert!(seed[0] > 0.0);
    }

    #[test]
    fn three_month_band_is_wider_per_unit_length() {
        let s6 = tenor_seed(TenorFamily::SixMonth, 1.01, 0.25, 8).unwrap();
        let s3 = tenor_seed(TenorFamily::ThreeMonth, 1.01, 0.25, 8).unwrap();
        assert!(s3[0] < s6[0]);
        assert!(s3[7] > s6[7]);
    }

    #[test]
    fn invalid_inputs_rejected() {
        assert!(tenor_seed(TenorFamily::SixMonth, 1.01, 0.5, 1).is_err());
        assert!(tenor_seed(TenorFamily::SixMonth, -1.0, 0.5, 5).is_err());
        // band so wide it crosses zero
        assert!(tenor_seed(TenorFamily::ThreeMonth, 0.1, 4.0, 5).is_err());
    }
}
