//! Tridiagonal matrices inverted through continuant recursions.
//!
//! For a tridiagonal matrix the leading principal minors `theta[k]` and the
//! trailing minors `phi[k]` satisfy three-term (continuant) recursions, and
//! every entry of the inverse is a signed product of off-diagonal entries
//! scaled by a ratio of minors. This is O(n²) for the full inverse and
//! avoids general-purpose factorization entirely; the quantization Jacobian
//! is the intended client.
//!
//! A numerically singular matrix is not an error here: the minors ratio
//! produces non-finite entries which propagate to the caller. Only
//! malformed band lengths are rejected.

use qz_core::{
    errors::{Error, Result},
    Real, Size,
};

/// A square tridiagonal matrix stored as three bands.
#[derive(Debug, Clone)]
pub struct TridiagonalMatrix {
    /// Sub-diagonal, length n − 1; `sub[i]` is the entry at (i+1, i).
    sub: Vec<Real>,
    /// Main diagonal, length n.
    diag: Vec<Real>,
    /// Super-diagonal, length n − 1; `sup[i]` is the entry at (i, i+1).
    sup: Vec<Real>,
}

impl TridiagonalMatrix {
    /// Build from the three bands. `diag` has length n ≥ 1, `sub` and
    /// `sup` length n − 1.
    pub fn from_bands(sub: Vec<Real>, diag: Vec<Real>, sup: Vec<Real>) -> Result<Self> {
        let n = diag.len();
        if n == 0 {
            return Err(Error::InvalidArgument(
                "TridiagonalMatrix: empty diagonal".into(),
            ));
        }
        if sub.len() != n - 1 || sup.len() != n - 1 {
            return Err(Error::InvalidArgument(format!(
                "TridiagonalMatrix: band lengths {}/{} do not match dimension {}",
                sub.len(),
                sup.len(),
                n
            )));
        }
        Ok(Self { sub, diag, sup })
    }

    /// Dimension n.
    pub fn dim(&self) -> Size {
        self.diag.len()
    }

    /// Entry at (i+1, i).
    fn lower(&self, i: Size) -> Real {
        self.sub[i - 1]
    }

    /// Entry at (i, i+1).
    fn upper(&self, i: Size) -> Real {
        self.sup[i]
    }

    /// Leading principal minors `theta[0..n]`, `theta[k]` being the
    /// determinant of the top-left (k+1)×(k+1) block:
    /// `theta[k] = theta[k-1]·d[k][k] − theta[k-2]·d[k][k-1]·d[k-1][k]`.
    fn forward_minors(&self) -> Vec<Real> {
        let n = self.dim();
        let mut theta = vec![0.0; n];
        theta[0] = self.diag[0];
        if n > 1 {
            theta[1] = self.diag[0] * self.diag[1] - self.upper(0) * self.lower(1);
        }
        for k in 2..n {
            theta[k] = theta[k - 1] * self.diag[k] - theta[k - 2] * self.lower(k) * self.upper(k - 1);
        }
        theta
    }

    /// Trailing minors `phi[0..n+2]` seeded with `phi[n] = 1`,
    /// `phi[n+1] = 0`, run from the bottom-right corner up.
    fn backward_minors(&self) -> Vec<Real> {
        let n = self.dim();
        let mut phi = vec![0.0; n + 2];
        phi[n + 1] = 0.0;
        phi[n] = 1.0;
        phi[n - 1] = self.diag[n - 1];
        for k in (0..n.saturating_sub(1)).rev() {
            phi[k] = phi[k + 1] * self.diag[k] - phi[k + 2] * self.upper(k) * self.lower(k + 1);
        }
        phi
    }

    /// Determinant via the forward continuant.
    pub fn determinant(&self) -> Real {
        self.forward_minors()[self.dim() - 1]
    }

    /// Dense inverse through the continuant minors.
    ///
    /// Only the lower triangle is computed; the upper triangle is the
    /// mirror image, which is exact only for band-symmetric input
    /// (`sub[i] == sup[i]`). The quantization Jacobian is band-symmetric
    /// by construction, and mirroring rather than recomputing keeps the
    /// two triangles bit-identical.
    pub fn inverse(&self) -> Vec<Vec<Real>> {
        let n = self.dim();
        let theta = self.forward_minors();
        let phi = self.backward_minors();
        let det = theta[n - 1];
        let theta_prev = |j: Size| if j == 0 { 1.0 } else { theta[j - 1] };

        let mut m = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in 0..=i {
                if i == j {
                    m[i][j] = theta_prev(i) * phi[i + 1] / det;
                } else {
                    let mut p = 1.0;
                    for k in j + 1..=i {
                        p *= self.lower(k);
                    }
                    let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                    m[i][j] = sign * p * (theta_prev(j) * phi[i + 1] / det);
                }
            }
        }
        for j in 0..n {
            for i in 0..j {
                m[i][j] = m[j][i];
            }
        }
        m
    }
}
