//! Least-squares quadratic fitting over small observation tables.
//!
//! The fit solves the normal equations for `y = c0 + c1*x + c2*x^2` directly
//! with Cramer's rule on the 3x3 moment matrix. This is exact enough for the
//! handful of calibration points it is used on; no iterative solver is needed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Determinant threshold below which the moment matrix is treated as singular.
const SINGULAR_EPS: f64 = 1e-12;

/// Errors from quadratic fitting.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitError {
    /// Fewer than three observations were supplied.
    #[error("quadratic fit requires at least 3 observations, got {0}")]
    TooFewPoints(usize),

    /// The normal equations are singular, e.g. all x values coincide.
    #[error("quadratic fit is degenerate: observations do not determine a parabola")]
    Degenerate,
}

/// A fitted quadratic `y = c0 + c1*x + c2*x^2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quadratic {
    pub c0: f64,
    pub c1: f64,
    pub c2: f64,
}

impl Quadratic {
    /// Evaluate the polynomial at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        self.c0 + self.c1 * x + self.c2 * x * x
    }
}

/// Determinant of a 3x3 matrix given in row-major order.
fn det3(m: &[[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Fit a quadratic to `(x, y)` observations by least squares.
///
/// The moment sums are accumulated in one pass, then each coefficient is the
/// ratio of two 3x3 determinants.
pub fn fit_quadratic(points: &[(f64, f64)]) -> Result<Quadratic, FitError> {
    if points.len() < 3 {
        return Err(FitError::TooFewPoints(points.len()));
    }

    let mut s0 = 0.0;
    let mut s1 = 0.0;
    let mut s2 = 0.0;
    let mut s3 = 0.0;
    let mut s4 = 0.0;
    let mut t0 = 0.0;
    let mut t1 = 0.0;
    let mut t2 = 0.0;

    for &(x, y) in points {
        let x2 = x * x;
        s0 += 1.0;
        s1 += x;
        s2 += x2;
        s3 += x2 * x;
        s4 += x2 * x2;
        t0 += y;
        t1 += x * y;
        t2 += x2 * y;
    }

    let m = [[s0, s1, s2], [s1, s2, s3], [s2, s3, s4]];
    let det = det3(&m);
    if det.abs() < SINGULAR_EPS {
        return Err(FitError::Degenerate);
    }

    let m0 = [[t0, s1, s2], [t1, s2, s3], [t2, s3, s4]];
    let m1 = [[s0, t0, s2], [s1, t1, s3], [s2, t2, s4]];
    let m2 = [[s0, s1, t0], [s1, s2, t1], [s2, s3, t2]];

    Ok(Quadratic {
        c0: det3(&m0) / det,
        c1: det3(&m1) / det,
        c2: det3(&m2) / det,
    })
}
