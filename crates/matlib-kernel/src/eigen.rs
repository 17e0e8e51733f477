// ─────────────────────────────────────────────────────────────────────
// SCPN MatLib — Eigen Analysis
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Eigen-analysis built from the dense primitives.
//!
//! - Power iteration for the dominant eigenvalue of a square matrix.
//! - Cyclic Jacobi rotation for the full decomposition of a symmetric matrix.
//! - Faddeev-LeVerrier recursion for characteristic-polynomial coefficients.
//!
//! Both iterative methods stop on a numerical threshold or a hard ceiling,
//! whichever comes first, and report which one ended the loop.

use crate::elimination::inverse;
use crate::matrix::{
    add, highest_magnitude_coordinate, identity, multiply, norm1, normalize_vector, scale,
    subtract, trace, transpose, Matrix,
};
use matlib_types::config::{JacobiConfig, PowerIterationConfig};
use matlib_types::error::{MatLibError, MatLibResult};
use ndarray::{Array1, Array2, Axis};
use std::f64::consts::FRAC_PI_4;

/// Outcome of [`power_iteration`].
#[derive(Debug, Clone)]
pub struct PowerIteration {
    /// Rayleigh-quotient estimate of the dominant eigenvalue.
    pub eigenvalue: f64,
    /// Unit-length estimate of the matching eigenvector.
    pub eigenvector: Array1<f64>,
    pub iterations: usize,
    /// ||lambda * y - A * y||_1 at the last iteration.
    pub residual: f64,
    pub converged: bool,
}

/// Dominant eigenvalue by power iteration.
///
/// Each step normalizes x to y, forms x = A·y and estimates
/// lambda = (yᵗ·x)·(yᵗ·y)⁻¹. The seed defaults to the all-ones vector.
pub fn power_iteration(
    a: &Matrix,
    seed: Option<&Array1<f64>>,
    config: &PowerIterationConfig,
) -> MatLibResult<PowerIteration> {
    if !a.is_square() {
        return Err(MatLibError::not_square("power_iteration", a.dim()));
    }
    config.validate()?;
    let n = a.nrows();

    let mut x: Matrix = match seed {
        Some(s) if s.len() != n => {
            return Err(MatLibError::shapes("power_iteration", a.dim(), (s.len(), 1)));
        }
        Some(s) => s.view().insert_axis(Axis(1)).to_owned(),
        None => Array2::ones((n, 1)),
    };

    let mut y = x.clone();
    let mut eigenvalue = 0.0;
    let mut residual = f64::INFINITY;

    for iteration in 1..=config.max_iterations {
        y = normalize_vector(&x)?;
        x = multiply(a, &y)?;

        let yt = transpose(&y);
        let numerator = multiply(&yt, &x)?;
        let denominator = inverse(&multiply(&yt, &y)?)?;
        eigenvalue = multiply(&numerator, &denominator)?[[0, 0]];

        residual = norm1(&subtract(&scale(eigenvalue, &y), &x)?);
        if !eigenvalue.is_finite() || !residual.is_finite() {
            return Err(MatLibError::InvalidInput(format!(
                "power_iteration: non-finite estimate at iteration {iteration} \
                 (lambda={eigenvalue}, residual={residual})"
            )));
        }
        if residual < config.tolerance {
            log::debug!(
                "power_iteration: converged after {iteration} iterations, lambda={eigenvalue:.6e}, residual={residual:.2e}"
            );
            return Ok(PowerIteration {
                eigenvalue,
                eigenvector: y.column(0).to_owned(),
                iterations: iteration,
                residual,
                converged: true,
            });
        }
    }

    log::warn!(
        "power_iteration: no convergence in {} iterations (residual={residual:.2e})",
        config.max_iterations
    );
    Ok(PowerIteration {
        eigenvalue,
        eigenvector: y.column(0).to_owned(),
        iterations: config.max_iterations,
        residual,
        converged: false,
    })
}

/// Outcome of [`jacobi_eigen`].
#[derive(Debug, Clone)]
pub struct JacobiEigen {
    /// Diagonal of the rotated matrix, in diagonal order.
    pub eigenvalues: Array1<f64>,
    /// Column k is the eigenvector for `eigenvalues[k]`.
    pub eigenvectors: Matrix,
    pub rotations: usize,
    pub converged: bool,
}

/// Rotation angle that zeroes entry (p, q): tan(2φ) = 2·a_pq / (a_pp - a_qq).
fn rotation_angle(app: f64, aqq: f64, apq: f64) -> f64 {
    let denom = app - aqq;
    if denom == 0.0 {
        FRAC_PI_4.copysign(apq)
    } else {
        0.5 * (2.0 * apq / denom).atan()
    }
}

/// Identity except R\[p\]\[p\] = R\[q\]\[q\] = cos φ, R\[p\]\[q\] = -sin φ, R\[q\]\[p\] = sin φ.
fn rotation_matrix(n: usize, p: usize, q: usize, phi: f64) -> Matrix {
    let (sin, cos) = phi.sin_cos();
    let mut r = identity(n);
    r[[p, p]] = cos;
    r[[q, q]] = cos;
    r[[p, q]] = -sin;
    r[[q, p]] = sin;
    r
}

fn check_symmetric(a: &Matrix, tolerance: f64) -> MatLibResult<()> {
    let n = a.nrows();
    for i in 0..n {
        for j in (i + 1)..n {
            if (a[[i, j]] - a[[j, i]]).abs() > tolerance {
                return Err(MatLibError::NotSymmetric { row: i, col: j });
            }
        }
    }
    Ok(())
}

/// Eigen-decomposition of a symmetric matrix by cyclic Jacobi rotation.
///
/// Repeatedly zeroes the largest off-diagonal entry with A ← Rᵗ·A·R while
/// accumulating P ← P·R, until that entry falls below `config.threshold`.
pub fn jacobi_eigen(a: &Matrix, config: &JacobiConfig) -> MatLibResult<JacobiEigen> {
    if !a.is_square() {
        return Err(MatLibError::not_square("jacobi_eigen", a.dim()));
    }
    config.validate()?;
    check_symmetric(a, config.symmetry_tolerance)?;

    let n = a.nrows();
    let mut d = a.clone();
    let mut p = identity(n);
    let mut rotations = 0usize;

    let converged = loop {
        let Some((pi, qi)) = highest_magnitude_coordinate(&d)? else {
            break true;
        };
        let off = d[[pi, qi]].abs();
        if off < config.threshold {
            log::debug!("jacobi_eigen: converged after {rotations} rotations (max off-diagonal {off:.2e})");
            break true;
        }
        if rotations >= config.max_rotations {
            log::warn!(
                "jacobi_eigen: stopped at {rotations} rotations with off-diagonal {off:.2e}"
            );
            break false;
        }

        let phi = rotation_angle(d[[pi, pi]], d[[qi, qi]], d[[pi, qi]]);
        let r = rotation_matrix(n, pi, qi, phi);
        d = multiply(&transpose(&r), &multiply(&d, &r)?)?;
        p = multiply(&p, &r)?;
        rotations += 1;
    };

    Ok(JacobiEigen {
        eigenvalues: d.diag().to_owned(),
        eigenvectors: p,
        rotations,
        converged,
    })
}

/// Characteristic-polynomial coefficients by Faddeev-LeVerrier recursion.
///
/// For an n x n matrix returns `[a_0, .., a_{n-1}]` such that
/// det(λI - A) = λ^n + a_{n-1}·λ^{n-1} + ... + a_0.
pub fn leverrier(a: &Matrix) -> MatLibResult<Vec<f64>> {
    if !a.is_square() || a.nrows() == 0 {
        return Err(MatLibError::not_square("leverrier", a.dim()));
    }
    let n = a.nrows();
    let eye = identity(n);
    let mut coeffs = vec![0.0; n];

    let mut b = a.clone();
    coeffs[n - 1] = -trace(&b)?;
    for k in (0..n - 1).rev() {
        let shifted = add(&b, &scale(coeffs[k + 1], &eye))?;
        b = multiply(a, &shifted)?;
        coeffs[k] = -trace(&b)? / (n - k) as f64;
    }

    Ok(coeffs)
}
