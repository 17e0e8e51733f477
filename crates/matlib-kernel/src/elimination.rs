// ─────────────────────────────────────────────────────────────────────
// SCPN MatLib — Elimination
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Gaussian and Gauss-Jordan elimination with partial pivoting.
//!
//! Both routines work on a private augmented copy `[A | B]` and return the
//! reduced system split back into its two blocks. A pivot whose magnitude
//! is at or below `PIVOT_EPSILON · ||A||_1` reports `SingularSystem` with the
//! column where elimination stopped, so the test scales with the input.

use crate::matrix::{
    combine_row_mut, concatenate, identity, norm1, partition, scale_row_mut, scan_column,
    swap_rows_mut, Matrix, Partition,
};
use crate::scalar::sign_of_permutation;
use matlib_types::constants::PIVOT_EPSILON;
use matlib_types::error::{MatLibError, MatLibResult};
use ndarray::Array1;

fn augment(op: &'static str, a: &Matrix, b: &Matrix) -> MatLibResult<Matrix> {
    if !a.is_square() {
        return Err(MatLibError::not_square(op, a.dim()));
    }
    if b.nrows() != a.nrows() {
        return Err(MatLibError::shapes(op, a.dim(), b.dim()));
    }
    concatenate(a, b)
}

/// Magnitude below which a pivot of `a` counts as zero.
fn pivot_tolerance(a: &Matrix) -> f64 {
    PIVOT_EPSILON * norm1(a)
}

/// Pick the pivot row for `column`, move it into place, and return the
/// pivot value together with whether a swap happened.
fn select_pivot(aug: &mut Matrix, column: usize, tolerance: f64) -> MatLibResult<(f64, bool)> {
    let p = scan_column(aug, column, column)?;
    let pivot = aug[[p, column]];
    if pivot.abs() <= tolerance {
        log::debug!("elimination: zero pivot {pivot:e} in column {column}");
        return Err(MatLibError::SingularSystem { column });
    }
    swap_rows_mut(aug, p, column);
    Ok((pivot, p != column))
}

/// Full reduction of `[A | B]`; on success `left` is the identity and
/// `right` holds A⁻¹B.
pub fn gauss_jordan(a: &Matrix, b: &Matrix) -> MatLibResult<Partition> {
    let mut aug = augment("gauss_jordan", a, b)?;
    let n = a.nrows();
    let tolerance = pivot_tolerance(a);

    for j in 0..n {
        let (pivot, _) = select_pivot(&mut aug, j, tolerance)?;
        scale_row_mut(&mut aug, j, pivot);
        for i in 0..n {
            if i != j {
                let factor = aug[[i, j]];
                if factor != 0.0 {
                    combine_row_mut(&mut aug, j, i, factor);
                }
            }
        }
    }

    partition(&aug, n)
}

/// Upper-triangularize `[A | B]`; `left` is U and `right` the transformed B.
/// Finish with [`back_substitution`].
pub fn gaussian_elimination(a: &Matrix, b: &Matrix) -> MatLibResult<Partition> {
    let mut aug = augment("gaussian_elimination", a, b)?;
    let n = a.nrows();
    let tolerance = pivot_tolerance(a);

    for j in 0..n {
        let (pivot, _) = select_pivot(&mut aug, j, tolerance)?;
        for i in (j + 1)..n {
            let factor = aug[[i, j]] / pivot;
            if factor != 0.0 {
                combine_row_mut(&mut aug, j, i, factor);
            }
        }
    }

    partition(&aug, n)
}

/// Solve an upper-triangular system produced by [`gaussian_elimination`].
///
/// x\[j\] = (b\[j\] - Σ_{i>j} U\[j\]\[i\]·x\[i\]) / U\[j\]\[j\], walking j from n-1 down to 0.
pub fn back_substitution(system: &Partition) -> MatLibResult<Array1<f64>> {
    let u = &system.left;
    let b = &system.right;
    if !u.is_square() {
        return Err(MatLibError::not_square("back_substitution", u.dim()));
    }
    if b.ncols() != 1 || b.nrows() != u.nrows() {
        return Err(MatLibError::ShapeMismatch {
            op: "back_substitution",
            detail: format!(
                "right-hand side must be a single {}x1 column, got {}x{}",
                u.nrows(),
                b.nrows(),
                b.ncols()
            ),
        });
    }

    let n = u.nrows();
    let tolerance = pivot_tolerance(u);
    let mut x = Array1::zeros(n);
    for j in (0..n).rev() {
        let diag = u[[j, j]];
        if diag.abs() <= tolerance {
            return Err(MatLibError::SingularSystem { column: j });
        }
        let mut sum = b[[j, 0]];
        for i in (j + 1)..n {
            sum -= u[[j, i]] * x[i];
        }
        x[j] = sum / diag;
    }
    Ok(x)
}

/// Solve Ax = b for a single right-hand-side column.
pub fn solve(a: &Matrix, b: &Matrix) -> MatLibResult<Array1<f64>> {
    back_substitution(&gaussian_elimination(a, b)?)
}

/// Determinant by triangularization: (-1)^swaps · Π diag.
///
/// A zero pivot means the matrix is singular and the determinant is 0.
pub fn determinant(a: &Matrix) -> MatLibResult<f64> {
    if !a.is_square() {
        return Err(MatLibError::not_square("determinant", a.dim()));
    }
    let n = a.nrows();
    match n {
        0 => return Ok(1.0),
        1 => return Ok(a[[0, 0]]),
        2 => return Ok(a[[0, 0]] * a[[1, 1]] - a[[0, 1]] * a[[1, 0]]),
        _ => {}
    }

    let mut work = a.clone();
    let tolerance = pivot_tolerance(a);
    let mut swaps = 0usize;
    for j in 0..n {
        let (pivot, swapped) = match select_pivot(&mut work, j, tolerance) {
            Ok(selected) => selected,
            Err(MatLibError::SingularSystem { .. }) => return Ok(0.0),
            Err(e) => return Err(e),
        };
        if swapped {
            swaps += 1;
        }
        for i in (j + 1)..n {
            let factor = work[[i, j]] / pivot;
            if factor != 0.0 {
                combine_row_mut(&mut work, j, i, factor);
            }
        }
    }

    Ok(sign_of_permutation(swaps) * work.diag().product())
}

/// Gauss-Jordan on `[A | I]`: `left` should be the identity, `right` is A⁻¹.
pub fn invert_matrix(a: &Matrix) -> MatLibResult<Partition> {
    if !a.is_square() {
        return Err(MatLibError::not_square("invert_matrix", a.dim()));
    }
    gauss_jordan(a, &identity(a.nrows()))
}

/// A⁻¹ alone.
pub fn inverse(a: &Matrix) -> MatLibResult<Matrix> {
    Ok(invert_matrix(a)?.right)
}
