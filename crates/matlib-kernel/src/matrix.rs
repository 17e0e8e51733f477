// ─────────────────────────────────────────────────────────────────────
// SCPN MatLib — Dense Matrix Primitives
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Shape-checked dense matrix primitives over `Array2<f64>`.
//!
//! Every public function borrows its inputs and returns a freshly allocated
//! matrix. The `*_mut` row helpers are the only in-place operations and are
//! crate-private: elimination uses them on its own working copy.

use crate::scalar::abs;
use matlib_types::error::{MatLibError, MatLibResult};
use ndarray::{concatenate as nd_concatenate, s, Array2, Axis};

/// Row-major dense matrix of doubles.
pub type Matrix = Array2<f64>;

/// Pair of matrices produced by splitting a wider matrix at a column.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    /// Columns `[0, k)`.
    pub left: Matrix,
    /// Columns `[k, ncols)`.
    pub right: Matrix,
}

/// Build a matrix from nested rows. Empty, zero-width and ragged input is rejected.
pub fn from_rows(rows: &[Vec<f64>]) -> MatLibResult<Matrix> {
    let Some(first) = rows.first() else {
        return Err(MatLibError::ShapeMismatch {
            op: "from_rows",
            detail: "matrix needs at least one row".to_string(),
        });
    };
    let ncols = first.len();
    if ncols == 0 {
        return Err(MatLibError::ShapeMismatch {
            op: "from_rows",
            detail: "matrix needs at least one column".to_string(),
        });
    }
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
        return Err(MatLibError::ShapeMismatch {
            op: "from_rows",
            detail: format!("row {i} has {} columns, expected {ncols}", row.len()),
        });
    }
    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    Array2::from_shape_vec((rows.len(), ncols), flat).map_err(|e| MatLibError::ShapeMismatch {
        op: "from_rows",
        detail: e.to_string(),
    })
}

pub fn add(a: &Matrix, b: &Matrix) -> MatLibResult<Matrix> {
    if a.dim() != b.dim() {
        return Err(MatLibError::shapes("add", a.dim(), b.dim()));
    }
    Ok(a + b)
}

pub fn subtract(a: &Matrix, b: &Matrix) -> MatLibResult<Matrix> {
    if a.dim() != b.dim() {
        return Err(MatLibError::shapes("subtract", a.dim(), b.dim()));
    }
    Ok(a - b)
}

/// Matrix product; `a.ncols()` must equal `b.nrows()`.
pub fn multiply(a: &Matrix, b: &Matrix) -> MatLibResult<Matrix> {
    if a.ncols() != b.nrows() {
        return Err(MatLibError::shapes("multiply", a.dim(), b.dim()));
    }
    Ok(a.dot(b))
}

pub fn scale(k: f64, a: &Matrix) -> Matrix {
    a.mapv(|v| k * v)
}

pub fn transpose(a: &Matrix) -> Matrix {
    a.t().to_owned()
}

pub fn identity(n: usize) -> Matrix {
    Array2::eye(n)
}

/// Sum of the diagonal of a square matrix.
pub fn trace(a: &Matrix) -> MatLibResult<f64> {
    if !a.is_square() {
        return Err(MatLibError::not_square("trace", a.dim()));
    }
    Ok(a.diag().sum())
}

/// Maximum absolute column sum (the induced L1 norm). NaN anywhere in `a`
/// yields NaN.
pub fn norm1(a: &Matrix) -> f64 {
    a.axis_iter(Axis(1))
        .map(|col| col.iter().map(|&v| abs(v)).sum::<f64>())
        .fold(0.0, |acc: f64, sum| {
            if acc.is_nan() || sum.is_nan() {
                f64::NAN
            } else {
                acc.max(sum)
            }
        })
}

/// Horizontally join `[a | b]`; both must have the same row count.
pub fn concatenate(a: &Matrix, b: &Matrix) -> MatLibResult<Matrix> {
    if a.nrows() != b.nrows() {
        return Err(MatLibError::shapes("concatenate", a.dim(), b.dim()));
    }
    nd_concatenate(Axis(1), &[a.view(), b.view()]).map_err(|e| MatLibError::ShapeMismatch {
        op: "concatenate",
        detail: e.to_string(),
    })
}

/// Split into columns `[0, k)` and `[k, ncols)`. Both halves must be non-empty.
pub fn partition(a: &Matrix, k: usize) -> MatLibResult<Partition> {
    if k == 0 || k >= a.ncols() {
        return Err(MatLibError::ShapeMismatch {
            op: "partition",
            detail: format!("split column {k} outside 1..{} for {:?}", a.ncols(), a.dim()),
        });
    }
    Ok(Partition {
        left: a.slice(s![.., ..k]).to_owned(),
        right: a.slice(s![.., k..]).to_owned(),
    })
}

/// Copy of `a` with rows `r1` and `r2` exchanged.
pub fn swap_row(a: &Matrix, r1: usize, r2: usize) -> MatLibResult<Matrix> {
    check_row(a, r1)?;
    check_row(a, r2)?;
    let mut out = a.clone();
    swap_rows_mut(&mut out, r1, r2);
    Ok(out)
}

/// Copy of `a` with `row` divided by `pivot`.
pub fn scale_row(a: &Matrix, row: usize, pivot: f64) -> MatLibResult<Matrix> {
    check_row(a, row)?;
    if pivot == 0.0 {
        return Err(MatLibError::InvalidInput(format!(
            "cannot divide row {row} by a zero pivot"
        )));
    }
    let mut out = a.clone();
    scale_row_mut(&mut out, row, pivot);
    Ok(out)
}

/// Copy of `a` with `times * a[src]` subtracted from row `dst`.
pub fn combine_row(a: &Matrix, src: usize, dst: usize, times: f64) -> MatLibResult<Matrix> {
    check_row(a, src)?;
    check_row(a, dst)?;
    let mut out = a.clone();
    combine_row_mut(&mut out, src, dst, times);
    Ok(out)
}

/// Row in `from_row..` holding the largest |a[row][column]|. Ties keep the first row.
pub fn scan_column(a: &Matrix, column: usize, from_row: usize) -> MatLibResult<usize> {
    if column >= a.ncols() {
        return Err(MatLibError::IndexOutOfBounds {
            index: column,
            len: a.ncols(),
        });
    }
    check_row(a, from_row)?;
    let mut best = from_row;
    for row in (from_row + 1)..a.nrows() {
        if abs(a[[row, column]]) > abs(a[[best, column]]) {
            best = row;
        }
    }
    Ok(best)
}

/// `(p, q)` with `p < q` maximizing |a[p][q]| over the strict upper triangle.
///
/// Returns `None` for a 1x1 matrix, which has no off-diagonal entries.
pub fn highest_magnitude_coordinate(a: &Matrix) -> MatLibResult<Option<(usize, usize)>> {
    if !a.is_square() {
        return Err(MatLibError::not_square("highest_magnitude_coordinate", a.dim()));
    }
    let n = a.nrows();
    let mut best: Option<(usize, usize)> = None;
    for p in 0..n {
        for q in (p + 1)..n {
            match best {
                Some((bp, bq)) if a[[p, q]].abs() <= a[[bp, bq]].abs() => {}
                _ => best = Some((p, q)),
            }
        }
    }
    Ok(best)
}

/// Column vector divided by its Euclidean length.
pub fn normalize_vector(v: &Matrix) -> MatLibResult<Matrix> {
    if v.ncols() != 1 {
        return Err(MatLibError::ShapeMismatch {
            op: "normalize_vector",
            detail: format!("expected a column vector, got {}x{}", v.nrows(), v.ncols()),
        });
    }
    let length = euclidean_norm(v);
    if length == 0.0 || !length.is_finite() {
        return Err(MatLibError::InvalidInput(format!(
            "cannot normalize a vector of length {length}"
        )));
    }
    Ok(v.mapv(|x| x / length))
}

pub(crate) fn euclidean_norm(v: &Matrix) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

fn check_row(a: &Matrix, row: usize) -> MatLibResult<()> {
    if row >= a.nrows() {
        return Err(MatLibError::IndexOutOfBounds {
            index: row,
            len: a.nrows(),
        });
    }
    Ok(())
}

pub(crate) fn swap_rows_mut(a: &mut Matrix, r1: usize, r2: usize) {
    if r1 == r2 {
        return;
    }
    for j in 0..a.ncols() {
        a.swap([r1, j], [r2, j]);
    }
}

pub(crate) fn scale_row_mut(a: &mut Matrix, row: usize, pivot: f64) {
    a.row_mut(row).mapv_inplace(|v| v / pivot);
}

pub(crate) fn combine_row_mut(a: &mut Matrix, src: usize, dst: usize, times: f64) {
    let source = a.row(src).to_owned();
    a.row_mut(dst).scaled_add(-times, &source);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn assert_close(a: &Matrix, b: &Matrix, tol: f64) {
        assert_eq!(a.dim(), b.dim(), "shape differs");
        for ((i, j), &v) in a.indexed_iter() {
            assert!(
                (v - b[[i, j]]).abs() < tol,
                "mismatch at ({i}, {j}): {v} vs {}",
                b[[i, j]]
            );
        }
    }

    #[test]
    fn test_identity_generation() {
        assert_eq!(identity(1), array![[1.0]]);
        assert_eq!(identity(2), array![[1.0, 0.0], [0.0, 1.0]]);
        assert_eq!(
            identity(3),
            array![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
        );
    }

    #[test]
    fn test_add_and_subtract() {
        let i2 = identity(2);
        assert_eq!(add(&i2, &i2).unwrap(), array![[2.0, 0.0], [0.0, 2.0]]);
        assert_eq!(subtract(&i2, &i2).unwrap(), Matrix::zeros((2, 2)));

        let a = array![[5.0, 0.0, 2.0, 3.0], [10.0, 3.0, 4.0, 2.0]];
        let b = array![[3.0, 2.0, 6.0, 7.0], [10.0, 2.0, 5.0, 7.0]];
        let c = array![[8.0, 2.0, 8.0, 10.0], [20.0, 5.0, 9.0, 9.0]];
        assert_eq!(add(&a, &b).unwrap(), c);
    }

    #[test]
    fn test_add_shape_mismatch_leaves_inputs_untouched() {
        let i2 = identity(2);
        let small = array![[0.0]];
        let wide = Array2::<f64>::zeros((2, 6));
        assert!(matches!(
            add(&i2, &small),
            Err(MatLibError::ShapeMismatch { op: "add", .. })
        ));
        assert!(matches!(
            subtract(&i2, &wide),
            Err(MatLibError::ShapeMismatch { .. })
        ));
        assert_eq!(i2, identity(2));
        assert_eq!(small, array![[0.0]]);
    }

    #[test]
    fn test_scale_returns_new_matrix() {
        let i2 = identity(2);
        assert_eq!(scale(5.0, &i2), array![[5.0, 0.0], [0.0, 5.0]]);
        assert_eq!(scale(8.0, &identity(4)), identity(4) * 8.0);
        assert_eq!(i2, identity(2));
    }

    #[test]
    fn test_multiply() {
        let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let b = array![[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]];
        assert_close(
            &multiply(&a, &b).unwrap(),
            &array![[58.0, 64.0], [139.0, 154.0]],
            1e-4,
        );
        assert!(multiply(&a, &a).is_err());
    }

    #[test]
    fn test_transpose() {
        assert_eq!(transpose(&array![[1.0, 2.0]]), array![[1.0], [2.0]]);
    }

    #[test]
    fn test_trace() {
        let ones = Array2::from_elem((3, 3), 1.0);
        assert!((trace(&ones).unwrap() - 3.0).abs() < 1e-3);
        assert!(matches!(
            trace(&Array2::zeros((2, 3))),
            Err(MatLibError::ShapeMismatch { op: "trace", .. })
        ));
    }

    #[test]
    fn test_norm1_is_max_column_sum() {
        assert!((norm1(&array![[1.0, -7.0], [-2.0, -3.0]]) - 10.0).abs() < 1e-3);
        let m = array![[5.0, -4.0, 2.0], [-1.0, 2.0, 3.0], [-2.0, 1.0, 0.0]];
        assert!((norm1(&m) - 8.0).abs() < 1e-3);
        assert!((norm1(&array![[1.0], [2.0], [3.0]]) - 6.0).abs() < 1e-3);
    }

    #[test]
    fn test_norm1_propagates_nan() {
        assert!(norm1(&array![[f64::NAN, 1.0], [2.0, 3.0]]).is_nan());
        assert!(norm1(&array![[1.0, 1.0], [2.0, f64::NAN]]).is_nan());
        assert_eq!(norm1(&array![[f64::INFINITY, 1.0]]), f64::INFINITY);
    }

    #[test]
    fn test_concatenate_and_partition() {
        let joined = concatenate(&identity(2), &identity(2)).unwrap();
        assert_eq!(joined, array![[1.0, 0.0, 1.0, 0.0], [0.0, 1.0, 0.0, 1.0]]);

        let parts = partition(&joined, 2).unwrap();
        assert_eq!(parts.left, identity(2));
        assert_eq!(parts.right, identity(2));

        assert!(partition(&joined, 0).is_err());
        assert!(partition(&joined, 4).is_err());
        assert!(concatenate(&identity(2), &identity(3)).is_err());
    }

    #[test]
    fn test_row_primitives_copy_on_write() {
        let i2 = identity(2);
        assert_eq!(
            combine_row(&i2, 0, 1, 1.0).unwrap(),
            array![[1.0, 0.0], [-1.0, 1.0]]
        );
        assert_eq!(swap_row(&i2, 0, 1).unwrap(), array![[0.0, 1.0], [1.0, 0.0]]);
        assert_eq!(
            scale_row(&array![[2.0, 4.0], [1.0, 1.0]], 0, 2.0).unwrap(),
            array![[1.0, 2.0], [1.0, 1.0]]
        );
        assert_eq!(i2, identity(2));
    }

    #[test]
    fn test_row_primitives_reject_bad_rows() {
        let i2 = identity(2);
        assert!(matches!(
            swap_row(&i2, 0, 2),
            Err(MatLibError::IndexOutOfBounds { index: 2, len: 2 })
        ));
        assert!(matches!(
            scale_row(&i2, 0, 0.0),
            Err(MatLibError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_scan_column() {
        assert_eq!(scan_column(&identity(2), 0, 0).unwrap(), 0);
        let m = array![[1.0, 0.0], [-3.0, 0.0], [2.0, 0.0]];
        assert_eq!(scan_column(&m, 0, 0).unwrap(), 1);
        assert_eq!(scan_column(&m, 0, 2).unwrap(), 2);
    }

    #[test]
    fn test_highest_magnitude_coordinate() {
        let m = array![[-1.0, 2.0], [2.0, 2.0]];
        assert_eq!(highest_magnitude_coordinate(&m).unwrap(), Some((0, 1)));
        let m3 = array![[1.0, 0.1, -5.0], [0.1, 1.0, 0.3], [-5.0, 0.3, 1.0]];
        assert_eq!(highest_magnitude_coordinate(&m3).unwrap(), Some((0, 2)));
        assert_eq!(highest_magnitude_coordinate(&array![[4.0]]).unwrap(), None);
    }

    #[test]
    fn test_normalize_vector() {
        let v = normalize_vector(&array![[8.0], [-6.0]]).unwrap();
        assert_close(&v, &array![[0.8], [-0.6]], 1e-4);
        assert!(normalize_vector(&array![[0.0], [0.0]]).is_err());
        assert!(normalize_vector(&identity(2)).is_err());
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let ok = from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(ok, array![[1.0, 2.0], [3.0, 4.0]]);
        assert!(from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
        assert!(from_rows(&[]).is_err());
        assert!(from_rows(&[vec![]]).is_err());
    }
}
