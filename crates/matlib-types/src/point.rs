// ─────────────────────────────────────────────────────────────────────
// SCPN MatLib — Point
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::error::{MatLibError, MatLibResult};
use ndarray::{arr2, Array2};
use serde::{Deserialize, Serialize};

/// Two-field point value used to carry samples into and out of the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Point2 { x, y }
    }

    /// Column vector [[x], [y]].
    pub fn to_matrix(&self) -> Array2<f64> {
        arr2(&[[self.x], [self.y]])
    }

    /// Inverse of [`Point2::to_matrix`]; requires a 2x1 matrix.
    pub fn from_matrix(m: &Array2<f64>) -> MatLibResult<Self> {
        if m.dim() != (2, 1) {
            return Err(MatLibError::shapes("Point2::from_matrix", m.dim(), (2, 1)));
        }
        Ok(Point2 {
            x: m[[0, 0]],
            y: m[[1, 0]],
        })
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Point2 { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_matrix_is_column() {
        let m = Point2::new(8.0, -6.0).to_matrix();
        assert_eq!(m.dim(), (2, 1));
        assert_eq!(m[[0, 0]], 8.0);
        assert_eq!(m[[1, 0]], -6.0);
    }

    #[test]
    fn test_from_matrix_rejects_row_vector() {
        let row = Array2::from_shape_vec((1, 2), vec![1.0, 2.0]).unwrap();
        assert!(matches!(
            Point2::from_matrix(&row),
            Err(MatLibError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_norm() {
        assert!((Point2::new(8.0, -6.0).norm() - 10.0).abs() < 1e-12);
    }
}
