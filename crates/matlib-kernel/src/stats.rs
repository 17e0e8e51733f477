//! Sample statistics over point pairs, assembled from the matrix primitives.
//!
//! Feeds covariance estimates to classifiers downstream; the eigen-pairs of
//! the returned matrix are the principal axes of the point cloud.

use crate::matrix::{add, multiply, scale, subtract, transpose, Matrix};
use matlib_types::error::{MatLibError, MatLibResult};
use matlib_types::point::Point2;

/// Arithmetic mean of the points.
pub fn mean_point(points: &[Point2]) -> MatLibResult<Point2> {
    if points.is_empty() {
        return Err(MatLibError::InvalidInput(
            "mean of an empty point set".to_string(),
        ));
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Ok(Point2::new(sx / n, sy / n))
}

/// 2x2 sample covariance Σ (p - μ)(p - μ)ᵗ / (n - 1).
pub fn covariance(points: &[Point2]) -> MatLibResult<Matrix> {
    if points.len() < 2 {
        return Err(MatLibError::InvalidInput(format!(
            "covariance needs at least 2 points, got {}",
            points.len()
        )));
    }
    let mu = mean_point(points)?.to_matrix();

    let mut sum = Matrix::zeros((2, 2));
    for p in points {
        let d = subtract(&p.to_matrix(), &mu)?;
        sum = add(&sum, &multiply(&d, &transpose(&d))?)?;
    }
    Ok(scale(1.0 / (points.len() - 1) as f64, &sum))
}
