//! Scalar helpers shared by the matrix and eigen modules.

use num_traits::Signed;

/// Absolute value for any signed numeric width (i32, i64, f32, f64, ...).
pub fn abs<T: Signed>(n: T) -> T {
    n.abs()
}

/// `base` raised to an integer power. Negative exponents give reciprocals.
pub fn to_power(base: f64, exponent: i32) -> f64 {
    base.powi(exponent)
}

/// (-1)^swaps, the sign a sequence of row swaps contributes to a determinant.
pub fn sign_of_permutation(swaps: usize) -> f64 {
    if swaps % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}
