//! Dense numerical kernel for SCPN MatLib.
//!
//! Matrix primitives, elimination-based solvers, eigen-analysis and
//! radix-2 spectral transforms, as free functions over `Array2<f64>` and
//! `Complex64`.

pub mod eigen;
pub mod elimination;
pub mod matrix;
pub mod scalar;
pub mod spectral;
pub mod stats;

pub use matrix::{Matrix, Partition};
pub use num_complex::Complex64;
