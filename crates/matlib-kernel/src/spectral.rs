// ─────────────────────────────────────────────────────────────────────
// SCPN MatLib — Spectral Transforms
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Radix-2 FFT and the signal measures built on it.
//!
//! Convention matches numpy:
//! - Forward FFT: unnormalized, kernel e^{-2πi·jk/n}
//! - Inverse FFT: normalized by 1/n
//!
//! The transform runs decimation-in-frequency butterflies over log₂(n)
//! stages and then restores natural order with a bit-reversal pass.
//! Correlation is computed by direct summation.

use matlib_types::error::{MatLibError, MatLibResult};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Transform direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }
}

fn check_transform_length(len: usize) -> MatLibResult<()> {
    if !len.is_power_of_two() {
        return Err(MatLibError::InvalidTransformLength { len });
    }
    Ok(())
}

fn bit_reverse(mut x: usize, bits: u32) -> usize {
    let mut out = 0;
    for _ in 0..bits {
        out = (out << 1) | (x & 1);
        x >>= 1;
    }
    out
}

fn bit_reverse_permute(data: &mut [Complex64]) {
    let n = data.len();
    let bits = n.trailing_zeros();
    for i in 0..n {
        let j = bit_reverse(i, bits);
        if j > i {
            data.swap(i, j);
        }
    }
}

/// Radix-2 FFT of `z`. The length must be a power of two.
pub fn fft(z: &[Complex64], direction: Direction) -> MatLibResult<Vec<Complex64>> {
    let n = z.len();
    check_transform_length(n)?;
    let mut data = z.to_vec();

    let mut span = n;
    while span >= 2 {
        let half = span / 2;
        let step = direction.sign() * 2.0 * PI / span as f64;
        for start in (0..n).step_by(span) {
            for j in 0..half {
                let twiddle = Complex64::from_polar(1.0, step * j as f64);
                let u = data[start + j];
                let v = data[start + j + half];
                data[start + j] = u + v;
                data[start + j + half] = (u - v) * twiddle;
            }
        }
        span = half;
    }
    bit_reverse_permute(&mut data);

    if direction == Direction::Inverse {
        let norm = 1.0 / n as f64;
        for c in &mut data {
            *c = c.scale(norm);
        }
    }
    Ok(data)
}

pub fn forward_fft(z: &[Complex64]) -> MatLibResult<Vec<Complex64>> {
    fft(z, Direction::Forward)
}

pub fn inverse_fft(z: &[Complex64]) -> MatLibResult<Vec<Complex64>> {
    fft(z, Direction::Inverse)
}

/// Power spectral density: |FFT(z)|² per frequency bin.
pub fn psd(z: &[Complex64]) -> MatLibResult<Vec<f64>> {
    Ok(forward_fft(z)?.iter().map(|c| c.norm_sqr()).collect())
}

fn to_complex(signal: &[f64]) -> Vec<Complex64> {
    signal.iter().map(|&v| Complex64::new(v, 0.0)).collect()
}

/// Moving-average smoothing by FFT.
///
/// The kernel is 1/width over the first `width` taps and 0 elsewhere, so the
/// result is a circular convolution; zero-pad `signal` for a linear one.
pub fn fft_convolution(signal: &[f64], width: usize) -> MatLibResult<Vec<f64>> {
    let n = signal.len();
    check_transform_length(n)?;
    if width == 0 || width > n {
        return Err(MatLibError::InvalidInput(format!(
            "moving-average width {width} must be in 1..={n}"
        )));
    }

    let tap = 1.0 / width as f64;
    let kernel: Vec<Complex64> = (0..n)
        .map(|i| Complex64::new(if i < width { tap } else { 0.0 }, 0.0))
        .collect();

    let signal_hat = forward_fft(&to_complex(signal))?;
    let kernel_hat = forward_fft(&kernel)?;
    let product: Vec<Complex64> = signal_hat
        .iter()
        .zip(&kernel_hat)
        .map(|(s, k)| s * k)
        .collect();

    Ok(inverse_fft(&product)?.iter().map(|c| c.re).collect())
}

fn check_signal(name: &str, signal: &[f64]) -> MatLibResult<()> {
    if signal.is_empty() {
        return Err(MatLibError::InvalidInput(format!("{name} is empty")));
    }
    Ok(())
}

/// Raw cross-correlation by direct summation.
///
/// r\[i\] = Σ_{k=i}^{n-1} x\[k\]·y\[k-i\] for lags i in 0..n, n = x.len().
/// `y` may be shorter than `x` and is treated as zero past its end; a `y`
/// longer than `x` is rejected since its tail would never be summed.
pub fn cross_correlation(y: &[f64], x: &[f64]) -> MatLibResult<Vec<f64>> {
    check_signal("y", y)?;
    check_signal("x", x)?;
    if y.len() > x.len() {
        return Err(MatLibError::ShapeMismatch {
            op: "cross_correlation",
            detail: format!("reference of {} samples exceeds signal of {}", y.len(), x.len()),
        });
    }
    let n = x.len();
    Ok((0..n)
        .map(|lag| {
            x[lag..]
                .iter()
                .zip(y)
                .map(|(xk, yk)| xk * yk)
                .sum::<f64>()
        })
        .collect())
}

pub fn auto_correlation(x: &[f64]) -> MatLibResult<Vec<f64>> {
    cross_correlation(x, x)
}

/// Zero-lag autocorrelation, Σx².
fn energy(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum()
}

/// Cross-correlation divided by sqrt(Σx²·Σy²), the geometric mean of the
/// zero-lag energies. Self-similarity at lag 0 is exactly 1.
pub fn normalized_cross_correlation(y: &[f64], x: &[f64]) -> MatLibResult<Vec<f64>> {
    let raw = cross_correlation(y, x)?;
    let energy_x = energy(x);
    let energy_y = energy(y);
    let denom = (energy_x * energy_y).sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return Err(MatLibError::InvalidInput(format!(
            "cannot normalize correlation of zero-energy signal (energies {energy_x}, {energy_y})"
        )));
    }
    Ok(raw.into_iter().map(|r| r / denom).collect())
}
