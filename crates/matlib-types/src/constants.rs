// ─────────────────────────────────────────────────────────────────────
// SCPN MatLib — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

/// Pivots with magnitude at or below this times ||A||_1 are treated as zero.
pub const PIVOT_EPSILON: f64 = 1e-12;

/// Off-diagonal magnitude at which cyclic Jacobi rotation stops.
pub const JACOBI_THRESHOLD: f64 = 1e-4;

/// Hard ceiling on Jacobi rotations.
pub const JACOBI_MAX_ROTATIONS: usize = 10_000;

/// Largest |A[i][j] - A[j][i]| accepted as symmetric.
pub const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// Residual norm at which power iteration stops.
pub const POWER_TOLERANCE: f64 = 1e-10;

/// Hard ceiling on power iterations.
pub const POWER_MAX_ITERATIONS: usize = 1_000;
