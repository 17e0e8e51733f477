// ─────────────────────────────────────────────────────────────────────
// SCPN MatLib — Sample Driver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Newline-delimited sample files in, correlation curve out.

use matlib_kernel::spectral::normalized_cross_correlation;
use matlib_types::error::{MatLibError, MatLibResult};
use std::path::Path;

pub const DEFAULT_PULSE: &str = "resources/pulse.txt";
pub const DEFAULT_SIGNAL: &str = "resources/signal.txt";

/// One `f64` per line, in file order. Blank lines are skipped; line numbers
/// in errors are 1-based.
pub fn parse_samples(text: &str) -> MatLibResult<Vec<f64>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let value = line.trim();
            value.parse::<f64>().map_err(|_| MatLibError::Parse {
                line: i + 1,
                value: value.to_string(),
            })
        })
        .collect()
}

pub fn read_samples(path: &Path) -> MatLibResult<Vec<f64>> {
    parse_samples(&std::fs::read_to_string(path)?)
}

/// Normalized cross-correlation of the pulse against the received signal.
pub fn correlate_files(pulse: &Path, signal: &Path) -> MatLibResult<Vec<f64>> {
    let pulse = read_samples(pulse)?;
    let signal = read_samples(signal)?;
    normalized_cross_correlation(&pulse, &signal)
}
