// ─────────────────────────────────────────────────────────────────────
// SCPN MatLib — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::{
    JACOBI_MAX_ROTATIONS, JACOBI_THRESHOLD, POWER_MAX_ITERATIONS, POWER_TOLERANCE,
    SYMMETRY_TOLERANCE,
};
use crate::error::{MatLibError, MatLibResult};
use serde::{Deserialize, Serialize};

/// Stopping policy for the iterative eigen solvers.
/// Maps 1:1 to configs/kernel.json; every field may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KernelConfig {
    #[serde(default)]
    pub jacobi: JacobiConfig,
    #[serde(default)]
    pub power_iteration: PowerIterationConfig,
}

/// Cyclic Jacobi rotation settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JacobiConfig {
    /// Stop once the largest off-diagonal magnitude drops below this.
    #[serde(default = "default_jacobi_threshold")]
    pub threshold: f64,
    #[serde(default = "default_jacobi_max_rotations")]
    pub max_rotations: usize,
    #[serde(default = "default_symmetry_tolerance")]
    pub symmetry_tolerance: f64,
}

/// Power iteration settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerIterationConfig {
    /// Stop once ||lambda * y - A * y||_1 drops below this.
    #[serde(default = "default_power_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_power_max_iterations")]
    pub max_iterations: usize,
}

fn default_jacobi_threshold() -> f64 {
    JACOBI_THRESHOLD
}
fn default_jacobi_max_rotations() -> usize {
    JACOBI_MAX_ROTATIONS
}
fn default_symmetry_tolerance() -> f64 {
    SYMMETRY_TOLERANCE
}
fn default_power_tolerance() -> f64 {
    POWER_TOLERANCE
}
fn default_power_max_iterations() -> usize {
    POWER_MAX_ITERATIONS
}

impl Default for JacobiConfig {
    fn default() -> Self {
        JacobiConfig {
            threshold: default_jacobi_threshold(),
            max_rotations: default_jacobi_max_rotations(),
            symmetry_tolerance: default_symmetry_tolerance(),
        }
    }
}

impl Default for PowerIterationConfig {
    fn default() -> Self {
        PowerIterationConfig {
            tolerance: default_power_tolerance(),
            max_iterations: default_power_max_iterations(),
        }
    }
}

impl KernelConfig {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> MatLibResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> MatLibResult<()> {
        self.jacobi.validate()?;
        self.power_iteration.validate()
    }
}

impl JacobiConfig {
    pub fn validate(&self) -> MatLibResult<()> {
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return Err(MatLibError::ConfigError(format!(
                "jacobi.threshold must be finite and > 0, got {}",
                self.threshold
            )));
        }
        if self.max_rotations == 0 {
            return Err(MatLibError::ConfigError(
                "jacobi.max_rotations must be >= 1".to_string(),
            ));
        }
        if !(self.symmetry_tolerance.is_finite() && self.symmetry_tolerance >= 0.0) {
            return Err(MatLibError::ConfigError(format!(
                "jacobi.symmetry_tolerance must be finite and >= 0, got {}",
                self.symmetry_tolerance
            )));
        }
        Ok(())
    }
}

impl PowerIterationConfig {
    pub fn validate(&self) -> MatLibResult<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(MatLibError::ConfigError(format!(
                "power_iteration.tolerance must be finite and > 0, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(MatLibError::ConfigError(
                "power_iteration.max_iterations must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}
