//! TuningState - the three coefficients re-tuned each period
//!
//! A state is never mutated in place: the tuner reads the previous state and
//! returns a new one, so the sequence of states stays auditable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tuned scoring coefficients
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TuningState {
    /// Update rate
    pub alpha: f64,
    /// Decay rate
    pub lambda: f64,
    /// Team-bonus weight, fed to the synergy scorer as `gamma`
    pub gamma: f64,
}

impl TuningState {
    pub fn new(alpha: f64, lambda: f64, gamma: f64) -> Self {
        Self {
            alpha,
            lambda,
            gamma,
        }
    }
}

impl Default for TuningState {
    fn default() -> Self {
        Self {
            alpha: 0.10,
            lambda: 0.05,
            gamma: 0.20,
        }
    }
}

impl fmt::Display for TuningState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TuningState(α={:.4}, λ={:.4}, γ={:.4})",
            self.alpha, self.lambda, self.gamma
        )
    }
}
