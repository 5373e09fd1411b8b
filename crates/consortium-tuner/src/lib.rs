//! # Consortium Tuner
//!
//! Bounded, rule-based feedback loop for the scoring coefficients.
//!
//! ## Rules
//!
//! ```text
//! α (update rate):  UP   if entropy ≤ good AND velocity rising
//!                   DOWN if entropy ≥ warn OR velocity falling
//! λ (decay rate):   UP   if indirect mint ≥ mint_up
//!                   DOWN if indirect burn ≥ burn_down
//! γ (team bonus):   UP   if corr ≥ 0.6
//!                   DOWN if entropy ≥ warn OR corr ≤ 0.3
//! ```
//!
//! When entropy reaches the bad threshold every parameter takes one more
//! step down. Each result is then clamped to its bounds. Periods with fewer
//! than five events are frozen.

pub mod controller;
pub mod history;

pub use controller::{
    Adjustment, ParameterTuner, RuleOutcome, Stabilization, TuningDecision, TuningReason,
};
pub use history::{TuningHistory, TuningRecord};

use consortium_common::{ConsortiumError, Result, MIN_TUNING_EVENTS};
use serde::{Deserialize, Serialize};

/// Range and step size of one tuned parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParamBounds {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Move `value` by `steps` whole steps, then clamp into `[min, max]`
    pub fn apply(&self, value: f64, steps: i32) -> f64 {
        let moved = value + f64::from(steps) * self.step;
        if moved.is_nan() {
            return self.min;
        }
        moved.clamp(self.min, self.max)
    }

    fn validate(&self, name: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(ConsortiumError::config(format!(
                "{} bounds must be finite with min <= max, got [{}, {}]",
                name, self.min, self.max
            )));
        }
        if !self.step.is_finite() || self.step < 0.0 {
            return Err(ConsortiumError::config(format!(
                "{} step must be a non-negative number, got {}",
                name, self.step
            )));
        }
        Ok(())
    }
}

/// Tuner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TunerConfig {
    /// Periods with fewer events are frozen
    pub min_events: u64,
    /// Entropy at or below this lets a rising velocity raise alpha.
    /// Independent of the warn/bad ladder, so it may sit above both.
    pub entropy_good: f64,
    /// Entropy at or above this is a warning
    pub entropy_warn: f64,
    /// Entropy at or above this triggers stabilization
    pub entropy_bad: f64,
    /// Indirect mint ratio that raises lambda
    pub indirect_mint_up: f64,
    /// Indirect burn ratio that lowers lambda
    pub indirect_burn_down: f64,
    /// Team-to-net correlation that raises gamma
    pub corr_up: f64,
    /// Team-to-net correlation that lowers gamma
    pub corr_down: f64,
    pub alpha: ParamBounds,
    pub lambda: ParamBounds,
    pub gamma: ParamBounds,
}

impl Default for TunerConfig {
    fn default() -> Self {
        Self {
            min_events: MIN_TUNING_EVENTS,
            entropy_good: 0.40,
            entropy_warn: 0.25,
            entropy_bad: 0.30,
            indirect_mint_up: 0.35,
            indirect_burn_down: 0.35,
            corr_up: 0.6,
            corr_down: 0.3,
            alpha: ParamBounds::new(0.01, 0.50, 0.02),
            lambda: ParamBounds::new(0.00, 0.20, 0.01),
            gamma: ParamBounds::new(0.00, 0.60, 0.02),
        }
    }
}

impl TunerConfig {
    pub fn validate(&self) -> Result<()> {
        self.alpha.validate("alpha")?;
        self.lambda.validate("lambda")?;
        self.gamma.validate("gamma")?;

        if !(self.entropy_warn < self.entropy_bad) {
            return Err(ConsortiumError::config(format!(
                "entropy_bad ({}) must be greater than entropy_warn ({})",
                self.entropy_bad, self.entropy_warn
            )));
        }
        if !(self.corr_down <= self.corr_up) {
            return Err(ConsortiumError::config(format!(
                "corr_down ({}) must not exceed corr_up ({})",
                self.corr_down, self.corr_up
            )));
        }
        Ok(())
    }
}
