//! Parameter tuner
//!
//! Produces the next [`TuningState`] from the previous one and a KPI
//! snapshot. Never fails: degenerate inputs fall through to hold branches
//! and every adjusted value is clamped to its bounds.

use consortium_common::{KpiSnapshot, Result, TuningState};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, instrument, warn};

use super::rules::RuleOutcome;
use crate::TunerConfig;

/// Reason code emitted when a period has too few events
pub const FROZEN_LOW_DATA: &str = "FROZEN_LOW_DATA";

/// Why the tuner produced its state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuningReason {
    /// Too few events; previous state returned untouched
    FrozenLowData,
    /// Rules evaluated and applied
    Adjusted(RuleOutcome),
}

impl TuningReason {
    pub fn outcome(&self) -> Option<&RuleOutcome> {
        match self {
            TuningReason::FrozenLowData => None,
            TuningReason::Adjusted(outcome) => Some(outcome),
        }
    }
}

impl fmt::Display for TuningReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningReason::FrozenLowData => f.write_str(FROZEN_LOW_DATA),
            TuningReason::Adjusted(outcome) => f.write_str(&outcome.reason_code()),
        }
    }
}

impl Serialize for TuningReason {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// New state plus the reason it was chosen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TuningDecision {
    pub state: TuningState,
    pub reason: TuningReason,
}

impl TuningDecision {
    pub fn is_frozen(&self) -> bool {
        matches!(self.reason, TuningReason::FrozenLowData)
    }
}

/// Rule-based parameter tuner
#[derive(Debug, Clone, Default)]
pub struct ParameterTuner {
    config: TunerConfig,
}

impl ParameterTuner {
    pub fn new(config: TunerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TunerConfig {
        &self.config
    }

    /// Compute the next state. `prev` is read-only; the result is a new value.
    #[instrument(skip(self, kpi), fields(events = kpi.events_count, entropy = kpi.entropy_ratio))]
    pub fn tune(&self, prev: &TuningState, kpi: &KpiSnapshot) -> TuningDecision {
        if kpi.events_count < self.config.min_events {
            warn!(
                min_events = self.config.min_events,
                "Too few events this period, parameters frozen"
            );
            return TuningDecision {
                state: *prev,
                reason: TuningReason::FrozenLowData,
            };
        }

        let outcome = RuleOutcome::evaluate(kpi, &self.config);
        let (d_alpha, d_lambda, d_gamma) = outcome.net_steps();
        debug!(?outcome, d_alpha, d_lambda, d_gamma, "Rules evaluated");

        let state = TuningState {
            alpha: self.config.alpha.apply(prev.alpha, d_alpha),
            lambda: self.config.lambda.apply(prev.lambda, d_lambda),
            gamma: self.config.gamma.apply(prev.gamma, d_gamma),
        };

        let reason = TuningReason::Adjusted(outcome);
        info!(%prev, next = %state, %reason, "Parameters tuned");

        TuningDecision { state, reason }
    }
}
