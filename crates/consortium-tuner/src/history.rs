//! Tuning history - append-only audit trail of tuning periods

use chrono::{DateTime, Utc};
use consortium_common::{KpiSnapshot, TuningState};
use serde::Serialize;

use crate::controller::{ParameterTuner, TuningDecision};

/// One tuning period as it was decided
#[derive(Debug, Clone, Serialize)]
pub struct TuningRecord {
    /// Period sequence number, starting at 1
    pub period: u64,
    pub previous: TuningState,
    pub next: TuningState,
    /// Reason code, e.g. `ALPHA_UP|LAMBDA_HOLD|GAMMA_DOWN|STABILIZE`
    pub reason: String,
    pub recorded_at: DateTime<Utc>,
}

/// Ordered log of tuning periods
///
/// Records are only ever appended; the current state is the `next` of the
/// latest record, or the initial state before the first period.
#[derive(Debug, Clone, Serialize)]
pub struct TuningHistory {
    initial: TuningState,
    records: Vec<TuningRecord>,
}

impl TuningHistory {
    pub fn new(initial: TuningState) -> Self {
        Self {
            initial,
            records: Vec::new(),
        }
    }

    /// State the next period should start from
    pub fn current(&self) -> TuningState {
        self.records.last().map_or(self.initial, |r| r.next)
    }

    /// Append a decision taken from `previous`
    pub fn record(&mut self, previous: TuningState, decision: &TuningDecision) -> &TuningRecord {
        let period = self.records.len() as u64 + 1;
        self.records.push(TuningRecord {
            period,
            previous,
            next: decision.state,
            reason: decision.reason.to_string(),
            recorded_at: Utc::now(),
        });
        &self.records[self.records.len() - 1]
    }

    /// Tune from the current state and record the result
    pub fn advance(&mut self, tuner: &ParameterTuner, kpi: &KpiSnapshot) -> &TuningRecord {
        let previous = self.current();
        let decision = tuner.tune(&previous, kpi);
        self.record(previous, &decision)
    }

    pub fn records(&self) -> &[TuningRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of periods frozen for lack of data
    pub fn frozen_periods(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.reason == crate::controller::tuner::FROZEN_LOW_DATA)
            .count()
    }
}
