//! KPI snapshot - outcome signals for one tuning period

use serde::{Deserialize, Serialize};

/// Read-only period signals consumed by the parameter tuner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiSnapshot {
    /// Normalized disorder/loss signal (primary risk trigger)
    pub entropy_ratio: f64,
    /// Throughput rate this period
    pub coin_velocity: f64,
    /// Throughput rate last period
    pub coin_velocity_prev: f64,
    /// Number of events observed this period
    pub events_count: u64,
    /// Share of value minted through indirect channels
    #[serde(default)]
    pub indirect_mint_ratio: f64,
    /// Share of value burned through indirect channels
    #[serde(default)]
    pub indirect_burn_ratio: f64,
    /// Correlation proxy between team activity and net value, if measured
    #[serde(default)]
    pub corr_team_to_net: Option<f64>,
}

impl KpiSnapshot {
    pub fn velocity_improving(&self) -> bool {
        self.coin_velocity > self.coin_velocity_prev
    }

    pub fn velocity_degrading(&self) -> bool {
        self.coin_velocity < self.coin_velocity_prev
    }
}
