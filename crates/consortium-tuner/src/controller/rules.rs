//! Per-parameter decision rules and their reason codes
//!
//! Each rule looks only at the KPI snapshot and thresholds. Rules are
//! evaluated independently; stabilization is a separate fourth outcome that
//! stacks on top of the other three.

use consortium_common::KpiSnapshot;
use serde::{Deserialize, Serialize};

use crate::TunerConfig;

/// Direction of a single-parameter adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Adjustment {
    Up,
    Down,
    Hold,
}

impl Adjustment {
    pub fn steps(self) -> i32 {
        match self {
            Adjustment::Up => 1,
            Adjustment::Down => -1,
            Adjustment::Hold => 0,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Adjustment::Up => "UP",
            Adjustment::Down => "DOWN",
            Adjustment::Hold => "HOLD",
        }
    }
}

/// Emergency damping outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stabilization {
    Stabilize,
    NoStabilize,
}

impl Stabilization {
    pub fn steps(self) -> i32 {
        match self {
            Stabilization::Stabilize => -1,
            Stabilization::NoStabilize => 0,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Stabilization::Stabilize => "STABILIZE",
            Stabilization::NoStabilize => "NO_STABILIZE",
        }
    }
}

/// Update rate: improving throughput under low disorder raises it,
/// either high disorder or falling throughput lowers it.
pub fn alpha_rule(kpi: &KpiSnapshot, config: &TunerConfig) -> Adjustment {
    if kpi.entropy_ratio <= config.entropy_good && kpi.velocity_improving() {
        Adjustment::Up
    } else if kpi.entropy_ratio >= config.entropy_warn || kpi.velocity_degrading() {
        Adjustment::Down
    } else {
        Adjustment::Hold
    }
}

/// Decay rate: the mint check wins when both ratios cross their thresholds.
pub fn lambda_rule(kpi: &KpiSnapshot, config: &TunerConfig) -> Adjustment {
    if kpi.indirect_mint_ratio >= config.indirect_mint_up {
        Adjustment::Up
    } else if kpi.indirect_burn_ratio >= config.indirect_burn_down {
        Adjustment::Down
    } else {
        Adjustment::Hold
    }
}

/// Team-bonus weight: a missing correlation never raises it.
pub fn gamma_rule(kpi: &KpiSnapshot, config: &TunerConfig) -> Adjustment {
    let corr = kpi.corr_team_to_net;
    if corr.is_some_and(|c| c >= config.corr_up) {
        Adjustment::Up
    } else if kpi.entropy_ratio >= config.entropy_warn
        || corr.is_some_and(|c| c <= config.corr_down)
    {
        Adjustment::Down
    } else {
        Adjustment::Hold
    }
}

pub fn stabilization_rule(kpi: &KpiSnapshot, config: &TunerConfig) -> Stabilization {
    if kpi.entropy_ratio >= config.entropy_bad {
        Stabilization::Stabilize
    } else {
        Stabilization::NoStabilize
    }
}

/// Outcome of all four rules for one period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub alpha: Adjustment,
    pub lambda: Adjustment,
    pub gamma: Adjustment,
    pub stabilization: Stabilization,
}

impl RuleOutcome {
    pub fn evaluate(kpi: &KpiSnapshot, config: &TunerConfig) -> Self {
        Self {
            alpha: alpha_rule(kpi, config),
            lambda: lambda_rule(kpi, config),
            gamma: gamma_rule(kpi, config),
            stabilization: stabilization_rule(kpi, config),
        }
    }

    /// Net whole steps for (alpha, lambda, gamma), stabilization included
    pub fn net_steps(&self) -> (i32, i32, i32) {
        let damp = self.stabilization.steps();
        (
            self.alpha.steps() + damp,
            self.lambda.steps() + damp,
            self.gamma.steps() + damp,
        )
    }

    /// Audit code, e.g. `ALPHA_UP|LAMBDA_HOLD|GAMMA_DOWN|STABILIZE`
    pub fn reason_code(&self) -> String {
        format!(
            "ALPHA_{}|LAMBDA_{}|GAMMA_{}|{}",
            self.alpha.suffix(),
            self.lambda.suffix(),
            self.gamma.suffix(),
            self.stabilization.code()
        )
    }
}
