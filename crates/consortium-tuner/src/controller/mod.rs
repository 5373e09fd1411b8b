//! Parameter controller module
pub mod rules;
pub mod tuner;

pub use self::rules::{Adjustment, RuleOutcome, Stabilization};
pub use self::tuner::{ParameterTuner, TuningDecision, TuningReason};
