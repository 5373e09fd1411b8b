//! Scoring module
//!
//! Computes the scalar value of a team from:
//! - Member productivity rates
//! - Pair and group synergy bonuses
//! - A scaled burn-cost penalty

pub mod scorer;

pub use scorer::{ScorerConfig, SynergyScorer};
