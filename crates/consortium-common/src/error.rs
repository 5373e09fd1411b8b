//! Error types for the Consortium planner
//!
//! Only caller contract violations are errors. Sparse tables and
//! "no viable team" outcomes are handled with neutral values and sentinels.

use thiserror::Error;

/// Result type alias using ConsortiumError
pub type Result<T> = std::result::Result<T, ConsortiumError>;

/// Unified error type for Consortium operations
#[derive(Debug, Error)]
pub enum ConsortiumError {
    // Team shape errors
    #[error("Invalid team: {0}")]
    InvalidTeam(String),

    // Caller contract violations
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ConsortiumError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        ConsortiumError::InvalidInput(msg.into())
    }

    pub fn invalid_team(msg: impl Into<String>) -> Self {
        ConsortiumError::InvalidTeam(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        ConsortiumError::Config(msg.into())
    }
}

impl From<serde_json::Error> for ConsortiumError {
    fn from(err: serde_json::Error) -> Self {
        ConsortiumError::Serialization(err.to_string())
    }
}
