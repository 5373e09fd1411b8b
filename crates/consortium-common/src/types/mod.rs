//! Core data types for the Consortium planner

pub mod kpi;
pub mod person;
pub mod synergy;
pub mod team;
pub mod tuning;
