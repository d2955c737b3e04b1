//! Core domain types and simulation logic.

pub mod error;
pub mod team_stats;
pub mod fixture;
pub mod strength;
pub mod sampler;
pub mod standings;
pub mod ranking;
pub mod season;
pub mod config_validation;
