//! leaguesim: season simulation engine for round-robin football leagues.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`], and the end-to-end run in [`pipeline`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod pipeline;
