//! Configuration validation and typed config construction.
//!
//! Validates the `[simulation]`, `[data]` and `[report]` sections before a
//! run starts.

use crate::domain::error::SimError;
use crate::domain::sampler::DEFAULT_GOAL_TRIALS;
use crate::domain::season::SimulationConfig;
use crate::domain::strength::{
    StrengthParams, DEFAULT_ATTACK_XGD_WEIGHT, DEFAULT_DEFENSE_XGD_WEIGHT, DEFAULT_SEASON_LENGTH,
};
use crate::ports::config_port::ConfigPort;

pub const MAX_GOAL_TRIALS: i64 = 10;

pub fn validate_simulation_config(config: &dyn ConfigPort) -> Result<(), SimError> {
    validate_season(config)?;
    validate_season_length(config)?;
    validate_goal_trials(config)?;
    validate_weights(config)?;
    validate_seed(config)?;
    Ok(())
}

pub fn validate_data_config(config: &dyn ConfigPort) -> Result<(), SimError> {
    require_string(config, "data", "league_tables")?;
    require_string(config, "data", "fixtures")?;
    Ok(())
}

pub fn validate_report_config(config: &dyn ConfigPort) -> Result<(), SimError> {
    match config.get_string("report", "format").as_deref().map(str::trim) {
        None | Some("text") | Some("csv") => Ok(()),
        Some(other) => Err(invalid(
            "report",
            "format",
            format!("unknown format {other:?}, expected text or csv"),
        )),
    }
}

/// Builds a [`SimulationConfig`] from the `[simulation]` section, applying defaults.
pub fn build_simulation_config(config: &dyn ConfigPort) -> Result<SimulationConfig, SimError> {
    validate_simulation_config(config)?;

    let season = require_string(config, "simulation", "season")?;
    let season_length = parse_int(
        config,
        "simulation",
        "season_length",
        i64::from(DEFAULT_SEASON_LENGTH),
    )? as u32;
    let goal_trials =
        parse_int(config, "simulation", "goal_trials", i64::from(DEFAULT_GOAL_TRIALS))? as u32;

    Ok(SimulationConfig {
        season,
        strength: StrengthParams {
            season_length,
            attack_xgd_weight: parse_double(
                config,
                "simulation",
                "attack_xgd_weight",
                DEFAULT_ATTACK_XGD_WEIGHT,
            )?,
            defense_xgd_weight: parse_double(
                config,
                "simulation",
                "defense_xgd_weight",
                DEFAULT_DEFENSE_XGD_WEIGHT,
            )?,
        },
        goal_trials,
        seed: parse_seed(config)?,
    })
}

fn invalid(section: &str, key: &str, reason: impl Into<String>) -> SimError {
    SimError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason: reason.into(),
    }
}

fn require_string(config: &dyn ConfigPort, section: &str, key: &str) -> Result<String, SimError> {
    match config.get_string(section, key) {
        Some(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        _ => Err(SimError::ConfigMissing {
            section: section.to_string(),
            key: key.to_string(),
        }),
    }
}

fn validate_season(config: &dyn ConfigPort) -> Result<(), SimError> {
    require_string(config, "simulation", "season").map(|_| ())
}

fn validate_season_length(config: &dyn ConfigPort) -> Result<(), SimError> {
    let value = parse_int(
        config,
        "simulation",
        "season_length",
        i64::from(DEFAULT_SEASON_LENGTH),
    )?;
    if value <= 0 || value > i64::from(u32::MAX) {
        return Err(invalid(
            "simulation",
            "season_length",
            "season_length must be a positive integer",
        ));
    }
    Ok(())
}

fn validate_goal_trials(config: &dyn ConfigPort) -> Result<(), SimError> {
    let value = parse_int(config, "simulation", "goal_trials", i64::from(DEFAULT_GOAL_TRIALS))?;
    if !(1..=MAX_GOAL_TRIALS).contains(&value) {
        return Err(invalid(
            "simulation",
            "goal_trials",
            format!("goal_trials must be between 1 and {MAX_GOAL_TRIALS}"),
        ));
    }
    Ok(())
}

fn validate_weights(config: &dyn ConfigPort) -> Result<(), SimError> {
    for key in ["attack_xgd_weight", "defense_xgd_weight"] {
        let value = parse_double(config, "simulation", key, 0.0)?;
        if !value.is_finite() {
            return Err(invalid("simulation", key, format!("{key} must be finite")));
        }
    }
    Ok(())
}

/// Trimmed raw value. A blank entry counts as absent.
fn raw_value(config: &dyn ConfigPort, section: &str, key: &str) -> Option<String> {
    config
        .get_string(section, key)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_int(config: &dyn ConfigPort, section: &str, key: &str, default: i64) -> Result<i64, SimError> {
    match raw_value(config, section, key) {
        None => Ok(default),
        Some(s) => s
            .parse::<i64>()
            .map_err(|_| invalid(section, key, format!("{key} must be an integer, got {s:?}"))),
    }
}

fn parse_double(config: &dyn ConfigPort, section: &str, key: &str, default: f64) -> Result<f64, SimError> {
    match raw_value(config, section, key) {
        None => Ok(default),
        Some(s) => s
            .parse::<f64>()
            .map_err(|_| invalid(section, key, format!("{key} must be a number, got {s:?}"))),
    }
}

fn validate_seed(config: &dyn ConfigPort) -> Result<(), SimError> {
    parse_seed(config).map(|_| ())
}

fn parse_seed(config: &dyn ConfigPort) -> Result<Option<u64>, SimError> {
    match config.get_string("simulation", "seed") {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| invalid("simulation", "seed", "seed must be an unsigned integer")),
    }
}
