//! Team strength estimation from season-aggregate statistics.
//!
//! Attack and defense coefficients combine a team's scoring ratio against the
//! league average with an expected-goal-differential correction:
//!
//! ```text
//! attack  = (team_gf / season_length) / league_avg_gf + xgd_per_90 * attack_xgd_weight
//! defense = league_avg_ga / (team_ga / season_length) + xgd_per_90 * defense_xgd_weight
//! ```
//!
//! Coefficients are not guaranteed to be positive.

use crate::domain::error::SimError;
use crate::domain::team_stats::{team_order, team_totals, TeamAggregateStats};
use std::collections::HashMap;
use tracing::warn;

pub const DEFAULT_SEASON_LENGTH: u32 = 38;
pub const DEFAULT_ATTACK_XGD_WEIGHT: f64 = -0.82;
pub const DEFAULT_DEFENSE_XGD_WEIGHT: f64 = 1.0;

/// Label used in [`SimError::DegenerateAverage`] when the league-wide average fails.
pub const LEAGUE: &str = "league";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthParams {
    /// Scheduled matches per team, used as the per-team average divisor.
    pub season_length: u32,
    pub attack_xgd_weight: f64,
    pub defense_xgd_weight: f64,
}

impl Default for StrengthParams {
    fn default() -> Self {
        Self {
            season_length: DEFAULT_SEASON_LENGTH,
            attack_xgd_weight: DEFAULT_ATTACK_XGD_WEIGHT,
            defense_xgd_weight: DEFAULT_DEFENSE_XGD_WEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamStrength {
    pub team: String,
    pub attack: f64,
    pub defense: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeagueAverages {
    pub goals_for: f64,
    pub goals_against: f64,
}

/// Strengths for every team that could be estimated, plus the failures.
#[derive(Debug, Default)]
pub struct StrengthTable {
    teams: Vec<String>,
    strengths: HashMap<String, TeamStrength>,
    pub failures: Vec<SimError>,
}

impl StrengthTable {
    /// Every team seen in the stat rows, in first-appearance order, including
    /// teams whose estimation failed.
    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    pub fn get(&self, team: &str) -> Option<&TeamStrength> {
        self.strengths.get(team)
    }

    pub fn insert(&mut self, strength: TeamStrength) {
        if !self.teams.contains(&strength.team) {
            self.teams.push(strength.team.clone());
        }
        self.strengths.insert(strength.team.clone(), strength);
    }

    /// Number of teams with a usable strength entry.
    pub fn resolved_count(&self) -> usize {
        self.strengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strengths.is_empty()
    }
}

impl FromIterator<TeamStrength> for StrengthTable {
    fn from_iter<I: IntoIterator<Item = TeamStrength>>(iter: I) -> Self {
        let mut table = StrengthTable::default();
        for strength in iter {
            table.insert(strength);
        }
        table
    }
}

pub fn league_averages(rows: &[TeamAggregateStats]) -> Result<LeagueAverages, SimError> {
    let matches: f64 = rows.iter().map(|r| r.matches_played).sum();
    let goals_for: f64 = rows.iter().map(|r| r.goals_for).sum();
    let goals_against: f64 = rows.iter().map(|r| r.goals_against).sum();

    if matches == 0.0 {
        return Err(SimError::DegenerateAverage {
            team: LEAGUE.to_string(),
            reason: "total matches played is zero".to_string(),
        });
    }

    let averages = LeagueAverages {
        goals_for: goals_for / matches,
        goals_against: goals_against / matches,
    };

    if averages.goals_for == 0.0 {
        return Err(SimError::DegenerateAverage {
            team: LEAGUE.to_string(),
            reason: "league goals-for average is zero".to_string(),
        });
    }
    if !averages.goals_for.is_finite() || !averages.goals_against.is_finite() {
        return Err(SimError::DegenerateAverage {
            team: LEAGUE.to_string(),
            reason: "league average is not finite".to_string(),
        });
    }

    Ok(averages)
}

pub fn team_strength(
    totals: &TeamAggregateStats,
    league: LeagueAverages,
    params: &StrengthParams,
) -> Result<TeamStrength, SimError> {
    let degenerate = |reason: &str| SimError::DegenerateAverage {
        team: totals.team.clone(),
        reason: reason.to_string(),
    };

    if totals.matches_played == 0.0 {
        return Err(degenerate("no matches played"));
    }
    if params.season_length == 0 {
        return Err(degenerate("season length is zero"));
    }

    let season_length = f64::from(params.season_length);
    let avg_gf = totals.goals_for / season_length;
    let avg_ga = totals.goals_against / season_length;

    if avg_ga == 0.0 {
        return Err(degenerate("no goals conceded"));
    }

    let attack = avg_gf / league.goals_for + totals.xgd_per_90 * params.attack_xgd_weight;
    let defense = league.goals_against / avg_ga + totals.xgd_per_90 * params.defense_xgd_weight;

    if !attack.is_finite() || !defense.is_finite() {
        return Err(degenerate("strength is not finite"));
    }

    Ok(TeamStrength {
        team: totals.team.clone(),
        attack,
        defense,
    })
}

/// Estimates a strength for every team in `rows`.
///
/// Failures are collected on the table rather than returned; a league-wide
/// failure marks every team as failed.
pub fn estimate_strengths(rows: &[TeamAggregateStats], params: &StrengthParams) -> StrengthTable {
    estimate_strengths_for(team_order(rows), rows, params)
}

/// Estimates a strength for each of `teams`. A team with no row in `rows`
/// fails with [`SimError::DegenerateAverage`].
pub fn estimate_strengths_for(
    teams: Vec<String>,
    rows: &[TeamAggregateStats],
    params: &StrengthParams,
) -> StrengthTable {
    let mut table = StrengthTable {
        teams: teams.clone(),
        ..StrengthTable::default()
    };

    let league = match league_averages(rows) {
        Ok(avg) => avg,
        Err(e) => {
            warn!(error = %e, "league averages unavailable; no strengths estimated");
            table.failures = teams
                .into_iter()
                .map(|team| SimError::DegenerateAverage {
                    team,
                    reason: e.to_string(),
                })
                .collect();
            return table;
        }
    };

    for team in teams {
        if !rows.iter().any(|r| r.team == team) {
            let e = SimError::DegenerateAverage {
                team: team.clone(),
                reason: "no valid stat rows".to_string(),
            };
            warn!(team = %team, error = %e, "skipping team strength");
            table.failures.push(e);
            continue;
        }
        let totals = team_totals(rows, &team);
        match team_strength(&totals, league, params) {
            Ok(strength) => {
                table.strengths.insert(team, strength);
            }
            Err(e) => {
                warn!(team = %team, error = %e, "skipping team strength");
                table.failures.push(e);
            }
        }
    }

    table
}
