#![allow(dead_code)]

use leaguesim::domain::error::SimError;
use leaguesim::domain::fixture::Fixture;
use leaguesim::domain::strength::TeamStrength;
use leaguesim::domain::team_stats::{SeasonStats, TeamAggregateStats};
use leaguesim::ports::data_port::SeasonDataPort;
use leaguesim::ports::random_port::RandomSource;
use std::collections::{HashMap, VecDeque};

pub struct MockSeasonData {
    pub stats: HashMap<String, Vec<TeamAggregateStats>>,
    pub malformed: HashMap<String, usize>,
    pub fixtures: HashMap<String, Vec<Fixture>>,
    pub errors: HashMap<String, String>,
}

impl MockSeasonData {
    pub fn new() -> Self {
        Self {
            stats: HashMap::new(),
            malformed: HashMap::new(),
            fixtures: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_stats(mut self, season: &str, rows: Vec<TeamAggregateStats>) -> Self {
        self.stats.insert(season.to_string(), rows);
        self
    }

    pub fn with_malformed_rows(mut self, season: &str, count: usize) -> Self {
        self.malformed.insert(season.to_string(), count);
        self
    }

    pub fn with_fixtures(mut self, season: &str, fixtures: Vec<Fixture>) -> Self {
        self.fixtures.insert(season.to_string(), fixtures);
        self
    }

    pub fn with_error(mut self, season: &str, reason: &str) -> Self {
        self.errors.insert(season.to_string(), reason.to_string());
        self
    }
}

impl SeasonDataPort for MockSeasonData {
    fn fetch_team_stats(&self, season: &str) -> Result<SeasonStats, SimError> {
        if let Some(reason) = self.errors.get(season) {
            return Err(SimError::DataSource {
                reason: reason.clone(),
            });
        }
        let rejected = (0..self.malformed.get(season).copied().unwrap_or(0))
            .map(|i| SimError::MalformedStatRow {
                line: i + 2,
                reason: "invalid GF value".into(),
            })
            .collect();
        Ok(SeasonStats {
            rows: self.stats.get(season).cloned().unwrap_or_default(),
            rejected,
            teams: Vec::new(),
        })
    }

    fn fetch_fixtures(&self, season: &str) -> Result<Vec<Fixture>, SimError> {
        if let Some(reason) = self.errors.get(season) {
            return Err(SimError::DataSource {
                reason: reason.clone(),
            });
        }
        Ok(self.fixtures.get(season).cloned().unwrap_or_default())
    }

    fn list_seasons(&self) -> Result<Vec<String>, SimError> {
        let mut seasons: Vec<String> = self.stats.keys().cloned().collect();
        seasons.sort();
        Ok(seasons)
    }
}

/// Replays a fixed list of uniform draws.
pub struct ScriptedRandom(pub VecDeque<f64>);

impl ScriptedRandom {
    pub fn new(values: &[f64]) -> Self {
        Self(values.iter().copied().collect())
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        self.0.pop_front().expect("scripted random source exhausted")
    }
}

pub const SEASON: &str = "2024 2025";

pub fn stat(team: &str, mp: f64, gf: f64, ga: f64, xgd: f64) -> TeamAggregateStats {
    TeamAggregateStats {
        team: team.to_string(),
        matches_played: mp,
        goals_for: gf,
        goals_against: ga,
        xgd_per_90: xgd,
    }
}

pub fn strength(team: &str, attack: f64, defense: f64) -> TeamStrength {
    TeamStrength {
        team: team.to_string(),
        attack,
        defense,
    }
}

/// A six-team league loosely based on a real season.
pub fn league_stats() -> Vec<TeamAggregateStats> {
    vec![
        stat("Liverpool", 38.0, 86.0, 41.0, 1.15),
        stat("Arsenal", 38.0, 69.0, 34.0, 0.71),
        stat("Manchester City", 38.0, 72.0, 44.0, 0.62),
        stat("Chelsea", 38.0, 64.0, 43.0, 0.54),
        stat("Everton", 38.0, 42.0, 44.0, -0.12),
        stat("Southampton", 38.0, 26.0, 86.0, -1.41),
    ]
}

/// Double round robin over `teams`: each pair meets home and away.
pub fn double_round_robin(teams: &[&str]) -> Vec<Fixture> {
    let mut fixtures = Vec::new();
    for home in teams {
        for away in teams {
            if home != away {
                fixtures.push(Fixture::new(*home, *away));
            }
        }
    }
    fixtures
}

pub fn league_teams() -> Vec<&'static str> {
    vec![
        "Liverpool",
        "Arsenal",
        "Manchester City",
        "Chelsea",
        "Everton",
        "Southampton",
    ]
}

pub fn league_port() -> MockSeasonData {
    MockSeasonData::new()
        .with_stats(SEASON, league_stats())
        .with_fixtures(SEASON, double_round_robin(&league_teams()))
}
