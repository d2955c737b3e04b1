//! Cumulative league standings.

use crate::domain::error::SimError;
use crate::domain::fixture::{Fixture, MatchOutcome, Scoreline};
use std::collections::HashMap;

pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsRow {
    pub team: String,
    pub matches_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub points: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
}

impl StandingsRow {
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            matches_played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            points: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
        }
    }

    /// Records one match from this team's point of view.
    pub fn record(&mut self, scored: u32, conceded: u32) {
        self.matches_played += 1;
        if scored > conceded {
            self.wins += 1;
            self.points += POINTS_FOR_WIN;
        } else if scored < conceded {
            self.losses += 1;
        } else {
            self.draws += 1;
            self.points += POINTS_FOR_DRAW;
        }
        self.goals_for += scored;
        self.goals_against += conceded;
        self.goal_difference = self.goals_for as i32 - self.goals_against as i32;
    }
}

/// Standings keyed by team, remembering the order teams were registered in.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueTable {
    order: Vec<String>,
    rows: HashMap<String, StandingsRow>,
}

impl LeagueTable {
    /// Creates a zeroed row for each distinct team. Duplicates are ignored.
    pub fn new<I, S>(teams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = LeagueTable {
            order: Vec::new(),
            rows: HashMap::new(),
        };
        for team in teams {
            let team = team.into();
            if !table.rows.contains_key(&team) {
                table.rows.insert(team.clone(), StandingsRow::new(team.clone()));
                table.order.push(team);
            }
        }
        table
    }

    pub fn teams(&self) -> &[String] {
        &self.order
    }

    pub fn contains(&self, team: &str) -> bool {
        self.rows.contains_key(team)
    }

    pub fn get(&self, team: &str) -> Option<&StandingsRow> {
        self.rows.get(team)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Folds a scoreline into both teams' rows.
    ///
    /// Both teams are checked before either row changes, so an unknown team
    /// leaves the table untouched.
    pub fn apply(&mut self, fixture: &Fixture, score: Scoreline) -> Result<MatchOutcome, SimError> {
        for team in [&fixture.home, &fixture.away] {
            if !self.contains(team) {
                return Err(SimError::UnknownFixtureTeam { team: team.clone() });
            }
        }

        if let Some(home) = self.rows.get_mut(&fixture.home) {
            home.record(score.home_goals, score.away_goals);
        }
        if let Some(away) = self.rows.get_mut(&fixture.away) {
            away.record(score.away_goals, score.home_goals);
        }
        Ok(score.outcome())
    }

    /// Rows in registration order.
    pub fn into_rows(mut self) -> Vec<StandingsRow> {
        self.order
            .iter()
            .filter_map(|team| self.rows.remove(team))
            .collect()
    }
}
