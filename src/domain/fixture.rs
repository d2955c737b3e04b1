//! Fixture and scoreline representation.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub home: String,
    pub away: String,
}

impl Fixture {
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreline {
    pub home_goals: u32,
    pub away_goals: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    HomeWin,
    Draw,
    AwayWin,
}

impl Scoreline {
    pub fn new(home_goals: u32, away_goals: u32) -> Self {
        Self {
            home_goals,
            away_goals,
        }
    }

    pub fn outcome(&self) -> MatchOutcome {
        use std::cmp::Ordering;
        match self.home_goals.cmp(&self.away_goals) {
            Ordering::Greater => MatchOutcome::HomeWin,
            Ordering::Less => MatchOutcome::AwayWin,
            Ordering::Equal => MatchOutcome::Draw,
        }
    }
}
