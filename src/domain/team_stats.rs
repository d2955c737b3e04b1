//! Season-aggregate team statistics.

use crate::domain::error::SimError;

/// One team's aggregate record for a season, as loaded from the league table.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamAggregateStats {
    pub team: String,
    pub matches_played: f64,
    pub goals_for: f64,
    pub goals_against: f64,
    pub xgd_per_90: f64,
}

/// Stat rows for one season, split into accepted and rejected rows.
///
/// `teams` lists every team named by a season row, rejected rows included,
/// so a team with no usable stats still has a place in the table.
#[derive(Debug, Default)]
pub struct SeasonStats {
    pub rows: Vec<TeamAggregateStats>,
    pub rejected: Vec<SimError>,
    pub teams: Vec<String>,
}

impl SeasonStats {
    /// Records a team named by a source row, accepted or not.
    pub fn note_team(&mut self, team: &str) {
        if !self.teams.iter().any(|t| t == team) {
            self.teams.push(team.to_string());
        }
    }

    /// Distinct team identifiers in order of first appearance. Teams noted by
    /// the provider come first, then any further teams found in `rows`.
    pub fn team_order(&self) -> Vec<String> {
        let mut teams = self.teams.clone();
        for team in team_order(&self.rows) {
            if !teams.contains(&team) {
                teams.push(team);
            }
        }
        teams
    }
}

pub fn team_order(rows: &[TeamAggregateStats]) -> Vec<String> {
    let mut teams: Vec<String> = Vec::new();
    for row in rows {
        if !teams.iter().any(|t| t == &row.team) {
            teams.push(row.team.clone());
        }
    }
    teams
}

/// Sums every row belonging to `team`.
pub fn team_totals(rows: &[TeamAggregateStats], team: &str) -> TeamAggregateStats {
    rows.iter().filter(|r| r.team == team).fold(
        TeamAggregateStats {
            team: team.to_string(),
            matches_played: 0.0,
            goals_for: 0.0,
            goals_against: 0.0,
            xgd_per_90: 0.0,
        },
        |mut acc, r| {
            acc.matches_played += r.matches_played;
            acc.goals_for += r.goals_for;
            acc.goals_against += r.goals_against;
            acc.xgd_per_90 += r.xgd_per_90;
            acc
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(team: &str, mp: f64, gf: f64, ga: f64, xgd: f64) -> TeamAggregateStats {
        TeamAggregateStats {
            team: team.into(),
            matches_played: mp,
            goals_for: gf,
            goals_against: ga,
            xgd_per_90: xgd,
        }
    }

    #[test]
    fn team_order_keeps_first_appearance() {
        let rows = vec![
            row("Liverpool", 38.0, 86.0, 41.0, 0.8),
            row("Arsenal", 38.0, 69.0, 34.0, 0.7),
            row("Liverpool", 0.0, 0.0, 0.0, 0.0),
            row("Everton", 38.0, 42.0, 44.0, -0.2),
        ];
        assert_eq!(team_order(&rows), vec!["Liverpool", "Arsenal", "Everton"]);
    }

    #[test]
    fn team_totals_sums_duplicate_rows() {
        let rows = vec![
            row("Fulham", 20.0, 30.0, 25.0, 0.1),
            row("Brentford", 38.0, 66.0, 57.0, 0.0),
            row("Fulham", 18.0, 24.0, 29.0, -0.05),
        ];
        let totals = team_totals(&rows, "Fulham");
        assert_eq!(totals.matches_played, 38.0);
        assert_eq!(totals.goals_for, 54.0);
        assert_eq!(totals.goals_against, 54.0);
        assert!((totals.xgd_per_90 - 0.05).abs() < 1e-12);
    }

    #[test]
    fn season_order_includes_teams_without_rows() {
        let mut stats = SeasonStats {
            rows: vec![
                row("Liverpool", 38.0, 86.0, 41.0, 0.8),
                row("Arsenal", 38.0, 69.0, 34.0, 0.7),
            ],
            ..SeasonStats::default()
        };
        stats.note_team("Liverpool");
        stats.note_team("Chelsea");
        stats.note_team("Arsenal");
        stats.note_team("Chelsea");
        assert_eq!(stats.team_order(), vec!["Liverpool", "Chelsea", "Arsenal"]);
    }

    #[test]
    fn season_order_falls_back_to_rows() {
        let stats = SeasonStats {
            rows: vec![row("Everton", 38.0, 42.0, 44.0, -0.2)],
            ..SeasonStats::default()
        };
        assert_eq!(stats.team_order(), vec!["Everton"]);
    }

    #[test]
    fn team_totals_for_unknown_team_is_zero() {
        let totals = team_totals(&[], "Watford");
        assert_eq!(totals.team, "Watford");
        assert_eq!(totals.matches_played, 0.0);
    }
}
