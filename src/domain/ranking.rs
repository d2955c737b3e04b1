//! Final league ranking.
//!
//! Rows are ordered by points, then goal difference, then goals scored, all
//! descending. Remaining ties keep the original team order.

use crate::domain::standings::{LeagueTable, StandingsRow};
use std::cmp::Ordering;

/// Compares two rows on (points, goal difference, goals for), best first.
pub fn compare_rows(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
}

/// Ranks rows given in original team order.
pub fn rank_rows(rows: Vec<StandingsRow>) -> Vec<StandingsRow> {
    let mut indexed: Vec<(usize, StandingsRow)> = rows.into_iter().enumerate().collect();
    indexed.sort_by(|(ia, a), (ib, b)| compare_rows(a, b).then_with(|| ia.cmp(ib)));
    indexed.into_iter().map(|(_, row)| row).collect()
}

/// Ranks a finished table using its registration order as the final tie-break.
pub fn rank(table: LeagueTable) -> Vec<StandingsRow> {
    rank_rows(table.into_rows())
}
