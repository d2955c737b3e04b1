//! Fixed-width text table adapter implementing ResultSink.

use crate::domain::error::SimError;
use crate::domain::season::SeasonResult;
use crate::domain::standings::StandingsRow;
use crate::ports::report_port::ResultSink;
use std::fs;
use std::path::Path;

pub struct TextTableReport;

impl TextTableReport {
    pub fn render(&self, result: &SeasonResult) -> String {
        let mut out = format!("--- League Table Simulation for {} ---\n", result.season);
        if let Some(seed) = result.seed {
            out.push_str(&format!("seed: {seed}\n"));
        }
        out.push_str(&format!(
            "{:>5} {:>20} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5}\n",
            "Rank", "Team", "MP", "W", "D", "L", "Pts", "GF", "GA", "GD"
        ));
        for (i, row) in result.standings.iter().enumerate() {
            out.push_str(&format_row(i + 1, row));
            out.push('\n');
        }
        if !result.skipped.is_empty() {
            out.push_str(&format!("\n{} fixture(s) skipped:\n", result.skipped.len()));
            for skipped in &result.skipped {
                out.push_str(&format!(
                    "  {} v {}: {}\n",
                    skipped.fixture.home, skipped.fixture.away, skipped.reason
                ));
            }
        }
        out
    }
}

fn format_row(rank: usize, row: &StandingsRow) -> String {
    format!(
        "{:>5} {:>20} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5}",
        rank,
        row.team,
        row.matches_played,
        row.wins,
        row.draws,
        row.losses,
        row.points,
        row.goals_for,
        row.goals_against,
        row.goal_difference
    )
}

impl ResultSink for TextTableReport {
    fn write(&self, result: &SeasonResult, output_path: &Path) -> Result<(), SimError> {
        fs::write(output_path, self.render(result))?;
        Ok(())
    }
}
