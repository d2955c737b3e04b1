//! CSV standings adapter implementing ResultSink.

use crate::domain::error::SimError;
use crate::domain::season::SeasonResult;
use crate::domain::standings::StandingsRow;
use crate::ports::report_port::ResultSink;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct StandingsRecord<'a> {
    #[serde(rename = "Rank")]
    rank: usize,
    #[serde(rename = "Team")]
    team: &'a str,
    #[serde(rename = "MP")]
    matches_played: u32,
    #[serde(rename = "W")]
    wins: u32,
    #[serde(rename = "D")]
    draws: u32,
    #[serde(rename = "L")]
    losses: u32,
    #[serde(rename = "Pts")]
    points: u32,
    #[serde(rename = "GF")]
    goals_for: u32,
    #[serde(rename = "GA")]
    goals_against: u32,
    #[serde(rename = "GD")]
    goal_difference: i32,
}

impl<'a> StandingsRecord<'a> {
    fn new(rank: usize, row: &'a StandingsRow) -> Self {
        Self {
            rank,
            team: &row.team,
            matches_played: row.matches_played,
            wins: row.wins,
            draws: row.draws,
            losses: row.losses,
            points: row.points,
            goals_for: row.goals_for,
            goals_against: row.goals_against,
            goal_difference: row.goal_difference,
        }
    }
}

pub struct CsvStandingsReport;

impl CsvStandingsReport {
    fn write_to<W: std::io::Write>(&self, result: &SeasonResult, out: W) -> Result<(), SimError> {
        let mut wtr = csv::Writer::from_writer(out);
        for (i, row) in result.standings.iter().enumerate() {
            wtr.serialize(StandingsRecord::new(i + 1, row))
                .map_err(|e| SimError::DataSource {
                    reason: format!("CSV write error: {}", e),
                })?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn render(&self, result: &SeasonResult) -> Result<String, SimError> {
        let mut buf = Vec::new();
        self.write_to(result, &mut buf)?;
        String::from_utf8(buf).map_err(|e| SimError::DataSource {
            reason: format!("CSV output is not UTF-8: {}", e),
        })
    }
}

impl ResultSink for CsvStandingsReport {
    fn write(&self, result: &SeasonResult, output_path: &Path) -> Result<(), SimError> {
        let file = std::fs::File::create(output_path)?;
        self.write_to(result, file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> SeasonResult {
        let mut spurs = StandingsRow::new("Tottenham");
        spurs.record(1, 1);
        let mut west_ham = StandingsRow::new("West Ham");
        west_ham.record(1, 1);
        SeasonResult {
            season: "2023 2024".into(),
            seed: None,
            standings: vec![spurs, west_ham],
            matches: Vec::new(),
            skipped: Vec::new(),
            team_failures: Vec::new(),
            rejected_rows: Vec::new(),
        }
    }

    #[test]
    fn render_has_header_and_ranked_rows() {
        let csv = CsvStandingsReport.render(&sample_result()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Rank,Team,MP,W,D,L,Pts,GF,GA,GD");
        assert_eq!(lines[1], "1,Tottenham,1,0,1,0,1,1,1,0");
        assert_eq!(lines[2], "2,West Ham,1,0,1,0,1,1,1,0");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn write_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("standings.csv");
        CsvStandingsReport.write(&sample_result(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Rank,Team"));
    }
}
