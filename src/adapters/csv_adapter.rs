//! CSV file season data adapter.
//!
//! Reads two multi-season files:
//!
//! - league tables: `Season,Rk,Squad,MP,W,D,L,GF,GA,GD,Pts,Pts/MP,xG,xGA,xGD,xGD/90`
//! - fixtures: `Season,Home Team,Home xG,Home Score,Away Score,Away xG,Away Team`
//!
//! Only rows whose first column equals the requested season are used.

use crate::domain::error::SimError;
use crate::domain::fixture::Fixture;
use crate::domain::team_stats::{SeasonStats, TeamAggregateStats};
use crate::ports::data_port::SeasonDataPort;
use csv::StringRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const COL_SEASON: usize = 0;
const COL_TEAM: usize = 2;
const COL_MATCHES_PLAYED: usize = 3;
const COL_GOALS_FOR: usize = 7;
const COL_GOALS_AGAINST: usize = 8;
const COL_XGD_PER_90: usize = 15;

const COL_HOME_TEAM: usize = 1;
const COL_AWAY_TEAM: usize = 6;
const FIXTURE_COLUMNS: usize = 7;

pub struct CsvSeasonAdapter {
    league_tables_path: PathBuf,
    fixtures_path: PathBuf,
}

impl CsvSeasonAdapter {
    pub fn new(league_tables_path: PathBuf, fixtures_path: PathBuf) -> Self {
        Self {
            league_tables_path,
            fixtures_path,
        }
    }

    fn read_records(path: &Path) -> Result<Vec<StringRecord>, SimError> {
        let content = fs::read_to_string(path).map_err(|e| SimError::DataSource {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        rdr.records()
            .map(|r| {
                r.map_err(|e| SimError::DataSource {
                    reason: format!("CSV parse error in {}: {}", path.display(), e),
                })
            })
            .collect()
    }
}

fn line_of(record: &StringRecord) -> usize {
    record.position().map(|p| p.line() as usize).unwrap_or(0)
}

fn numeric_field(record: &StringRecord, index: usize, name: &str) -> Result<f64, SimError> {
    let line = line_of(record);
    let raw = record.get(index).ok_or_else(|| SimError::MalformedStatRow {
        line,
        reason: format!("missing {} column", name),
    })?;
    let value = raw.parse::<f64>().map_err(|_| SimError::MalformedStatRow {
        line,
        reason: format!("invalid {} value {:?}", name, raw),
    })?;
    if !value.is_finite() {
        return Err(SimError::MalformedStatRow {
            line,
            reason: format!("non-finite {} value {:?}", name, raw),
        });
    }
    Ok(value)
}

fn parse_stat_row(record: &StringRecord) -> Result<TeamAggregateStats, SimError> {
    let team = match record.get(COL_TEAM) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => {
            return Err(SimError::MalformedStatRow {
                line: line_of(record),
                reason: "missing team column".into(),
            });
        }
    };

    Ok(TeamAggregateStats {
        team,
        matches_played: numeric_field(record, COL_MATCHES_PLAYED, "MP")?,
        goals_for: numeric_field(record, COL_GOALS_FOR, "GF")?,
        goals_against: numeric_field(record, COL_GOALS_AGAINST, "GA")?,
        xgd_per_90: numeric_field(record, COL_XGD_PER_90, "xGD/90")?,
    })
}

fn in_season(record: &StringRecord, season: &str) -> bool {
    record.get(COL_SEASON) == Some(season)
}

impl SeasonDataPort for CsvSeasonAdapter {
    fn fetch_team_stats(&self, season: &str) -> Result<SeasonStats, SimError> {
        let mut stats = SeasonStats::default();

        for record in Self::read_records(&self.league_tables_path)?
            .iter()
            .filter(|r| in_season(r, season))
        {
            if let Some(team) = record.get(COL_TEAM).filter(|t| !t.is_empty()) {
                stats.note_team(team);
            }
            match parse_stat_row(record) {
                Ok(row) => stats.rows.push(row),
                Err(e) => {
                    warn!(season, error = %e, "rejecting stat row");
                    stats.rejected.push(e);
                }
            }
        }

        Ok(stats)
    }

    fn fetch_fixtures(&self, season: &str) -> Result<Vec<Fixture>, SimError> {
        let mut fixtures = Vec::new();

        for record in Self::read_records(&self.fixtures_path)?
            .iter()
            .filter(|r| in_season(r, season))
        {
            let home = record.get(COL_HOME_TEAM).unwrap_or_default();
            let away = record.get(COL_AWAY_TEAM).unwrap_or_default();
            if record.len() < FIXTURE_COLUMNS || home.is_empty() || away.is_empty() {
                warn!(season, line = line_of(record), "skipping incomplete fixture row");
                continue;
            }
            fixtures.push(Fixture::new(home, away));
        }

        Ok(fixtures)
    }

    fn list_seasons(&self) -> Result<Vec<String>, SimError> {
        let mut seasons: Vec<String> = Vec::new();
        for record in Self::read_records(&self.league_tables_path)? {
            if let Some(season) = record.get(COL_SEASON).filter(|s| !s.is_empty()) {
                if !seasons.iter().any(|s| s == season) {
                    seasons.push(season.to_string());
                }
            }
        }
        Ok(seasons)
    }
}
