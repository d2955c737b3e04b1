//! Season simulation engine.
//!
//! SimulationConfig defines the run parameters. A run estimates strengths
//! once, samples every fixture in list order, folds each scoreline into the
//! table and ranks the result.

use crate::domain::error::SimError;
use crate::domain::fixture::{Fixture, MatchOutcome, Scoreline};
use crate::domain::ranking::rank;
use crate::domain::sampler::{sample_scoreline, DEFAULT_GOAL_TRIALS};
use crate::domain::standings::{LeagueTable, StandingsRow};
use crate::domain::strength::{estimate_strengths_for, StrengthParams, StrengthTable};
use crate::domain::team_stats::SeasonStats;
use crate::ports::random_port::RandomSource;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub season: String,
    pub strength: StrengthParams,
    pub goal_trials: u32,
    pub seed: Option<u64>,
}

impl SimulationConfig {
    pub fn new(season: impl Into<String>) -> Self {
        Self {
            season: season.into(),
            strength: StrengthParams::default(),
            goal_trials: DEFAULT_GOAL_TRIALS,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedMatch {
    pub fixture: Fixture,
    pub score: Scoreline,
}

#[derive(Debug)]
pub struct SkippedFixture {
    pub fixture: Fixture,
    pub reason: SimError,
}

/// Output of folding fixtures into a table.
#[derive(Debug)]
pub struct TableRun {
    pub standings: Vec<StandingsRow>,
    pub matches: Vec<SimulatedMatch>,
    pub skipped: Vec<SkippedFixture>,
}

impl TableRun {
    pub fn draws(&self) -> usize {
        self.matches
            .iter()
            .filter(|m| m.score.outcome() == MatchOutcome::Draw)
            .count()
    }

    pub fn decisive(&self) -> usize {
        self.matches.len() - self.draws()
    }
}

#[derive(Debug)]
pub struct SeasonResult {
    pub season: String,
    /// Seed the random source was created from, when known.
    pub seed: Option<u64>,
    pub standings: Vec<StandingsRow>,
    pub matches: Vec<SimulatedMatch>,
    pub skipped: Vec<SkippedFixture>,
    pub team_failures: Vec<SimError>,
    pub rejected_rows: Vec<SimError>,
}

/// Simulates every fixture against a strength table.
///
/// Fixtures naming a team without a strength entry are skipped whole. Every
/// team in the strength table appears in the standings, including teams whose
/// estimation failed.
pub fn simulate_fixtures<R>(
    strengths: &StrengthTable,
    fixtures: &[Fixture],
    goal_trials: u32,
    rng: &mut R,
) -> TableRun
where
    R: RandomSource + ?Sized,
{
    let mut table = LeagueTable::new(strengths.teams().iter().cloned());
    let mut matches = Vec::with_capacity(fixtures.len());
    let mut skipped = Vec::new();

    for fixture in fixtures {
        let (home, away) = match (strengths.get(&fixture.home), strengths.get(&fixture.away)) {
            (Some(h), Some(a)) => (h, a),
            (h, _) => {
                let team = if h.is_none() { &fixture.home } else { &fixture.away };
                let reason = SimError::MissingTeamStrength { team: team.clone() };
                warn!(home = %fixture.home, away = %fixture.away, error = %reason, "skipping fixture");
                skipped.push(SkippedFixture {
                    fixture: fixture.clone(),
                    reason,
                });
                continue;
            }
        };

        let score = sample_scoreline(home, away, goal_trials, rng);
        match table.apply(fixture, score) {
            Ok(_) => {
                debug!(
                    home = %fixture.home,
                    away = %fixture.away,
                    home_goals = score.home_goals,
                    away_goals = score.away_goals,
                    "simulated fixture"
                );
                matches.push(SimulatedMatch {
                    fixture: fixture.clone(),
                    score,
                });
            }
            Err(reason) => {
                warn!(home = %fixture.home, away = %fixture.away, error = %reason, "skipping fixture");
                skipped.push(SkippedFixture {
                    fixture: fixture.clone(),
                    reason,
                });
            }
        }
    }

    TableRun {
        standings: rank(table),
        matches,
        skipped,
    }
}

/// Folds known scorelines into a fresh table without sampling.
pub fn replay(teams: &[String], results: &[SimulatedMatch]) -> TableRun {
    let mut table = LeagueTable::new(teams.iter().cloned());
    let mut matches = Vec::with_capacity(results.len());
    let mut skipped = Vec::new();

    for result in results {
        match table.apply(&result.fixture, result.score) {
            Ok(_) => matches.push(result.clone()),
            Err(reason) => {
                warn!(home = %result.fixture.home, away = %result.fixture.away, error = %reason, "skipping result");
                skipped.push(SkippedFixture {
                    fixture: result.fixture.clone(),
                    reason,
                });
            }
        }
    }

    TableRun {
        standings: rank(table),
        matches,
        skipped,
    }
}

/// Runs a full season from loaded stats and fixtures.
///
/// Fails with [`SimError::NoTeamData`] when no team strength can be resolved.
pub fn run_season<R>(
    stats: SeasonStats,
    fixtures: &[Fixture],
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<SeasonResult, SimError>
where
    R: RandomSource + ?Sized,
{
    let strengths = estimate_strengths_for(stats.team_order(), &stats.rows, &config.strength);
    if strengths.is_empty() {
        return Err(SimError::NoTeamData {
            season: config.season.clone(),
        });
    }

    info!(
        season = %config.season,
        teams = strengths.resolved_count(),
        failed = strengths.failures.len(),
        fixtures = fixtures.len(),
        "simulating season"
    );

    let run = simulate_fixtures(&strengths, fixtures, config.goal_trials, rng);

    info!(
        season = %config.season,
        simulated = run.matches.len(),
        skipped = run.skipped.len(),
        "season complete"
    );

    Ok(SeasonResult {
        season: config.season.clone(),
        seed: config.seed,
        standings: run.standings,
        matches: run.matches,
        skipped: run.skipped,
        team_failures: strengths.failures,
        rejected_rows: stats.rejected,
    })
}
