//! Match outcome sampling.
//!
//! Goals for each side are counted over a fixed number of Bernoulli trials
//! with success probability `1 / (1 + expected_goals)`. The count is bounded
//! by the number of trials; this is not an unbounded negative-binomial draw.

use crate::domain::fixture::Scoreline;
use crate::domain::strength::TeamStrength;
use crate::ports::random_port::RandomSource;

pub const DEFAULT_GOAL_TRIALS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpectedGoals {
    pub home: f64,
    pub away: f64,
}

/// Home expected goals = home attack × away defense, and vice versa.
pub fn expected_goals(home: &TeamStrength, away: &TeamStrength) -> ExpectedGoals {
    ExpectedGoals {
        home: home.attack * away.defense,
        away: away.attack * home.defense,
    }
}

/// Per-trial success probability for a given expected-goals mean.
///
/// Not clamped: a mean in `(-1, 0]` gives `p >= 1` and a mean below `-1`
/// gives a negative `p`, so every trial succeeds or fails respectively.
pub fn trial_probability(expected_goals: f64) -> f64 {
    1.0 / (1.0 + expected_goals)
}

/// Counts successes over `trials` draws. Always in `0..=trials`.
pub fn sample_goals<R>(expected_goals: f64, trials: u32, rng: &mut R) -> u32
where
    R: RandomSource + ?Sized,
{
    let p = trial_probability(expected_goals);
    (0..trials).filter(|_| rng.next_unit() < p).count() as u32
}

/// Samples a scoreline. Home trials are drawn before away trials.
pub fn sample_scoreline<R>(
    home: &TeamStrength,
    away: &TeamStrength,
    trials: u32,
    rng: &mut R,
) -> Scoreline
where
    R: RandomSource + ?Sized,
{
    let xg = expected_goals(home, away);
    let home_goals = sample_goals(xg.home, trials, rng);
    let away_goals = sample_goals(xg.away, trials, rng);
    Scoreline::new(home_goals, away_goals)
}
