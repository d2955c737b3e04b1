//! Season data access port trait.

use crate::domain::error::SimError;
use crate::domain::fixture::Fixture;
use crate::domain::team_stats::SeasonStats;

/// Provider of season-aggregate statistics and fixture lists.
pub trait SeasonDataPort {
    /// Stat rows for `season`. Malformed rows are returned in
    /// [`SeasonStats::rejected`] rather than failing the call.
    fn fetch_team_stats(&self, season: &str) -> Result<SeasonStats, SimError>;

    /// Fixtures for `season` in schedule order.
    fn fetch_fixtures(&self, season: &str) -> Result<Vec<Fixture>, SimError>;

    fn list_seasons(&self) -> Result<Vec<String>, SimError>;
}
