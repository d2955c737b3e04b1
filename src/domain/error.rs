//! Domain error types.

/// Top-level error type for leaguesim.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("no strength entry for team {team}")]
    MissingTeamStrength { team: String },

    #[error("malformed stat row at line {line}: {reason}")]
    MalformedStatRow { line: usize, reason: String },

    #[error("degenerate average for {team}: {reason}")]
    DegenerateAverage { team: String, reason: String },

    #[error("fixture references unknown team {team}")]
    UnknownFixtureTeam { team: String },

    #[error("cannot simulate: no team data for season {season}")]
    NoTeamData { season: String },

    #[error("data source error: {reason}")]
    DataSource { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SimError {
    /// Per-row and per-fixture errors that are reported and skipped without
    /// aborting the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SimError::MissingTeamStrength { .. }
                | SimError::MalformedStatRow { .. }
                | SimError::DegenerateAverage { .. }
                | SimError::UnknownFixtureTeam { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_level_errors_are_recoverable() {
        assert!(SimError::MissingTeamStrength { team: "Arsenal".into() }.is_recoverable());
        assert!(
            SimError::MalformedStatRow {
                line: 3,
                reason: "bad GF".into()
            }
            .is_recoverable()
        );
        assert!(
            SimError::DegenerateAverage {
                team: "Luton Town".into(),
                reason: "zero goals against".into()
            }
            .is_recoverable()
        );
        assert!(SimError::UnknownFixtureTeam { team: "Nowhere".into() }.is_recoverable());
    }

    #[test]
    fn run_level_errors_are_fatal() {
        assert!(!SimError::NoTeamData { season: "2024 2025".into() }.is_recoverable());
        assert!(!SimError::DataSource { reason: "gone".into() }.is_recoverable());
        assert!(
            !SimError::ConfigMissing {
                section: "simulation".into(),
                key: "season".into()
            }
            .is_recoverable()
        );
    }

    #[test]
    fn no_team_data_message_is_explicit() {
        let err = SimError::NoTeamData {
            season: "2019 2020".into(),
        };
        assert_eq!(
            err.to_string(),
            "cannot simulate: no team data for season 2019 2020"
        );
    }
}
