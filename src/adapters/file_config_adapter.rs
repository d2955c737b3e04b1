//! INI file configuration adapter.

use crate::domain::error::SimError;
use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let path = path.as_ref();
        let mut config = Ini::new();
        config.load(path).map_err(|reason| SimError::ConfigParse {
            file: path.display().to_string(),
            reason,
        })?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, SimError> {
        let mut config = Ini::new();
        config
            .read(content.to_string())
            .map_err(|reason| SimError::ConfigParse {
                file: "<string>".to_string(),
                reason,
            })?;
        Ok(Self { config })
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn from_string_parses_sections() {
        let content = r#"
[simulation]
season = 2024 2025
season_length = 38

[data]
league_tables = data/League Tables.csv
fixtures = data/Fixtures.csv
"#;
        let adapter = FileConfigAdapter::from_string(content).unwrap();
        assert_eq!(
            adapter.get_string("simulation", "season"),
            Some("2024 2025".to_string())
        );
        assert_eq!(
            adapter.get_string("data", "league_tables"),
            Some("data/League Tables.csv".to_string())
        );
        assert_eq!(
            adapter.get_string("simulation", "season_length"),
            Some("38".to_string())
        );
    }

    #[test]
    fn missing_keys_are_none() {
        let adapter = FileConfigAdapter::from_string("[simulation]\n").unwrap();
        assert_eq!(adapter.get_string("simulation", "season"), None);
        assert_eq!(adapter.get_string("report", "format"), None);
    }

    #[test]
    fn numeric_values_are_returned_raw() {
        let adapter = FileConfigAdapter::from_string(
            "[simulation]\ngoal_trials = two\nattack_xgd_weight = -0.82\n",
        )
        .unwrap();
        assert_eq!(adapter.get_string("simulation", "goal_trials"), Some("two".to_string()));
        assert_eq!(
            adapter.get_string("simulation", "attack_xgd_weight"),
            Some("-0.82".to_string())
        );
    }

    #[test]
    fn from_file_reads_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[report]\nformat = csv\noutput = table.csv\n").unwrap();
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(adapter.get_string("report", "format"), Some("csv".to_string()));
        assert_eq!(adapter.get_string("report", "output"), Some("table.csv".to_string()));
    }

    #[test]
    fn from_file_missing_is_config_parse_error() {
        let result = FileConfigAdapter::from_file("/nonexistent/path/leaguesim.ini");
        assert!(matches!(result, Err(SimError::ConfigParse { file, .. }) if file.contains("leaguesim.ini")));
    }
}
