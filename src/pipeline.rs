//! End-to-end season run: load, estimate, simulate, rank, report.

use std::path::{Path, PathBuf};

use crate::adapters::csv_adapter::CsvSeasonAdapter;
use crate::adapters::csv_report::CsvStandingsReport;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::seeded_random::SeededRandom;
use crate::adapters::text_report::TextTableReport;
use crate::domain::config_validation::{
    build_simulation_config, validate_data_config, validate_report_config,
};
use crate::domain::error::SimError;
use crate::domain::season::{run_season, SeasonResult, SimulationConfig};
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::SeasonDataPort;
use crate::ports::report_port::ResultSink;
use tracing::{info, warn};

pub const DEFAULT_TEXT_OUTPUT: &str = "standings.txt";
pub const DEFAULT_CSV_OUTPUT: &str = "standings.csv";

pub fn load_config(path: &Path) -> Result<FileConfigAdapter, SimError> {
    info!(path = %path.display(), "loading config");
    FileConfigAdapter::from_file(path)
}

/// Runs one season against `data_port`.
///
/// The random source is seeded from `config.seed`, or from a fresh seed that
/// is logged and recorded on the result.
pub fn run_simulation(
    data_port: &dyn SeasonDataPort,
    config: &SimulationConfig,
) -> Result<SeasonResult, SimError> {
    let stats = data_port.fetch_team_stats(&config.season)?;
    let fixtures = data_port.fetch_fixtures(&config.season)?;

    if !stats.rejected.is_empty() {
        warn!(
            season = %config.season,
            rejected = stats.rejected.len(),
            "stat rows excluded from averages"
        );
    }

    let mut rng = match config.seed {
        Some(seed) => SeededRandom::from_seed(seed),
        None => SeededRandom::from_entropy(),
    };
    info!(season = %config.season, seed = rng.seed(), "random source ready");

    let mut result = run_season(stats, &fixtures, config, &mut rng)?;
    result.seed = Some(rng.seed());
    Ok(result)
}

/// Builds the CSV data adapter and simulation config from `config`, then runs.
pub fn run_from_config(config: &dyn ConfigPort) -> Result<SeasonResult, SimError> {
    validate_data_config(config)?;
    let sim_config = build_simulation_config(config)?;

    let data_port = CsvSeasonAdapter::new(
        data_path(config, "league_tables")?,
        data_path(config, "fixtures")?,
    );
    run_simulation(&data_port, &sim_config)
}

fn data_path(config: &dyn ConfigPort, key: &str) -> Result<PathBuf, SimError> {
    config
        .get_string("data", key)
        .map(|p| PathBuf::from(p.trim()))
        .ok_or_else(|| SimError::ConfigMissing {
            section: "data".into(),
            key: key.into(),
        })
}

/// Writes `result` using the sink named by `[report] format` and returns the
/// path written.
pub fn write_report(config: &dyn ConfigPort, result: &SeasonResult) -> Result<PathBuf, SimError> {
    validate_report_config(config)?;

    let format = config
        .get_string("report", "format")
        .map(|f| f.trim().to_string())
        .unwrap_or_else(|| "text".to_string());

    let (sink, default_output): (Box<dyn ResultSink>, &str) = match format.as_str() {
        "csv" => (Box::new(CsvStandingsReport), DEFAULT_CSV_OUTPUT),
        _ => (Box::new(TextTableReport), DEFAULT_TEXT_OUTPUT),
    };

    let output = config
        .get_string("report", "output")
        .filter(|o| !o.trim().is_empty())
        .map(|o| PathBuf::from(o.trim()))
        .unwrap_or_else(|| PathBuf::from(default_output));

    sink.write(result, &output)?;
    info!(path = %output.display(), format = %format, "report written");
    Ok(output)
}
