//! Result sink port trait.

use crate::domain::error::SimError;
use crate::domain::season::SeasonResult;
use std::path::Path;

/// Port for writing a ranked season result.
pub trait ResultSink {
    fn write(&self, result: &SeasonResult, output_path: &Path) -> Result<(), SimError>;
}
