pub mod observations;
pub mod report;
pub mod walker;

pub use observations::{load_unit, parse_observations};
pub use report::{DimensionSummary, OutputFormat, StyleReport};
pub use walker::{find_observation_files, FileWalker};

use crate::core::{Error, Result};
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::file_system("Failed to write file", path, e))
}
