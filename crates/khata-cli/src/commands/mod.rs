//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod parse;

use std::path::Path;

use khata_core::ExtractionConfig;

/// Load the extraction config from `--config`, or fall back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ExtractionConfig> {
    match config_path {
        Some(path) => Ok(ExtractionConfig::from_file(Path::new(path))?),
        None => Ok(ExtractionConfig::default()),
    }
}
