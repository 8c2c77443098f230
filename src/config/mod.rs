use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use crate::source::locate::XML_SOURCE_DIR;
use crate::types::ChapterConfig;

/// Data directory used when none is given
pub const DEFAULT_DATA_DIR: &str = "data";
const JSON_OUTPUT_DIR: &str = "jsonoutput";
const JSON_OUTPUT_FILE: &str = "out.json";

/// Locations of inputs and outputs
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_override(path: Option<PathBuf>) -> Self {
        Self {
            data_dir: path.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
        }
    }

    pub fn xml_source_dir(&self) -> PathBuf {
        self.data_dir.join(XML_SOURCE_DIR)
    }

    pub fn default_output_path(&self) -> PathBuf {
        self.data_dir.join(JSON_OUTPUT_DIR).join(JSON_OUTPUT_FILE)
    }
}

/// Read thresholds from an optional JSON file; missing keys keep defaults.
pub fn load_thresholds(path: Option<&Path>) -> Result<ChapterConfig> {
    let config = match path {
        Some(p) => {
            let data = fs::read_to_string(p)
                .with_context(|| format!("Failed to read threshold file {:?}", p))?;
            parse_thresholds(&data)
                .with_context(|| format!("Invalid threshold file {:?}", p))?
        }
        None => ChapterConfig::default(),
    };
    Ok(config)
}

fn parse_thresholds(raw: &str) -> Result<ChapterConfig> {
    let config: ChapterConfig =
        serde_json::from_str(raw).context("Failed to parse threshold JSON")?;
    config.validate()?;
    Ok(config)
}

/// Log thresholds that are legal but unlikely to be intended
pub fn check_thresholds(config: &ChapterConfig) {
    if config.part_timeout > config.chapter_timeout {
        warn!(
            part_timeout = config.part_timeout,
            chapter_timeout = config.chapter_timeout,
            "part timeout exceeds chapter timeout; no parts will be created"
        );
    }
}
