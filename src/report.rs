//! Result envelope written next to the silence sources.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;
use tracing::info;

use crate::types::Marker;

/// Generation time layout, e.g. `14:03:59 18.10.2026`
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S %d.%m.%Y";

#[derive(Debug, Clone, Serialize)]
pub struct OutlineReport {
    pub timestamp: String,
    pub segments: Vec<Marker>,
}

impl OutlineReport {
    /// Stamp `markers` with the current local time
    pub fn new(markers: Vec<Marker>) -> Self {
        Self::generated_at(&Local::now(), markers)
    }

    pub fn generated_at<Tz: TimeZone>(time: &DateTime<Tz>, markers: Vec<Marker>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            timestamp: time.format(TIMESTAMP_FORMAT).to_string(),
            segments: markers,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize outline report")
    }
}

/// Write the report as pretty JSON, creating parent directories as needed
pub fn write_report(report: &OutlineReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {:?}", parent))?;
    }
    let json = report.to_json()?;
    fs::write(path, json).with_context(|| format!("Failed to write outline to {:?}", path))?;
    info!(path = ?path, markers = report.segments.len(), "wrote outline");
    Ok(())
}
