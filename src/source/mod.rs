//! Silence sources: locating the silence list, decoding it and turning the
//! raw records into [`SilenceInterval`] values.

pub mod locate;
pub mod xml;

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::duration::{self, FormatError};
use crate::types::{RawInterval, SilenceInterval};

pub use locate::{locate_source, read_source};
pub use xml::parse_silence_xml;

/// Error types for reading a silence source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Neither the given path nor the data directory fallback exists.
    #[error("source '{source_name}' could not be found (tried {})", display_paths(.tried))]
    NotFound {
        source_name: String,
        tried: Vec<PathBuf>,
    },

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed silence XML: {0}")]
    MalformedXml(String),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| format!("{:?}", path))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse every record into a [`SilenceInterval`], keeping input order.
///
/// The first endpoint that fails to parse aborts the whole load.
pub fn load_intervals(records: &[RawInterval]) -> Result<Vec<SilenceInterval>, FormatError> {
    let intervals = records
        .iter()
        .map(load_interval)
        .collect::<Result<Vec<_>, _>>()?;
    debug!(count = intervals.len(), "loaded silence intervals");
    Ok(intervals)
}

fn load_interval(record: &RawInterval) -> Result<SilenceInterval, FormatError> {
    let from = duration::parse(&record.from)?;
    let until = duration::parse(&record.until)?;
    Ok(SilenceInterval {
        from_offset: record.from.clone(),
        until_offset: record.until.clone(),
        from_seconds: duration::to_seconds(&from),
        until_seconds: duration::to_seconds(&until),
        pause_duration: duration::pause_duration(&from, &until),
        from,
        until,
    })
}
