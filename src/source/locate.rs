//! Resolving a source name to a silence list file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::SourceError;

/// Subdirectory of the data directory that holds silence lists
pub const XML_SOURCE_DIR: &str = "xmlsource";

/// Resolve `source` to an existing file.
///
/// `source` is tried as given first, then as a name inside
/// `<data_dir>/xmlsource/`.
pub fn locate_source(source: &str, data_dir: &Path) -> Result<PathBuf, SourceError> {
    let candidates = [
        PathBuf::from(source),
        data_dir.join(XML_SOURCE_DIR).join(source),
    ];

    for candidate in &candidates {
        if candidate.is_file() {
            debug!(path = ?candidate, "resolved silence source");
            return Ok(candidate.clone());
        }
    }

    Err(SourceError::NotFound {
        source_name: source.to_string(),
        tried: candidates.to_vec(),
    })
}

/// Locate and read a silence list.
pub fn read_source(source: &str, data_dir: &Path) -> Result<String, SourceError> {
    let path = locate_source(source, data_dir)?;
    let contents = fs::read_to_string(&path).map_err(|source| SourceError::Io {
        path: path.clone(),
        source,
    })?;
    info!(path = ?path, bytes = contents.len(), "read silence source");
    Ok(contents)
}
