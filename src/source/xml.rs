//! Silence list XML decoding.
//!
//! The silence detector writes one `<silence>` element per detected gap:
//! ```xml
//! <?xml version="1.0"?>
//! <silences>
//!   <silence from="PT1M4.5S" until="PT1M6S"/>
//!   <silence from="PT2M0S" until="PT2M0.3S"/>
//! </silences>
//! ```
//! Elements are collected at any depth, in document order.

use super::SourceError;
use crate::types::RawInterval;

const SILENCE_TAG: &str = "silence";

/// Decode every `<silence from=".." until="..">` element into a raw record.
///
/// A missing attribute is read as an empty string, which later fails
/// duration parsing for the whole run.
pub fn parse_silence_xml(xml: &str) -> Result<Vec<RawInterval>, SourceError> {
    let doc = roxmltree::Document::parse(xml)
        .map_err(|e| SourceError::MalformedXml(format!("XML parse error: {}", e)))?;

    let records = doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == SILENCE_TAG)
        .map(|n| {
            RawInterval::new(
                n.attribute("from").unwrap_or_default(),
                n.attribute("until").unwrap_or_default(),
            )
        })
        .collect();

    Ok(records)
}
