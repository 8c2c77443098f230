//! Turning silences into a chapter outline.
//!
//! Three passes over the silence list:
//! 1. [`segment`] assigns every span between silences a chapter and part
//! 2. [`merge`] dissolves chapters shorter than the minimum length
//! 3. [`format`] drops hidden spans and titles the rest

mod merger;
mod outline;
mod segmenter;


use tracing::debug;

use crate::duration::FormatError;
use crate::source::load_intervals;
use crate::types::{ChapterConfig, Marker, RawInterval, SilenceInterval};

pub use merger::merge;
pub use outline::format;
pub use segmenter::segment;

/// Pure function to build the published outline from parsed silences
pub fn build_outline(intervals: &[SilenceInterval], config: &ChapterConfig) -> Vec<Marker> {
    let segments = segment(intervals, config.chapter_timeout, config.part_timeout);
    let last_chapter = segments.last().map_or(0, |segment| segment.chapter_num);
    debug!(segments = segments.len(), last_chapter, "segmented silences");

    let segments = merge(segments, config.max_chapter_duration);
    let visible = segments.iter().filter(|segment| !segment.omit).count();
    debug!(visible, "merged short chapters");

    format(&segments)
}

/// Parse raw silence records and build their outline
pub fn outline_from_records(
    records: &[RawInterval],
    config: &ChapterConfig,
) -> Result<Vec<Marker>, FormatError> {
    let intervals = load_intervals(records)?;
    Ok(build_outline(&intervals, config))
}
