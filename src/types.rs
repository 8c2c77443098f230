//! Core types for the chapterize silence-to-outline pipeline

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Offset string of the span that opens the recording, before any silence
pub const START_OFFSET: &str = "start";

/// A decoded duration string. Components are kept as written; minutes and
/// seconds are not carried into the next unit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Timestamp {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: f64,
}

impl Timestamp {
    pub fn new(hours: u64, minutes: u64, seconds: f64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    pub fn to_seconds(&self) -> f64 {
        self.hours as f64 * 3600.0 + self.minutes as f64 * 60.0 + self.seconds
    }
}

/// One silence record as handed over by a source decoder, still unparsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInterval {
    pub from: String,
    pub until: String,
}

impl RawInterval {
    pub fn new(from: impl Into<String>, until: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            until: until.into(),
        }
    }
}

/// A detected silence with both endpoints parsed
#[derive(Debug, Clone, PartialEq)]
pub struct SilenceInterval {
    pub from_offset: String,
    pub until_offset: String,
    pub from: Timestamp,
    pub until: Timestamp,
    pub from_seconds: f64,
    pub until_seconds: f64,
    /// Component-wise difference of `until` and `from`, see
    /// [`crate::duration::pause_duration`]
    pub pause_duration: f64,
}

/// Content span between two silences with its tentative chapter identity
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Verbatim offset string where the span starts
    pub offset: String,
    pub offset_seconds: f64,
    pub chapter_num: u32,
    /// `None` once the segment stands for a whole single-part chapter
    pub part_num: Option<u32>,
    pub duration: f64,
    /// Running duration of the chapter up to and including this segment
    pub total_chapter_duration: f64,
    pub omit: bool,
}

/// A titled chapter marker ready for publishing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub title: String,
    pub offset: String,
}

/// Thresholds (in seconds) that drive segmentation and merging
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChapterConfig {
    /// Silence at least this long starts a new chapter
    #[serde(alias = "chapterTimeout")]
    pub chapter_timeout: f64,
    /// Silence at least this long (but below `chapter_timeout`) starts a new part
    #[serde(alias = "partTimeout")]
    pub part_timeout: f64,
    /// Chapters shorter than this are folded back into their predecessor
    #[serde(alias = "maxChapterDuration", alias = "maximumChapterDuration")]
    pub max_chapter_duration: f64,
}

impl ChapterConfig {
    pub fn new(chapter_timeout: f64, part_timeout: f64, max_chapter_duration: f64) -> Self {
        Self {
            chapter_timeout,
            part_timeout,
            max_chapter_duration,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("chapter_timeout", self.chapter_timeout),
            ("part_timeout", self.part_timeout),
            ("max_chapter_duration", self.max_chapter_duration),
        ] {
            ensure!(value.is_finite(), "{} must be a finite number", name);
            ensure!(value >= 0.0, "{} must be non-negative, got {}", name, value);
        }
        Ok(())
    }
}

impl Default for ChapterConfig {
    fn default() -> Self {
        Self {
            chapter_timeout: 2.0,
            part_timeout: 0.5,
            max_chapter_duration: 180.0,
        }
    }
}
