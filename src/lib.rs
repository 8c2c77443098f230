//! Chapterize - chapter outlines from detected silences
//!
//! Silences longer than a chapter threshold start a new chapter, shorter
//! ones above a part threshold start a new part, and chapters that end up
//! too short are folded back in a second pass.

pub mod chaptering;
pub mod cli;
pub mod config;
pub mod duration;
pub mod report;
pub mod source;
pub mod types;

pub use chaptering::{build_outline, outline_from_records};
pub use duration::FormatError;
pub use source::SourceError;
pub use types::{ChapterConfig, Marker};
