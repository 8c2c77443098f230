use std::path::PathBuf;

use clap::Parser;

use crate::types::ChapterConfig;

/// Chapterize - build chapter markers from detected silences
///
/// Reads a silence list (`<silence from=".." until=".."/>` elements), splits
/// the recording into chapters and parts at long silences and writes the
/// resulting outline as JSON.
#[derive(Parser, Debug)]
#[command(name = "chapterize")]
#[command(version)]
#[command(about = "Build chapter markers from detected silences", long_about = None)]
pub struct Cli {
    /// Silence list XML: a path, or a file name inside <DATA_DIR>/xmlsource
    #[arg(long, value_name = "SOURCE")]
    pub source: String,

    /// Silence length (seconds) that starts a new chapter [default: 2]
    #[arg(long, value_name = "SECS")]
    pub chapter_timeout: Option<f64>,

    /// Silence length (seconds) that starts a new part [default: 0.5]
    #[arg(long, value_name = "SECS")]
    pub part_timeout: Option<f64>,

    /// Chapters shorter than this (seconds) are merged back [default: 180]
    #[arg(long, value_name = "SECS")]
    pub max_chapter_duration: Option<f64>,

    /// JSON file with threshold defaults; explicit flags take precedence
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding xmlsource/ and jsonoutput/
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output file [default: <DATA_DIR>/jsonoutput/out.json]
    #[arg(long, value_name = "PATH", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the outline JSON to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

impl Cli {
    /// Overlay explicitly given threshold flags on `base`
    pub fn thresholds(&self, base: ChapterConfig) -> ChapterConfig {
        ChapterConfig {
            chapter_timeout: self.chapter_timeout.unwrap_or(base.chapter_timeout),
            part_timeout: self.part_timeout.unwrap_or(base.part_timeout),
            max_chapter_duration: self
                .max_chapter_duration
                .unwrap_or(base.max_chapter_duration),
        }
    }
}
