use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chapterize::cli::Cli;
use chapterize::config::{self, AppConfig};
use chapterize::report::{self, OutlineReport};
use chapterize::{outline_from_records, source};

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    run(&cli)
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "chapterize=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let app = AppConfig::from_override(cli.data_dir.clone());
    let thresholds = cli.thresholds(
        config::load_thresholds(cli.config.as_deref())
            .context("Failed to load threshold configuration")?,
    );
    thresholds
        .validate()
        .context("Threshold validation failed")?;
    config::check_thresholds(&thresholds);
    info!(
        chapter_timeout = thresholds.chapter_timeout,
        part_timeout = thresholds.part_timeout,
        max_chapter_duration = thresholds.max_chapter_duration,
        "using thresholds"
    );

    let xml = source::read_source(&cli.source, &app.data_dir)
        .context("Failed to load silence source")?;
    let records = source::parse_silence_xml(&xml).context("Failed to decode silence list")?;
    info!(silences = records.len(), "decoded silence list");

    let markers =
        outline_from_records(&records, &thresholds).context("Failed to build chapter outline")?;
    info!(markers = markers.len(), "built chapter outline");

    let report = OutlineReport::new(markers);
    if cli.stdout {
        println!("{}", report.to_json()?);
    } else {
        let output = cli
            .output
            .clone()
            .unwrap_or_else(|| app.default_output_path());
        report::write_report(&report, &output)?;
        println!("Processing complete");
    }
    Ok(())
}
