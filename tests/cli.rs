use std::fs;
use std::path::Path;

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const PODCAST_XML: &str = r#"<?xml version="1.0"?>
<silences>
  <silence from="PT3M0S" until="PT3M1S"/>
  <silence from="PT6M0S" until="PT6M4S"/>
  <silence from="PT10M0S" until="PT10M5S"/>
</silences>"#;

fn write_source(data_dir: &Path, name: &str) -> Result<()> {
    let source_dir = data_dir.join("xmlsource");
    fs::create_dir_all(&source_dir)?;
    fs::write(source_dir.join(name), PODCAST_XML)?;
    Ok(())
}

fn read_json(path: &Path) -> Result<serde_json::Value> {
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

#[test]
fn writes_outline_into_data_dir() -> Result<()> {
    let temp = tempdir()?;
    write_source(temp.path(), "episode.xml")?;

    Command::cargo_bin("chapterize")?
        .arg("--source")
        .arg("episode.xml")
        .arg("--data-dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing complete"));

    let report = read_json(&temp.path().join("jsonoutput").join("out.json"))?;
    assert!(report["timestamp"].is_string());
    assert_eq!(
        report["segments"],
        serde_json::json!([
            {"title": "Chapter 1, part 1", "offset": "start"},
            {"title": "Chapter 1, part 2", "offset": "PT3M1S"},
            {"title": "Chapter 2", "offset": "PT6M4S"},
        ])
    );
    Ok(())
}

#[test]
fn thresholds_come_from_flags() -> Result<()> {
    let temp = tempdir()?;
    write_source(temp.path(), "episode.xml")?;
    let output = temp.path().join("custom.json");

    Command::cargo_bin("chapterize")?
        .arg("--source")
        .arg(temp.path().join("xmlsource").join("episode.xml"))
        .arg("--part-timeout")
        .arg("2")
        .arg("--max-chapter-duration")
        .arg("0")
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let report = read_json(&output)?;
    assert_eq!(
        report["segments"],
        serde_json::json!([
            {"title": "Chapter 1", "offset": "PT3M1S"},
            {"title": "Chapter 2", "offset": "PT6M4S"},
        ])
    );
    Ok(())
}

#[test]
fn config_file_sets_thresholds() -> Result<()> {
    let temp = tempdir()?;
    write_source(temp.path(), "episode.xml")?;
    let config = temp.path().join("thresholds.json");
    fs::write(&config, r#"{"chapterTimeout": 10, "partTimeout": 0.5}"#)?;

    let assert = Command::cargo_bin("chapterize")?
        .arg("--source")
        .arg("episode.xml")
        .arg("--data-dir")
        .arg(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("--stdout")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let report: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(
        report["segments"],
        serde_json::json!([
            {"title": "Chapter 1, part 1", "offset": "start"},
            {"title": "Chapter 1, part 2", "offset": "PT3M1S"},
            {"title": "Chapter 1, part 3", "offset": "PT6M4S"},
        ])
    );
    assert!(!temp.path().join("jsonoutput").exists());
    Ok(())
}

#[test]
fn missing_source_fails() -> Result<()> {
    let temp = tempdir()?;

    Command::cargo_bin("chapterize")?
        .arg("--source")
        .arg("nowhere.xml")
        .arg("--data-dir")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not be found"));
    Ok(())
}

#[test]
fn malformed_duration_fails_without_output() -> Result<()> {
    let temp = tempdir()?;
    let source = temp.path().join("broken.xml");
    fs::write(
        &source,
        r#"<silences><silence from="PT1S" until="PTtwoS"/></silences>"#,
    )?;

    Command::cargo_bin("chapterize")?
        .arg("--source")
        .arg(&source)
        .arg("--data-dir")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("PTtwoS"));

    assert!(!temp.path().join("jsonoutput").join("out.json").exists());
    Ok(())
}

#[test]
fn negative_threshold_is_rejected() -> Result<()> {
    let temp = tempdir()?;
    write_source(temp.path(), "episode.xml")?;

    Command::cargo_bin("chapterize")?
        .arg("--source")
        .arg("episode.xml")
        .arg("--data-dir")
        .arg(temp.path())
        .arg("--chapter-timeout=-1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("chapter_timeout"));
    Ok(())
}
