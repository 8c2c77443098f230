//! Duration strings of the form `PT[<int>H][<int>M][<real>S]`
//!
//! Parsing keeps the components exactly as written. Offsets are never
//! rendered back from a [`Timestamp`]; callers keep the original string.

use thiserror::Error;

use crate::types::Timestamp;

const PREFIX: &str = "PT";

/// A duration string could not be decomposed into its numeric components
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid duration '{input}': {reason}")]
pub struct FormatError {
    pub input: String,
    pub reason: String,
}

impl FormatError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Parse a duration string such as `PT1H2M3.5S`.
///
/// Markers are matched case-insensitively and every component is optional;
/// an absent component is zero.
///
/// ```
/// use chapterize::duration::parse;
///
/// let ts = parse("PT1H2M3.5S").unwrap();
/// assert_eq!((ts.hours, ts.minutes), (1, 2));
/// assert_eq!(ts.to_seconds(), 3723.5);
/// ```
pub fn parse(input: &str) -> Result<Timestamp, FormatError> {
    let body = input
        .get(..PREFIX.len())
        .filter(|prefix| prefix.eq_ignore_ascii_case(PREFIX))
        .map(|_| &input[PREFIX.len()..])
        .ok_or_else(|| FormatError::new(input, "missing 'PT' prefix"))?;

    let (hours, rest) = split_component(body, 'h');
    let (minutes, rest) = split_component(rest, 'm');
    let (seconds, rest) = split_component(rest, 's');

    if !rest.is_empty() {
        return Err(FormatError::new(
            input,
            format!("unexpected trailing text '{}'", rest),
        ));
    }

    let hours = hours.map(|raw| parse_whole(input, raw, "hours")).transpose()?;
    let minutes = minutes
        .map(|raw| parse_whole(input, raw, "minutes"))
        .transpose()?;
    let seconds = seconds.map(|raw| parse_seconds(input, raw)).transpose()?;

    Ok(Timestamp::new(
        hours.unwrap_or(0),
        minutes.unwrap_or(0),
        seconds.unwrap_or(0.0),
    ))
}

/// Seconds value of a parsed timestamp
pub fn to_seconds(timestamp: &Timestamp) -> f64 {
    timestamp.to_seconds()
}

/// Length of the silence between `from` and `until`.
///
/// Each unit is subtracted separately and then weighted. Algebraically this
/// is `until.to_seconds() - from.to_seconds()`, but the floating point result
/// follows this evaluation order, which chapter thresholds are compared against.
pub fn pause_duration(from: &Timestamp, until: &Timestamp) -> f64 {
    let hours = until.hours as f64 - from.hours as f64;
    let minutes = until.minutes as f64 - from.minutes as f64;
    let seconds = until.seconds - from.seconds;
    hours * 60.0 * 60.0 + minutes * 60.0 + seconds
}

/// Split `text` at the first (case-insensitive) `marker`. Returns the text in
/// front of the marker, if the marker is present, and the remainder after it.
fn split_component(text: &str, marker: char) -> (Option<&str>, &str) {
    match text.find(|c: char| c.eq_ignore_ascii_case(&marker)) {
        Some(pos) => (Some(&text[..pos]), &text[pos + marker.len_utf8()..]),
        None => (None, text),
    }
}

fn parse_whole(input: &str, raw: &str, unit: &str) -> Result<u64, FormatError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::new(
            input,
            format!("{} component '{}' is not a whole number", unit, raw),
        ));
    }
    raw.parse()
        .map_err(|err| FormatError::new(input, format!("{} component '{}': {}", unit, raw, err)))
}

fn parse_seconds(input: &str, raw: &str) -> Result<f64, FormatError> {
    let valid_chars = raw.bytes().all(|b| b.is_ascii_digit() || b == b'.');
    let value: f64 = match raw.parse() {
        Ok(value) if valid_chars => value,
        _ => {
            return Err(FormatError::new(
                input,
                format!("seconds component '{}' is not a number", raw),
            ))
        }
    };
    if !value.is_finite() {
        return Err(FormatError::new(input, "seconds component is not finite"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_components() {
        let ts = parse("PT1H2M3.5S").unwrap();
        assert_eq!(ts, Timestamp::new(1, 2, 3.5));
        assert_eq!(ts.to_seconds(), 3723.5);
    }

    #[test]
    fn missing_components_default_to_zero() {
        assert_eq!(parse("PT30S").unwrap().to_seconds(), 30.0);
        assert_eq!(parse("PT5M").unwrap().to_seconds(), 300.0);
        assert_eq!(parse("PT2H").unwrap().to_seconds(), 7200.0);
        assert_eq!(parse("PT1H30S").unwrap(), Timestamp::new(1, 0, 30.0));
        assert_eq!(parse("PT").unwrap(), Timestamp::default());
    }

    #[test]
    fn markers_are_case_insensitive() {
        assert_eq!(parse("pt1h2m3s").unwrap(), Timestamp::new(1, 2, 3.0));
        assert_eq!(parse("Pt0h0m12.25s").unwrap().to_seconds(), 12.25);
    }

    #[test]
    fn keeps_non_canonical_minutes() {
        let ts = parse("PT0H75M0S").unwrap();
        assert_eq!(ts.minutes, 75);
        assert_eq!(ts.to_seconds(), 4500.0);
    }

    #[test]
    fn rejects_non_numeric_component() {
        let err = parse("PTxH").unwrap_err();
        assert_eq!(err.input, "PTxH");
        assert!(err.reason.contains("hours"));

        assert!(parse("PT1HaM").is_err());
        assert!(parse("PT1.5H").is_err());
        assert!(parse("PTabcS").is_err());
        assert!(parse("PTinfS").is_err());
        assert!(parse("PT-3S").is_err());
    }

    #[test]
    fn rejects_empty_component() {
        assert!(parse("PTH").is_err());
        assert!(parse("PT1HM").is_err());
        assert!(parse("PTS").is_err());
    }

    #[test]
    fn rejects_missing_prefix() {
        assert!(parse("1H2M3S").is_err());
        assert!(parse("").is_err());
        assert!(parse("P").is_err());
    }

    #[test]
    fn rejects_trailing_text() {
        let err = parse("PT5S junk").unwrap_err();
        assert!(err.reason.contains("trailing"));
        assert!(parse("PT12").is_err());
    }

    #[test]
    fn rejects_out_of_order_markers() {
        assert!(parse("PT3S2M").is_err());
    }

    #[test]
    fn pause_duration_subtracts_componentwise() {
        let from = parse("PT0H75M0S").unwrap();
        let until = parse("PT2H0M0S").unwrap();
        // (2 - 0) * 3600 + (0 - 75) * 60 + 0
        assert_eq!(pause_duration(&from, &until), 2700.0);
        assert_eq!(until.to_seconds() - from.to_seconds(), 2700.0);

        let from = parse("PT0H1M59S").unwrap();
        let until = parse("PT1H0M0S").unwrap();
        assert_eq!(pause_duration(&from, &until), 3481.0);
    }

    #[test]
    fn pause_duration_of_short_silence() {
        let from = parse("PT1M4.5S").unwrap();
        let until = parse("PT1M5.25S").unwrap();
        assert!((pause_duration(&from, &until) - 0.75).abs() < 1e-9);
    }
}
