//! Duration extraction from ffprobe JSON output.
//!
//! ffprobe run with `-show_format -print_format json` prints a document whose
//! optional `format.duration` field holds fractional seconds, normally as a
//! string (`"90.048000"`) but occasionally as a bare number. Anything else,
//! including a document that fails to parse at all, means the duration is
//! unknown.

use serde::Deserialize;

/// Duration value meaning "unknown": the probe failed or reported nothing usable.
pub const UNKNOWN_DURATION: i64 = -1;

#[derive(Debug, Deserialize)]
struct ProbeDocument {
    #[serde(default)]
    format: Option<ProbeFormat>,
}

#[derive(Debug, Deserialize)]
struct ProbeFormat {
    #[serde(default)]
    duration: Option<DurationField>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DurationField {
    Text(String),
    Number(f64),
}

impl DurationField {
    fn seconds(&self) -> Option<f64> {
        let secs = match self {
            DurationField::Text(text) => text.trim().parse::<f64>().ok()?,
            DurationField::Number(n) => *n,
        };
        secs.is_finite().then_some(secs)
    }
}

/// Returns `format.duration` in fractional seconds, or `None` when the
/// document is malformed or the field is missing, unparseable or not finite.
#[must_use]
pub fn probe_duration_secs(metadata: &str) -> Option<f64> {
    let document: ProbeDocument = match serde_json::from_str(metadata) {
        Ok(document) => document,
        Err(e) => {
            log::debug!("Unparseable ffprobe output: {e}");
            return None;
        }
    };

    document.format?.duration?.seconds()
}

/// Parses ffprobe output into whole seconds, truncating toward zero.
///
/// Returns [`UNKNOWN_DURATION`] on any failure; never panics.
#[must_use]
pub fn parse_duration(metadata: &str) -> i64 {
    probe_duration_secs(metadata)
        .map(|secs| secs.trunc() as i64)
        .unwrap_or(UNKNOWN_DURATION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_string_field() {
        let json = r#"{"format": {"filename": "a.mkv", "duration": "90.048000", "size": "1024"}}"#;
        assert_eq!(parse_duration(json), 90);
    }

    #[test]
    fn test_parse_duration_numeric_field() {
        assert_eq!(parse_duration(r#"{"format": {"duration": 3725.9}}"#), 3725);
        assert_eq!(parse_duration(r#"{"format": {"duration": 12}}"#), 12);
    }

    #[test]
    fn test_parse_duration_truncates() {
        assert_eq!(parse_duration(r#"{"format": {"duration": "59.999"}}"#), 59);
        assert_eq!(parse_duration(r#"{"format": {"duration": "0.4"}}"#), 0);
        assert_eq!(parse_duration(r#"{"format": {"duration": " 7.5 "}}"#), 7);
    }

    #[test]
    fn test_parse_duration_missing_pieces() {
        assert_eq!(parse_duration("{}"), UNKNOWN_DURATION);
        assert_eq!(parse_duration(r#"{"format": {}}"#), UNKNOWN_DURATION);
        assert_eq!(parse_duration(r#"{"format": null}"#), UNKNOWN_DURATION);
        assert_eq!(parse_duration(r#"{"format": {"duration": null}}"#), UNKNOWN_DURATION);
    }

    #[test]
    fn test_parse_duration_bad_values() {
        assert_eq!(parse_duration(r#"{"format": {"duration": "N/A"}}"#), UNKNOWN_DURATION);
        assert_eq!(parse_duration(r#"{"format": {"duration": "inf"}}"#), UNKNOWN_DURATION);
        assert_eq!(parse_duration(r#"{"format": {"duration": "NaN"}}"#), UNKNOWN_DURATION);
        assert_eq!(parse_duration(r#"{"format": {"duration": true}}"#), UNKNOWN_DURATION);
        assert_eq!(parse_duration(r#"{"format": "mp4"}"#), UNKNOWN_DURATION);
    }

    #[test]
    fn test_parse_duration_malformed_document() {
        assert_eq!(parse_duration(""), UNKNOWN_DURATION);
        assert_eq!(parse_duration("not json"), UNKNOWN_DURATION);
        assert_eq!(parse_duration(r#"{"format": {"duration": "12""#), UNKNOWN_DURATION);
        assert_eq!(parse_duration("[1, 2, 3]"), UNKNOWN_DURATION);
    }

    #[test]
    fn test_probe_duration_secs_keeps_fraction() {
        assert_eq!(
            probe_duration_secs(r#"{"format": {"duration": "1.25"}}"#),
            Some(1.25)
        );
        assert_eq!(probe_duration_secs("{}"), None);
    }
}
