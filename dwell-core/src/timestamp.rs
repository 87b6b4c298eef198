//! # Timestamp Parsing
//!
//! Parses upstream changelog timestamps into naive instants using an explicit
//! chrono format. No timezone conversion is performed: the wall-clock part of
//! the timestamp is taken as-is.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::DEFAULT_TIMESTAMP_FORMAT;

/// Errors raised while parsing a changelog timestamp
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid timestamp '{input}': {reason}")]
pub struct TimestampParseError {
  pub input: String,
  pub reason: String,
}

impl TimestampParseError {
  fn new(input: &str, reason: impl Into<String>) -> Self {
    Self {
      input: input.to_string(),
      reason: reason.into(),
    }
  }
}

/// Timestamp parsing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampParser {
  /// chrono format applied to the leading part of the timestamp
  #[serde(default = "default_format")]
  pub format: String,

  /// Number of trailing characters to drop before parsing. When unset, the
  /// text after the formatted prefix is ignored.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub strip_suffix: Option<usize>,
}

fn default_format() -> String {
  DEFAULT_TIMESTAMP_FORMAT.to_string()
}

impl Default for TimestampParser {
  fn default() -> Self {
    Self {
      format: default_format(),
      strip_suffix: None,
    }
  }
}

impl TimestampParser {
  /// Parser that drops a fixed-length suffix and parses the rest strictly
  pub fn with_suffix(format: &str, strip_suffix: usize) -> Self {
    Self {
      format: format.to_string(),
      strip_suffix: Some(strip_suffix),
    }
  }

  /// Parse a timestamp string into a naive instant
  pub fn parse(&self, input: &str) -> Result<NaiveDateTime, TimestampParseError> {
    if input.trim().is_empty() {
      return Err(TimestampParseError::new(input, "timestamp is empty"));
    }

    match self.strip_suffix {
      Some(suffix_len) => {
        let char_count = input.chars().count();
        if char_count <= suffix_len {
          return Err(TimestampParseError::new(
            input,
            format!("shorter than the {suffix_len}-character suffix"),
          ));
        }
        let cut = input
          .char_indices()
          .nth(char_count - suffix_len)
          .map(|(idx, _)| idx)
          .unwrap_or(input.len());

        NaiveDateTime::parse_from_str(&input[..cut], &self.format)
          .map_err(|e| TimestampParseError::new(input, e.to_string()))
      }
      None => NaiveDateTime::parse_and_remainder(input, &self.format)
        .map(|(parsed, _rest)| parsed)
        .map_err(|e| TimestampParseError::new(input, e.to_string())),
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  fn instant(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, s).unwrap()
  }

  #[test]
  fn test_parse_jira_timestamp() {
    let parser = TimestampParser::default();
    let parsed = parser.parse("2020-01-01T10:15:30.000+0000").unwrap();
    assert_eq!(parsed, instant(2020, 1, 1, 10, 15, 30));
  }

  #[test]
  fn test_parse_ignores_zone_suffix_without_conversion() {
    let parser = TimestampParser::default();
    assert_eq!(
      parser.parse("2020-01-01T00:00:00UTC").unwrap(),
      instant(2020, 1, 1, 0, 0, 0)
    );
    // The offset is not applied
    assert_eq!(
      parser.parse("2020-01-01T00:00:00.000-0500").unwrap(),
      instant(2020, 1, 1, 0, 0, 0)
    );
  }

  #[test]
  fn test_parse_without_suffix() {
    let parser = TimestampParser::default();
    assert_eq!(
      parser.parse("2021-06-30T23:59:59").unwrap(),
      instant(2021, 6, 30, 23, 59, 59)
    );
  }

  #[test]
  fn test_parse_with_fixed_suffix() {
    let parser = TimestampParser::with_suffix(DEFAULT_TIMESTAMP_FORMAT, 9);
    assert_eq!(
      parser.parse("2020-01-05T08:00:00.000+0000").unwrap(),
      instant(2020, 1, 5, 8, 0, 0)
    );

    // A suffix of the wrong length leaves garbage for the strict parse
    assert!(parser.parse("2020-01-05T08:00:00UTC").is_err());
  }

  #[test]
  fn test_parse_suffix_longer_than_input() {
    let parser = TimestampParser::with_suffix(DEFAULT_TIMESTAMP_FORMAT, 9);
    let err = parser.parse("2020").unwrap_err();
    assert_eq!(err.input, "2020");
    assert!(err.reason.contains("9-character suffix"));
  }

  #[test]
  fn test_parse_malformed() {
    let parser = TimestampParser::default();
    let err = parser.parse("yesterday").unwrap_err();
    assert!(err.to_string().contains("Invalid timestamp 'yesterday'"));

    assert!(parser.parse("").is_err());
    assert!(parser.parse("2020-13-01T00:00:00").is_err());
  }

  #[test]
  fn test_custom_format() {
    let parser = TimestampParser {
      format: "%d/%m/%Y %H:%M".to_string(),
      strip_suffix: None,
    };
    assert_eq!(parser.parse("05/01/2020 08:30 CET").unwrap(), instant(2020, 1, 5, 8, 30, 0));
  }
}
