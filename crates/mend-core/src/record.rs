//! Sobriety records and the fixed start-date text format.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result, member::MemberId};

/// Textual format for stored start dates: `MM-DD-YY`.
pub const DATE_FORMAT: &str = "%m-%d-%y";

/// One member's sobriety declaration. One row per member; re-setting fully
/// overwrites the previous row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SobrietyRecord {
  pub member_id:  MemberId,
  /// Start date in [`DATE_FORMAT`]. Kept verbatim even when it no longer
  /// parses; such a record yields no streak value.
  pub start_date: String,
  /// Free-text label, accepted verbatim.
  pub substance:  String,
  /// When true, only the owning member may view the record's details.
  pub is_private: bool,
}

/// Parse a start date under the fixed format.
pub fn parse_start_date(text: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(text, DATE_FORMAT)
    .map_err(|_| Error::InvalidDate(text.to_string()))
}

/// Parse and re-render a start date, yielding canonical `MM-DD-YY` text.
pub fn normalize_start_date(text: &str) -> Result<String> {
  Ok(parse_start_date(text)?.format(DATE_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_fixed_format() {
    let date = parse_start_date("01-01-25").unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
  }

  #[test]
  fn normalize_zero_pads() {
    assert_eq!(normalize_start_date("1-1-25").unwrap(), "01-01-25");
  }

  #[test]
  fn rejects_other_formats() {
    assert!(parse_start_date("2025-01-01").is_err());
    assert!(parse_start_date("13-40-25").is_err());
    assert!(parse_start_date("yesterday").is_err());
  }
}
