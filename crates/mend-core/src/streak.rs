//! Streak calculation — elapsed whole days since a recorded start date.

use chrono::{NaiveDate, Utc};

use crate::record;

/// Days elapsed from `date_text` (fixed `MM-DD-YY` format) to `today`.
///
/// Returns `None` when the stored text does not parse. Future start dates
/// yield a negative count rather than an error.
pub fn days_sober(date_text: &str, today: NaiveDate) -> Option<i64> {
  let start = record::parse_start_date(date_text).ok()?;
  Some((today - start).num_days())
}

/// Source of "today" — injected so handlers and tests agree on the clock.
pub trait Clock: Send + Sync {
  fn today(&self) -> NaiveDate;
}

/// Wall-clock dates in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn today(&self) -> NaiveDate {
    Utc::now().date_naive()
  }
}
