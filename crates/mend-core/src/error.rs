//! Error types for `mend-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Input that does not parse under the fixed `MM-DD-YY` start-date format.
  #[error("invalid start date {0:?}, expected MM-DD-YY")]
  InvalidDate(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
