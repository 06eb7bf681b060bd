//! Member identity as delivered by the chat platform.

use std::{fmt, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

/// Opaque platform-assigned member identifier (a decimal snowflake).
///
/// Stored and transmitted as a decimal string; the numeric form exists only
/// so ids compare and hash cheaply.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MemberId(pub u64);

impl MemberId {
  /// The platform's inline-mention markup for this member.
  pub fn mention(&self) -> String {
    format!("<@{}>", self.0)
  }
}

impl fmt::Display for MemberId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl FromStr for MemberId {
  type Err = ParseIntError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Self(s.parse()?))
  }
}

/// The invoking member, with everything the access policy needs already
/// resolved by the platform.
#[derive(Debug, Clone)]
pub struct Caller {
  pub id:           MemberId,
  pub display_name: String,
  /// Names of the roles the platform reports for the caller.
  pub roles:        Vec<String>,
  /// Platform-level administrative privilege.
  pub is_admin:     bool,
}
