//! Access policy for privileged commands.

use crate::member::Caller;

/// True when `caller` may run a command gated on `required_role`.
///
/// Administrators pass unconditionally; otherwise the role name must appear
/// among the caller's roles. Re-evaluated on every invocation — no caching,
/// no negative-result memoization.
pub fn is_authorized(caller: &Caller, required_role: &str) -> bool {
  caller.is_admin || caller.roles.iter().any(|role| role == required_role)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::member::MemberId;

  fn caller(roles: &[&str], is_admin: bool) -> Caller {
    Caller {
      id:           MemberId(1),
      display_name: "tester".to_string(),
      roles:        roles.iter().map(|r| r.to_string()).collect(),
      is_admin,
    }
  }

  #[test]
  fn admin_passes_without_the_role() {
    assert!(is_authorized(&caller(&[], true), "Moderator"));
  }

  #[test]
  fn role_holder_passes() {
    assert!(is_authorized(&caller(&["Helper", "Moderator"], false), "Moderator"));
  }

  #[test]
  fn plain_member_is_refused() {
    assert!(!is_authorized(&caller(&["Helper"], false), "Moderator"));
    assert!(!is_authorized(&caller(&[], false), "Moderator"));
  }

  #[test]
  fn role_names_match_exactly() {
    assert!(!is_authorized(&caller(&["moderator"], false), "Moderator"));
  }
}
