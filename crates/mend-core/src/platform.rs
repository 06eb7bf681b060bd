//! The `ChatPlatform` trait — the bot's outbound view of its host platform.
//!
//! Command registration and the interaction transport belong to the concrete
//! client; handlers themselves only ever need member lookup.

use std::future::Future;

use crate::member::MemberId;

/// Calls the bot makes against the chat platform while building replies.
pub trait ChatPlatform: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Resolve a member's display name for rendering.
  fn display_name(
    &self,
    member_id: MemberId,
  ) -> impl Future<Output = Result<String, Self::Error>> + Send + '_;
}
