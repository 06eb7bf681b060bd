//! `/admin-remove` — erase a member's record.
//!
//! The access-policy guard runs in the dispatcher, ahead of this body; by the
//! time it executes the caller is known to be authorized.

use mend_core::{
  member::MemberId, platform::ChatPlatform, reply::Reply, store::RecordStore,
};

use crate::{AppState, error::Error};

pub async fn handler<S, P>(
  state:  &AppState<S, P>,
  target: MemberId,
) -> Result<Reply, Error>
where
  S: RecordStore + Clone + Send + Sync + 'static,
  P: ChatPlatform + Clone + Send + Sync + 'static,
{
  // Unconditional: removing an absent record still confirms.
  state
    .store
    .delete(target)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  Ok(Reply::text(format!(
    "🗑️ Sobriety data for {} has been removed.",
    target.mention()
  )))
}
