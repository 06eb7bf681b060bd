//! `/view` — show a member's streak, honouring the privacy flag.

use mend_core::{
  member::{Caller, MemberId},
  platform::ChatPlatform,
  reply::{Embed, Reply, color},
  store::RecordStore,
  streak,
};

use crate::{AppState, error::Error};

pub async fn handler<S, P>(
  state:  &AppState<S, P>,
  caller: &Caller,
  target: MemberId,
) -> Result<Reply, Error>
where
  S: RecordStore + Clone + Send + Sync + 'static,
  P: ChatPlatform + Clone + Send + Sync + 'static,
{
  let record = state
    .store
    .get(target)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  let Some(record) = record else {
    return Ok(Reply::text(format!(
      "❌ {} has not set their sobriety details.",
      target.mention()
    )));
  };

  if record.is_private && target != caller.id {
    return Ok(Reply::text(format!(
      "🔒 {} has chosen to keep their sobriety details private.",
      target.mention()
    )));
  }

  let Some(days) = streak::days_sober(&record.start_date, state.clock.today())
  else {
    return Ok(Reply::text(format!(
      "⚠️ {}, your sobriety date is invalid. Please reset it.",
      target.mention()
    )));
  };

  Ok(Reply::embed(
    Embed::new(
      "🌟 Sobriety Details 🌟",
      format!("Here are the details for {}:", target.mention()),
      color::BLUE,
    )
    .field("Days Sober:", format!("`{days}` days"), true)
    .field("Substance:", format!("`{}`", record.substance), true)
    .field("Since:", format!("`{}`", record.start_date), false),
  ))
}
