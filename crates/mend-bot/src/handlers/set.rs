//! `/set` — record or overwrite the caller's sobriety start date.

use mend_core::{
  member::Caller,
  platform::ChatPlatform,
  record,
  reply::{Embed, Reply, color},
  store::RecordStore,
};

use crate::{AppState, error::Error};

pub async fn handler<S, P>(
  state:     &AppState<S, P>,
  caller:    &Caller,
  date_text: &str,
  substance: &str,
) -> Result<Reply, Error>
where
  S: RecordStore + Clone + Send + Sync + 'static,
  P: ChatPlatform + Clone + Send + Sync + 'static,
{
  // Validation failure never touches the store.
  let date = match record::normalize_start_date(date_text) {
    Ok(date) => date,
    Err(_) => return Ok(format_hint()),
  };

  state
    .store
    .upsert(caller.id, date.clone(), substance.to_string())
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  Ok(Reply::embed(Embed::new(
    "🎉 Sobriety Date Set! 🎉",
    format!(
      "**{}, your sobriety journey starts here!**\n\n\
       📅 **Date:** `{date}`\n\
       💊 **Substance:** `{substance}`",
      caller.id.mention()
    ),
    color::GREEN,
  )))
}

fn format_hint() -> Reply {
  Reply::embed(Embed::new(
    "❌ Invalid Date Format ❌",
    "**Use the format `MM-DD-YY` (e.g., `01-01-25`).**\n\n\
     **Example Usage:**\n\
     `/set 01-01-25 Alcohol`\n\
     `/set 01-01-25 All Substances`",
    color::RED,
  ))
  .ephemeral()
}
