//! `/leaderboard` — top sobriety streaks, longest first.
//!
//! Privacy caveat: the leaderboard renders every record, including ones whose
//! `is_private` flag is set. Preserved observable behavior; see DESIGN.md.

use mend_core::{
  platform::ChatPlatform,
  record::SobrietyRecord,
  reply::{Embed, Reply, color},
  store::RecordStore,
  streak,
};

use crate::{AppState, error::Error};

/// Entries rendered per leaderboard; there is no pagination beyond this.
const MAX_ENTRIES: usize = 10;

pub async fn handler<S, P>(state: &AppState<S, P>) -> Result<Reply, Error>
where
  S: RecordStore + Clone + Send + Sync + 'static,
  P: ChatPlatform + Clone + Send + Sync + 'static,
{
  let records = state
    .store
    .list_all()
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  if records.is_empty() {
    return Ok(Reply::text(
      "🚫 No sobriety data available yet. Be the first to set yours!",
    ));
  }

  let today = state.clock.today();

  // Unparseable dates rank as zero-day streaks; see DESIGN.md.
  let mut ranked: Vec<(SobrietyRecord, i64)> = records
    .into_iter()
    .map(|record| {
      let days = streak::days_sober(&record.start_date, today).unwrap_or(0);
      (record, days)
    })
    .collect();

  // Stable sort: ties keep the store's fetch order.
  ranked.sort_by(|a, b| b.1.cmp(&a.1));
  ranked.truncate(MAX_ENTRIES);

  let mut embed = Embed::new(
    "🏆 Sobriety Leaderboard 🏆",
    "Top sobriety streaks in the server:",
    color::GOLD,
  );

  for (position, (record, days)) in ranked.iter().enumerate() {
    let name = state
      .platform
      .display_name(record.member_id)
      .await
      .map_err(|e| Error::Platform(Box::new(e)))?;

    embed = embed.field(
      format!("{}. {name}", position + 1),
      format!(
        "`{days}` days sober from `{}` (since `{}`)",
        record.substance, record.start_date
      ),
      false,
    );
  }

  Ok(Reply::embed(embed))
}
