//! [`SqliteStore`] — the SQLite implementation of [`RecordStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use mend_core::{member::MemberId, record::SobrietyRecord, store::RecordStore};

use crate::{Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A sobriety-record store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. All calls
/// funnel through one connection thread, so each statement executes atomically
/// with respect to concurrent command invocations.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

/// Raw strings read directly from a `sobriety_records` row.
struct RawRecord {
  member_id:  String,
  start_date: String,
  substance:  String,
  is_private: bool,
}

impl RawRecord {
  fn into_record(self) -> Result<SobrietyRecord> {
    Ok(SobrietyRecord {
      member_id:  self.member_id.parse()?,
      start_date: self.start_date,
      substance:  self.substance,
      is_private: self.is_private,
    })
  }
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn =
      tokio_rusqlite::Connection::open(path.as_ref().to_path_buf()).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Flip the privacy flag on an existing record.
  ///
  /// No registered command reaches this; operators toggle privacy out of
  /// band, and tests use it to exercise the private-record view path.
  pub async fn set_privacy(&self, member_id: MemberId, private: bool) -> Result<()> {
    let id_str = member_id.to_string();
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE sobriety_records SET is_private = ?2 WHERE member_id = ?1",
          rusqlite::params![id_str, private],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for SqliteStore {
  type Error = crate::Error;

  async fn upsert(
    &self,
    member_id: MemberId,
    start_date: String,
    substance: String,
  ) -> Result<()> {
    let id_str = member_id.to_string();
    self
      .conn
      .call(move |conn| {
        // REPLACE drops any existing row first, resetting is_private to its
        // column default.
        conn.execute(
          "INSERT OR REPLACE INTO sobriety_records (member_id, start_date, substance)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![id_str, start_date, substance],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn get(&self, member_id: MemberId) -> Result<Option<SobrietyRecord>> {
    let id_str = member_id.to_string();

    let raw: Option<RawRecord> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT member_id, start_date, substance, is_private
               FROM sobriety_records WHERE member_id = ?1",
              rusqlite::params![id_str],
              |row| {
                Ok(RawRecord {
                  member_id:  row.get(0)?,
                  start_date: row.get(1)?,
                  substance:  row.get(2)?,
                  is_private: row.get(3)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawRecord::into_record).transpose()
  }

  async fn list_all(&self) -> Result<Vec<SobrietyRecord>> {
    let raws: Vec<RawRecord> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT member_id, start_date, substance, is_private
           FROM sobriety_records ORDER BY rowid",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawRecord {
              member_id:  row.get(0)?,
              start_date: row.get(1)?,
              substance:  row.get(2)?,
              is_private: row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRecord::into_record).collect()
  }

  async fn delete(&self, member_id: MemberId) -> Result<()> {
    let id_str = member_id.to_string();
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "DELETE FROM sobriety_records WHERE member_id = ?1",
          rusqlite::params![id_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
