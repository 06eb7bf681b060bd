//! Integration tests for `SqliteStore` against an in-memory database.

use mend_core::{member::MemberId, store::RecordStore};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

const ALICE: MemberId = MemberId(1001);
const BOB: MemberId = MemberId(1002);
const CARA: MemberId = MemberId(1003);

// ─── Upsert & get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn upsert_and_get() {
  let s = store().await;

  s.upsert(ALICE, "01-01-25".into(), "Alcohol".into())
    .await
    .unwrap();

  let record = s.get(ALICE).await.unwrap().unwrap();
  assert_eq!(record.member_id, ALICE);
  assert_eq!(record.start_date, "01-01-25");
  assert_eq!(record.substance, "Alcohol");
  assert!(!record.is_private);
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get(ALICE).await.unwrap().is_none());
}

#[tokio::test]
async fn upsert_overwrites_in_place() {
  let s = store().await;

  s.upsert(ALICE, "01-01-25".into(), "Alcohol".into())
    .await
    .unwrap();
  s.upsert(ALICE, "02-14-25".into(), "Nicotine".into())
    .await
    .unwrap();

  let all = s.list_all().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].start_date, "02-14-25");
  assert_eq!(all[0].substance, "Nicotine");
}

#[tokio::test]
async fn overwrite_resets_privacy() {
  let s = store().await;

  s.upsert(ALICE, "01-01-25".into(), "Alcohol".into())
    .await
    .unwrap();
  s.set_privacy(ALICE, true).await.unwrap();
  assert!(s.get(ALICE).await.unwrap().unwrap().is_private);

  s.upsert(ALICE, "01-02-25".into(), "Alcohol".into())
    .await
    .unwrap();
  assert!(!s.get(ALICE).await.unwrap().unwrap().is_private);
}

#[tokio::test]
async fn free_text_substance_is_kept_verbatim() {
  let s = store().await;

  s.upsert(ALICE, "01-01-25".into(), "All Substances ✨".into())
    .await
    .unwrap();

  let record = s.get(ALICE).await.unwrap().unwrap();
  assert_eq!(record.substance, "All Substances ✨");
}

#[tokio::test]
async fn unparseable_date_is_stored_verbatim() {
  let s = store().await;

  s.upsert(ALICE, "garbage".into(), "Alcohol".into())
    .await
    .unwrap();

  let record = s.get(ALICE).await.unwrap().unwrap();
  assert_eq!(record.start_date, "garbage");
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_all_returns_every_record() {
  let s = store().await;

  s.upsert(ALICE, "01-01-25".into(), "Alcohol".into())
    .await
    .unwrap();
  s.upsert(BOB, "06-15-24".into(), "Nicotine".into())
    .await
    .unwrap();
  s.upsert(CARA, "11-30-23".into(), "Caffeine".into())
    .await
    .unwrap();

  let all = s.list_all().await.unwrap();
  assert_eq!(all.len(), 3);

  let ids: Vec<_> = all.iter().map(|r| r.member_id).collect();
  assert_eq!(ids, vec![ALICE, BOB, CARA]);
}

#[tokio::test]
async fn list_all_empty_store() {
  let s = store().await;
  assert!(s.list_all().await.unwrap().is_empty());
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_record() {
  let s = store().await;

  s.upsert(ALICE, "01-01-25".into(), "Alcohol".into())
    .await
    .unwrap();
  s.delete(ALICE).await.unwrap();

  assert!(s.get(ALICE).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_missing_is_not_an_error() {
  let s = store().await;
  s.delete(ALICE).await.unwrap();
}
