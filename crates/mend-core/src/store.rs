//! The `RecordStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `mend-store-sqlite`).
//! The bot crate depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{member::MemberId, record::SobrietyRecord};

/// Abstraction over the sobriety-record store.
///
/// One record per member. Every mutating call durably persists before its
/// future resolves; there is no write-back caching and no cross-call
/// transaction.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait RecordStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert or fully replace the record for `member_id`.
  ///
  /// Overwriting discards the prior row entirely, so `is_private` falls back
  /// to its default (false).
  fn upsert(
    &self,
    member_id: MemberId,
    start_date: String,
    substance: String,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Retrieve the record for a member. Returns `None` if not set.
  fn get(
    &self,
    member_id: MemberId,
  ) -> impl Future<Output = Result<Option<SobrietyRecord>, Self::Error>> + Send + '_;

  /// Every record, in the backend's stable fetch order.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<SobrietyRecord>, Self::Error>> + Send + '_;

  /// Delete the record for `member_id`. Succeeds whether or not one existed.
  fn delete(
    &self,
    member_id: MemberId,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
