//! The `VersionStore` trait.
//!
//! Implemented by storage backends (e.g. `docfold-store-sqlite`). The
//! aggregator, the processor, and the outer surfaces depend on this
//! abstraction, not on a concrete backend.

use std::future::Future;

use crate::document::Version;

/// Durable record of every distinct `(url, fetch_time)` version ever
/// submitted.
///
/// All mutation goes through [`upsert`](Self::upsert) and all reads through
/// [`list_versions_by_url`](Self::list_versions_by_url). Methods return `Send`
/// futures so a store can sit behind a multi-threaded runtime.
pub trait VersionStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert `version`, or fully replace the stored version sharing its
  /// `(url, fetch_time)`. The write is committed when the future resolves.
  fn upsert(
    &self,
    version: Version,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// All versions of `url`, ascending by `fetch_time`. An unknown url yields
  /// an empty list, not an error.
  fn list_versions_by_url<'a>(
    &'a self,
    url: &'a str,
  ) -> impl Future<Output = Result<Vec<Version>, Self::Error>> + Send + 'a;
}
