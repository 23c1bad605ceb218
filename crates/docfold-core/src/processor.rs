//! [`Processor`] — owns a store handle and runs the ingest-then-aggregate
//! cycle for each observation.

use tokio::sync::Mutex;

use crate::{
  Error, Result,
  aggregate::aggregate,
  document::{AggregatedDocument, Observation},
  store::VersionStore,
};

/// Entry point for callers: submit an observation, get the URL's current
/// aggregate back.
///
/// Each [`process`](Self::process) call holds a write lock across its upsert
/// and the following read, so callers sharing one processor never see another
/// caller's write land between the two.
pub struct Processor<S> {
  store:      S,
  write_lock: Mutex<()>,
}

impl<S: VersionStore> Processor<S> {
  pub fn new(store: S) -> Self { Self { store, write_lock: Mutex::new(()) } }

  pub fn store(&self) -> &S { &self.store }

  /// Release the store handle.
  pub fn into_inner(self) -> S { self.store }

  /// Persist `observation` as a version, then return the aggregate of every
  /// version stored for its URL.
  ///
  /// Either both steps succeed or the call fails; no partial aggregate is
  /// ever returned.
  pub async fn process(
    &self,
    observation: Observation,
  ) -> Result<AggregatedDocument> {
    if observation.url.is_empty() {
      return Err(Error::EmptyUrl);
    }

    let version = observation.into_version();
    let url = version.url.clone();

    let _guard = self.write_lock.lock().await;

    tracing::debug!(
      url = %url,
      fetch_time = version.fetch_time,
      "upserting version"
    );
    self.store.upsert(version).await.map_err(Error::store)?;

    aggregate(&self.store, &url).await
  }

  /// The current aggregate for `url`, without writing anything.
  pub async fn aggregate(&self, url: &str) -> Result<AggregatedDocument> {
    aggregate(&self.store, url).await
  }
}
