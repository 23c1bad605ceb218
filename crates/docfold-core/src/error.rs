//! Error types for `docfold-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Aggregation was requested for a URL with no stored versions.
  #[error("no versions stored for url: {0:?}")]
  NotFound(String),

  #[error("observation url must not be empty")]
  EmptyUrl,

  /// The backing store could not complete a read or write.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Box a backend error into [`Error::Store`].
  pub fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(err))
  }

  pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound(_)) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
