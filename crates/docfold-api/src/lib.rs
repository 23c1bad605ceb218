//! JSON HTTP API for docfold.
//!
//! Exposes an axum [`Router`] over a shared [`Processor`]. Auth and TLS are
//! the caller's responsibility.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/observations` | Body: observation JSON; returns the aggregate |
//! | `GET`  | `/documents?url=<url>` | Current aggregate; 404 if unknown |
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", docfold_api::api_router(Arc::new(Processor::new(store))))
//! ```

pub mod documents;
pub mod error;
pub mod observations;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use docfold_core::{Processor, store::VersionStore};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Build the API router for `processor`.
///
/// All writes go through the one processor, so concurrent requests for the
/// same URL are serialized by its write lock.
pub fn api_router<S>(processor: Arc<Processor<S>>) -> Router<()>
where
  S: VersionStore + 'static,
{
  Router::new()
    .route("/observations", post(observations::create::<S>))
    .route("/documents", get(documents::get_one::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(processor)
}
