//! Handler for `POST /observations`.
//!
//! Body: an [`Observation`] (`first_fetch_time` optional). Stores it as a
//! version and responds with the URL's refreshed aggregate.

use std::sync::Arc;

use axum::{Json, extract::State};
use docfold_core::{
  Processor,
  document::{AggregatedDocument, Observation},
  store::VersionStore,
};

use crate::error::ApiError;

/// `POST /observations`
pub async fn create<S>(
  State(processor): State<Arc<Processor<S>>>,
  Json(body): Json<Observation>,
) -> Result<Json<AggregatedDocument>, ApiError>
where
  S: VersionStore + 'static,
{
  let fetch_time = body.fetch_time;
  let doc = processor.process(body).await?;
  tracing::info!(url = %doc.url, fetch_time, latest = doc.fetch_time, "observation processed");
  Ok(Json(doc))
}
