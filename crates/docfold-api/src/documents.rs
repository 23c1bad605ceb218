//! Handler for `GET /documents?url=<url>` — the current aggregate for one
//! URL. 404 if nothing has been stored for it.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use docfold_core::{Processor, document::AggregatedDocument, store::VersionStore};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct DocumentParams {
  pub url: String,
}

/// `GET /documents?url=<url>`
pub async fn get_one<S>(
  State(processor): State<Arc<Processor<S>>>,
  Query(params): Query<DocumentParams>,
) -> Result<Json<AggregatedDocument>, ApiError>
where
  S: VersionStore + 'static,
{
  match processor.aggregate(&params.url).await {
    Ok(doc) => Ok(Json(doc)),
    Err(e) => {
      if e.is_not_found() {
        tracing::warn!(url = %params.url, "aggregate requested for unknown url");
      }
      Err(e.into())
    }
  }
}
