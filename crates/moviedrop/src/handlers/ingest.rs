//! Movie ingestion handler.

use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use uuid::Uuid;

use moviedrop_core::Movie;

use crate::{
    handlers::{AppError, RequestId},
    state::AppState,
};

/// Message returned on every successful insert.
const SUCCESS_MESSAGE: &str = "Successfully inserted data!";

/// Response from movie ingestion.
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub message: String,
}

/// Handles POST / - write one record to the table.
///
/// A JSON body must carry `id`, `year`, and `title`; each is coerced to
/// text before the write. An empty body falls back to the fixed default
/// record under a freshly generated id. Faults (malformed JSON, missing
/// fields, storage errors) propagate to [`AppError`] and surface as a
/// bare 500.
#[axum::debug_handler]
pub async fn ingest_movie(
    State(state): State<AppState>,
    RequestId(request_id): RequestId,
    body: Bytes,
) -> Result<Json<IngestResponse>, AppError> {
    tracing::info!(%request_id, "processing ingest request");

    let movie = if body.is_empty() {
        let movie = Movie::fallback(Uuid::new_v4().to_string());
        tracing::info!(
            %request_id,
            movie_id = %movie.id,
            action = "put_movie",
            "request without payload, using default record"
        );
        movie
    } else {
        let payload: serde_json::Value = serde_json::from_slice(&body)?;
        let movie = Movie::from_value(&payload)?;
        tracing::info!(
            %request_id,
            movie_id = %movie.id,
            action = "put_movie",
            "received payload"
        );
        movie
    };

    state.movie_store.put_movie(&movie).await?;

    tracing::info!(
        %request_id,
        movie_id = %movie.id,
        result = "success",
        "inserted record"
    );

    Ok(Json(IngestResponse {
        message: SUCCESS_MESSAGE.to_string(),
    }))
}
