//! Recent-readings endpoints: `GET /ultimos` and `GET /api/ultimo`.

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::models::Reading;
use crate::store::SharedStore;

/// Rows returned by `GET /ultimos`. The route exposes no limit parameter.
const LATEST_LIMIT: i64 = 20;

// ---

pub fn router() -> Router<SharedStore> {
    // ---
    Router::new()
        .route("/ultimos", get(ultimos))
        .route("/api/ultimo", get(ultimo))
}

/// The 20 most recently inserted readings, most recent first.
async fn ultimos(State(store): State<SharedStore>) -> Result<Json<Vec<Reading>>, ApiError> {
    Ok(Json(store.latest(LATEST_LIMIT).await?))
}

/// The single most recent reading, or `{}` when the store is empty.
async fn ultimo(State(store): State<SharedStore>) -> Result<Json<Value>, ApiError> {
    // ---
    let body = match store.current().await? {
        Some(point) => json!(point),
        None => json!({}),
    };
    Ok(Json(body))
}

// ---
