//! Ingest endpoint: `POST /api/data`.
//!
//! Validates a sensor payload, stamps it with the server clock, and appends
//! exactly one row to the store. Validation failures answer 400 before any
//! store access; store failures answer 500 with nothing written.

use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::ApiError;
use crate::models::NewReading;
use crate::store::SharedStore;

// ---

pub fn router() -> Router<SharedStore> {
    // ---
    Router::new().route("/api/data", post(ingest))
}

/// Acknowledgment echoing the normalized values back to the sensor client.
/// The id and timestamp assigned on insert are not included, and `ruido` has
/// never been part of the ack wire shape.
#[derive(Debug, Serialize)]
struct IngestAck {
    status: &'static str,
    received: ReceivedValues,
}

#[derive(Debug, Serialize)]
struct ReceivedValues {
    temp: f64,
    hum: f64,
    luz: i64,
}

async fn ingest(
    State(store): State<SharedStore>,
    Json(payload): Json<Value>,
) -> Result<Json<IngestAck>, ApiError> {
    // ---
    let reading = NewReading::from_payload(&payload)?;

    store.insert(reading, Utc::now()).await?;
    debug!(
        temp = reading.temp,
        hum = reading.hum,
        luz = reading.luz,
        ruido = reading.ruido,
        "stored reading"
    );

    Ok(Json(IngestAck {
        status: "ok",
        received: ReceivedValues {
            temp: reading.temp,
            hum: reading.hum,
            luz: reading.luz,
        },
    }))
}

// ---
