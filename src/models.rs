//! Data models for stored readings and ingest payloads.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

// ---

/// Payload keys every ingest request must carry, in validation order.
const REQUIRED_FIELDS: [&str; 4] = ["temp", "hum", "luz", "ruido"];

/// A stored reading, as served by `GET /ultimos`.
///
/// The value columns are nullable in the schema, so every read path types
/// them as `Option`; `id` and `recorded_at` are always present.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Reading {
    // ---
    pub id: i64,
    pub temp: Option<f64>,
    pub hum: Option<f64>,
    pub luz: Option<i64>,
    pub ruido: Option<f64>,
    pub recorded_at: DateTime<Utc>,
}

/// A reading without its row id — the shape of series rows and of
/// `GET /api/ultimo`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ReadingPoint {
    // ---
    pub temp: Option<f64>,
    pub hum: Option<f64>,
    pub luz: Option<i64>,
    pub ruido: Option<f64>,
    pub recorded_at: DateTime<Utc>,
}

impl From<&Reading> for ReadingPoint {
    fn from(reading: &Reading) -> Self {
        ReadingPoint {
            temp: reading.temp,
            hum: reading.hum,
            luz: reading.luz,
            ruido: reading.ruido,
            recorded_at: reading.recorded_at,
        }
    }
}

/// A validated ingest payload, ready to persist.
///
/// Constructed only through [`NewReading::from_payload`], so a value of this
/// type always carries all four fields. The timestamp is assigned by the
/// caller at insert time, never taken from the client.
#[derive(Debug, Clone, Copy)]
pub struct NewReading {
    // ---
    pub temp: f64,
    pub hum: f64,
    pub luz: i64,
    pub ruido: f64,
}

impl NewReading {
    /// Validate a JSON mapping into a reading.
    ///
    /// Each of `temp`, `hum`, `luz`, `ruido` must be present and convertible
    /// to its numeric type; the first missing key or unconvertible value
    /// decides the error. Numbers are accepted directly (floats truncate for
    /// `luz`), strings are parsed after trimming.
    pub fn from_payload(payload: &Value) -> Result<Self, ApiError> {
        // ---
        for field in REQUIRED_FIELDS {
            if payload.get(field).is_none() {
                return Err(ApiError::MissingField(field));
            }
        }

        let temp = as_f64(&payload["temp"]).ok_or(ApiError::InvalidType("temp"))?;
        let hum = as_f64(&payload["hum"]).ok_or(ApiError::InvalidType("hum"))?;
        let luz = as_i64(&payload["luz"]).ok_or(ApiError::InvalidType("luz"))?;
        let ruido = as_f64(&payload["ruido"]).ok_or(ApiError::InvalidType("ruido"))?;

        Ok(NewReading {
            temp,
            hum,
            luz,
            ruido,
        })
    }
}

// ---

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Floats truncate toward zero; strings must use integer syntax.
fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
