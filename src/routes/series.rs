//! Chart series endpoint: `GET /api/series`.
//!
//! Serves readings as index-aligned parallel arrays for the dashboard
//! charts. Two query forms exist: an explicit `[from, to]` time range, or
//! the most recent `limit` rows. Both answer in ascending chronological
//! order — callers never have to care which branch ran.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::ReadingPoint;
use crate::store::SharedStore;

/// Rows returned when no explicit time range is given.
const DEFAULT_SERIES_LIMIT: i64 = 200;

/// Label format the dashboard charts expect.
const LABEL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ---

pub fn router() -> Router<SharedStore> {
    // ---
    Router::new().route("/api/series", get(series))
}

#[derive(Debug, Deserialize)]
struct SeriesParams {
    limit: Option<i64>,
    from: Option<String>,
    to: Option<String>,
}

#[derive(Debug, Serialize)]
struct SeriesResponse {
    labels: Vec<String>,
    series: SeriesValues,
    count: usize,
}

#[derive(Debug, Serialize)]
struct SeriesValues {
    temp: Vec<Option<f64>>,
    hum: Vec<Option<f64>>,
    luz: Vec<Option<i64>>,
    ruido: Vec<Option<f64>>,
}

async fn series(
    State(store): State<SharedStore>,
    Query(params): Query<SeriesParams>,
) -> Result<Json<SeriesResponse>, ApiError> {
    // ---
    let rows = match (&params.from, &params.to) {
        (Some(from), Some(to)) => {
            let from = parse_timestamp(from)?;
            let to = parse_timestamp(to)?;
            if from > to {
                return Err(ApiError::InvalidRange);
            }
            // `limit` is intentionally not applied to an explicit range:
            // callers asking for a window get the whole window.
            store.series_between(from, to).await?
        }
        _ => {
            let limit = params.limit.unwrap_or(DEFAULT_SERIES_LIMIT);
            let mut rows = store.series_recent(limit).await?;
            // the store hands back newest-first; flip to chronological order
            rows.reverse();
            rows
        }
    };

    Ok(Json(build_series(rows)))
}

/// Parse a series bound.
///
/// Accepts RFC 3339, `T`- or space-separated date-times (with optional
/// fractional seconds), and bare dates interpreted as midnight. Naive
/// inputs are taken as UTC.
fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, ApiError> {
    // ---
    let trimmed = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(ApiError::InvalidTimestamp(input.to_owned()))
}

/// Turn time-ordered rows into index-aligned chart arrays.
///
/// A null field becomes a null entry at its index; the value arrays always
/// have the same length as `labels`.
fn build_series(rows: Vec<ReadingPoint>) -> SeriesResponse {
    // ---
    let mut labels = Vec::with_capacity(rows.len());
    let mut temp = Vec::with_capacity(rows.len());
    let mut hum = Vec::with_capacity(rows.len());
    let mut luz = Vec::with_capacity(rows.len());
    let mut ruido = Vec::with_capacity(rows.len());

    for row in rows {
        labels.push(row.recorded_at.format(LABEL_FORMAT).to_string());
        temp.push(row.temp);
        hum.push(row.hum);
        luz.push(row.luz);
        ruido.push(row.ruido);
    }

    let count = labels.len();
    SeriesResponse {
        labels,
        series: SeriesValues {
            temp,
            hum,
            luz,
            ruido,
        },
        count,
    }
}

// ---
