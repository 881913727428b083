//! Request-level error taxonomy for the API surface.
//!
//! Every handler returns `Result<_, ApiError>`; the [`IntoResponse`]
//! implementation below is the single place where errors become HTTP
//! responses, so status codes and the wire shape of error bodies stay
//! consistent across routes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

// ---

/// Errors a request can fail with.
///
/// Validation and query-parameter problems answer 400 and never touch the
/// store; store failures answer 500 with the underlying message passed
/// through. Nothing here is retried and nothing is fatal to the process.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required ingest payload key was absent.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// An ingest payload value could not be converted to its numeric type.
    #[error("invalid value for field: {0}")]
    InvalidType(&'static str),

    /// A series query supplied `from` after `to`.
    #[error("invalid range: `from` is after `to`")]
    InvalidRange,

    /// A series query bound did not parse as a date-time.
    #[error("unrecognized date-time: {0}")]
    InvalidTimestamp(String),

    /// The store was unreachable or a query failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // ---
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        }
        let body = Json(json!({ "status": "error", "msg": self.to_string() }));
        (status, body).into_response()
    }
}
