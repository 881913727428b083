//! Dashboard page and root redirect.
//!
//! The chart page itself is a static asset that polls `/api/series` from the
//! browser; this module only serves it and points `/` at it.

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

// ---

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/dashboard", get(dashboard))
}

/// `GET /` answers 302 with the dashboard location.
async fn index() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/dashboard")])
}

async fn dashboard() -> Html<&'static str> {
    Html(include_str!("../../assets/dashboard.html"))
}

// ---
