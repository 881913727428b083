use axum::Router;

use crate::store::SharedStore;

mod dashboard;
mod health;
mod ingest;
mod readings;
mod series;

// ---

pub fn router(store: SharedStore) -> Router {
    // ---
    Router::new()
        .merge(ingest::router())
        .merge(readings::router())
        .merge(series::router())
        .merge(dashboard::router())
        .merge(health::router())
        .with_state(store)
}
