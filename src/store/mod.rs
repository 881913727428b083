//! Storage abstraction for sensor readings.
//!
//! Handlers depend on the [`ReadingStore`] trait rather than a concrete
//! database handle, so the Postgres backend can be swapped for the in-memory
//! one in tests. The store is constructed once in `main.rs` and passed in as
//! shared state — there is no process-wide global.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{NewReading, Reading, ReadingPoint};

#[cfg(test)]
pub mod memory;
pub mod postgres;

// ---

/// Failure talking to the backing store — unreachable server, exhausted
/// pool, or a query error. Reported to clients as a 500, never retried here.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Shared handle the router state carries.
pub type SharedStore = Arc<dyn ReadingStore>;

/// Persistence operations the API needs.
///
/// Readings are immutable once written: the trait deliberately has no update
/// or delete. Every method holds a connection only for the duration of the
/// single statement it runs.
#[async_trait]
pub trait ReadingStore: Send + Sync {
    /// Append one reading stamped with the given server-assigned timestamp.
    async fn insert(
        &self,
        reading: NewReading,
        recorded_at: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    /// The `n` most recently inserted readings, most recent first.
    async fn latest(&self, n: i64) -> Result<Vec<Reading>, StoreError>;

    /// The single most recent reading, if any.
    async fn current(&self) -> Result<Option<ReadingPoint>, StoreError>;

    /// Readings with `recorded_at` in `[from, to]` (inclusive both ends),
    /// ascending by timestamp.
    async fn series_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<ReadingPoint>, StoreError>;

    /// The `limit` most recent readings, descending by timestamp.
    async fn series_recent(&self, limit: i64) -> Result<Vec<ReadingPoint>, StoreError>;
}
