//! In-memory implementation of [`ReadingStore`].
//!
//! Mirrors the ordering semantics of the Postgres backend (insertion-ordered
//! ids, timestamp-ordered series) over a plain `Vec`, so handler tests can
//! exercise the real router without a database.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::{NewReading, Reading, ReadingPoint};
use crate::store::{ReadingStore, StoreError};

// ---

#[derive(Debug, Default)]
pub struct MemoryReadingStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    rows: Vec<Reading>,
}

#[async_trait]
impl ReadingStore for MemoryReadingStore {
    async fn insert(
        &self,
        reading: NewReading,
        recorded_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        // ---
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.rows.push(Reading {
            id,
            temp: Some(reading.temp),
            hum: Some(reading.hum),
            luz: Some(reading.luz),
            ruido: Some(reading.ruido),
            recorded_at,
        });
        Ok(())
    }

    async fn latest(&self, n: i64) -> Result<Vec<Reading>, StoreError> {
        // rows are kept in id order, so reverse iteration is newest-first
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .rows
            .iter()
            .rev()
            .take(n.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn current(&self) -> Result<Option<ReadingPoint>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.last().map(ReadingPoint::from))
    }

    async fn series_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<ReadingPoint>, StoreError> {
        // ---
        let inner = self.inner.lock().unwrap();
        let mut rows: Vec<ReadingPoint> = inner
            .rows
            .iter()
            .filter(|r| r.recorded_at >= from && r.recorded_at <= to)
            .map(ReadingPoint::from)
            .collect();
        rows.sort_by_key(|r| r.recorded_at);
        Ok(rows)
    }

    async fn series_recent(&self, limit: i64) -> Result<Vec<ReadingPoint>, StoreError> {
        // ---
        let inner = self.inner.lock().unwrap();
        let mut rows: Vec<ReadingPoint> = inner.rows.iter().map(ReadingPoint::from).collect();
        rows.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        rows.truncate(limit.max(0) as usize);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    // ---
    use chrono::TimeZone;

    use super::*;

    fn reading(temp: f64) -> NewReading {
        NewReading {
            temp,
            hum: 50.0,
            luz: 500,
            ruido: 70.0,
        }
    }

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 10, minute, 0).unwrap()
    }

    #[tokio::test]
    async fn ids_increase_in_insertion_order() {
        // ---
        let store = MemoryReadingStore::default();
        store.insert(reading(1.0), at(0)).await.unwrap();
        store.insert(reading(2.0), at(1)).await.unwrap();
        store.insert(reading(3.0), at(2)).await.unwrap();

        let latest = store.latest(2).await.unwrap();
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[0].temp, Some(3.0));
        assert_eq!(latest[1].temp, Some(2.0));
        assert!(latest[0].id > latest[1].id);
    }

    #[tokio::test]
    async fn current_is_none_on_empty_store() {
        // ---
        let store = MemoryReadingStore::default();
        assert!(store.current().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn current_returns_most_recent_values() {
        // ---
        let store = MemoryReadingStore::default();
        store.insert(reading(1.0), at(0)).await.unwrap();
        store.insert(reading(2.0), at(1)).await.unwrap();

        let current = store.current().await.unwrap().unwrap();
        assert_eq!(current.temp, Some(2.0));
        assert_eq!(current.recorded_at, at(1));
    }

    #[tokio::test]
    async fn series_between_is_inclusive_and_ascending() {
        // ---
        let store = MemoryReadingStore::default();
        store.insert(reading(1.0), at(0)).await.unwrap();
        store.insert(reading(2.0), at(5)).await.unwrap();
        store.insert(reading(3.0), at(10)).await.unwrap();
        store.insert(reading(4.0), at(20)).await.unwrap();

        let rows = store.series_between(at(0), at(10)).await.unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].recorded_at, at(0));
        assert_eq!(rows[2].recorded_at, at(10));
    }

    #[tokio::test]
    async fn series_recent_is_descending_and_bounded() {
        // ---
        let store = MemoryReadingStore::default();
        store.insert(reading(1.0), at(0)).await.unwrap();
        store.insert(reading(2.0), at(5)).await.unwrap();
        store.insert(reading(3.0), at(10)).await.unwrap();

        let rows = store.series_recent(2).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].recorded_at, at(10));
        assert_eq!(rows[1].recorded_at, at(5));
    }
}
