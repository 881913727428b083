//! Pooled PostgreSQL implementation of [`ReadingStore`].

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::config::Config;
use crate::models::{NewReading, Reading, ReadingPoint};
use crate::store::{ReadingStore, StoreError};

// ---

/// Readings store backed by a bounded `PgPool`.
///
/// Each statement runs directly on the pool: sqlx checks a connection out,
/// runs the query, and returns the connection when the future completes,
/// success or error. Statements outside an explicit transaction persist
/// immediately (auto-commit), which is all the single-row inserts here need.
pub struct PgReadingStore {
    pool: PgPool,
}

impl PgReadingStore {
    /// Connect a pool from the configured connection parameters.
    ///
    /// `max_connections` bounds the pool and `acquire_timeout` bounds how
    /// long a request may wait for a free connection; a saturated or
    /// unreachable store surfaces as an error here or on first use, never as
    /// an indefinite block.
    pub async fn connect(cfg: &Config) -> Result<Self, StoreError> {
        // ---
        let options = PgConnectOptions::new()
            .host(&cfg.db_host)
            .port(cfg.db_port)
            .username(&cfg.db_user)
            .password(&cfg.db_pass)
            .database(&cfg.db_name);

        let pool = PgPoolOptions::new()
            .max_connections(cfg.db_pool_max)
            .acquire_timeout(Duration::from_secs(cfg.db_acquire_timeout_secs))
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// The underlying pool, for startup tasks such as schema creation.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ReadingStore for PgReadingStore {
    async fn insert(
        &self,
        reading: NewReading,
        recorded_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        // ---
        sqlx::query(
            r#"
            INSERT INTO sensor_readings (temp, hum, luz, ruido, recorded_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(reading.temp)
        .bind(reading.hum)
        .bind(reading.luz)
        .bind(reading.ruido)
        .bind(recorded_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn latest(&self, n: i64) -> Result<Vec<Reading>, StoreError> {
        // ---
        let rows = sqlx::query_as::<_, Reading>(
            r#"
            SELECT id, temp, hum, luz, ruido, recorded_at
            FROM sensor_readings
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(n)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn current(&self) -> Result<Option<ReadingPoint>, StoreError> {
        // ---
        let row = sqlx::query_as::<_, ReadingPoint>(
            r#"
            SELECT temp, hum, luz, ruido, recorded_at
            FROM sensor_readings
            ORDER BY id DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn series_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<ReadingPoint>, StoreError> {
        // ---
        let rows = sqlx::query_as::<_, ReadingPoint>(
            r#"
            SELECT temp, hum, luz, ruido, recorded_at
            FROM sensor_readings
            WHERE recorded_at BETWEEN $1 AND $2
            ORDER BY recorded_at ASC
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn series_recent(&self, limit: i64) -> Result<Vec<ReadingPoint>, StoreError> {
        // ---
        let rows = sqlx::query_as::<_, ReadingPoint>(
            r#"
            SELECT temp, hum, luz, ruido, recorded_at
            FROM sensor_readings
            ORDER BY recorded_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
