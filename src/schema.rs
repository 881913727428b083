//! Database schema management for `sensor-series`.
//!
//! Ensures the readings table and its index exist before serving requests.
//! Applied once on startup from `main.rs`.

use anyhow::Result;
use sqlx::PgPool;

// ---

/// Create the database schema if absent (idempotent).
///
/// Creates the `sensor_readings` table served by the ingest and query routes.
/// Safe to call on every startup; no-op if the objects already exist. There is
/// no migration or versioning logic — create-if-absent only.
///
/// Errors are propagated if any SQL execution fails.
pub async fn create_schema(pool: &PgPool) -> Result<()> {
    // ---
    let mut tx = pool.begin().await?;

    // The value columns stay nullable; readers must tolerate nulls even
    // though ingest validation never inserts them.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sensor_readings (
            id          BIGSERIAL PRIMARY KEY,
            temp        DOUBLE PRECISION,
            hum         DOUBLE PRECISION,
            luz         BIGINT,
            ruido       DOUBLE PRECISION,
            recorded_at TIMESTAMPTZ NOT NULL
        );
        "#,
    )
    .execute(&mut *tx)
    .await?;

    // Series queries filter and order by timestamp
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_sensor_readings_recorded_at
            ON sensor_readings (recorded_at);
        "#,
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(())
}
