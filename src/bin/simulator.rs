//! Synthetic sensor client.
//!
//! Posts a random reading to the ingest endpoint on a fixed interval,
//! mimicking a fleet sensor. Send failures are logged and tolerated — the
//! loop keeps running while the backend is down and resumes delivering as
//! soon as it comes back.
//!
//! # Environment Variables
//! - `INGEST_URL` (optional) – ingest endpoint
//!   (default: `http://127.0.0.1:8080/api/data`)
//! - `SEND_INTERVAL_SECS` (optional) – seconds between readings (default: 5)

use std::env;
use std::time::Duration;

use anyhow::Result;
use rand::Rng;
use serde_json::{json, Value};
use tracing_subscriber::filter::EnvFilter;

// ---

const DEFAULT_INGEST_URL: &str = "http://127.0.0.1:8080/api/data";
const DEFAULT_INTERVAL_SECS: u64 = 5;

#[tokio::main]
async fn main() -> Result<()> {
    // ---
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    let url = env::var("INGEST_URL").unwrap_or_else(|_| DEFAULT_INGEST_URL.to_string());
    let interval_secs = env::var("SEND_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_INTERVAL_SECS);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()?;

    tracing::info!(
        "Posting synthetic readings to {} every {}s",
        url,
        interval_secs
    );

    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
    loop {
        ticker.tick().await;

        let reading = synthetic_reading();
        match client.post(&url).json(&reading).send().await {
            Ok(resp) => tracing::info!(status = %resp.status(), "sent {}", reading),
            Err(e) => tracing::warn!("failed to send reading: {}", e),
        }
    }
}

// ---

/// One reading in the value ranges a real sensor node reports.
fn synthetic_reading() -> Value {
    // ---
    let mut rng = rand::rng();
    json!({
        "temp": round1(rng.random_range(20.0..30.0)),
        "hum": round1(rng.random_range(40.0..60.0)),
        "luz": rng.random_range(200..=800),
        "ruido": round1(rng.random_range(50.0..100.0)),
    })
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
