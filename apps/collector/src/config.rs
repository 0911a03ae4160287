//! Environment-driven process configuration.

use std::time::Duration;

use coinwatch_core::constants::DEFAULT_POLL_INTERVAL_SECS;

/// Runtime configuration, resolved once at startup.
pub struct Config {
    /// Directory holding the SQLite file (unless `DATABASE_URL` overrides
    /// the full path).
    pub data_dir: String,
    /// Base URL of the asset listing provider.
    pub listing_base_url: String,
    /// Base URL of the candle provider.
    pub candle_base_url: String,
    /// Time between ingestion cycles.
    pub poll_interval: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let poll_interval_secs = std::env::var("CW_POLL_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_POLL_INTERVAL_SECS);

        Self {
            data_dir: env_or("CW_DATA_DIR", "./data"),
            listing_base_url: env_or("CW_LISTING_URL", "https://api.coincap.io/v2"),
            candle_base_url: env_or("CW_CANDLE_URL", "https://api.binance.com"),
            poll_interval: Duration::from_secs(poll_interval_secs),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
