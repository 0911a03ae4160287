//! Binance-style kline (candle) provider.
//!
//! The candle endpoint returns an array of arrays, one inner array per
//! candle: `[openTimeMillis, open, high, low, close, volume, closeTime, ...]`
//! with the price fields as decimal strings. Only the first six fields are
//! consumed.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use log::warn;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::ProviderCandle;
use crate::provider::CandleProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "BINANCE";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Candle provider backed by a Binance-compatible klines API.
pub struct BinanceProvider {
    client: Client,
    base_url: String,
}

impl BinanceProvider {
    /// Create a new provider against the given base URL
    /// (e.g. `https://api.binance.com`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl CandleProvider for BinanceProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_recent_candles(
        &self,
        pair: &str,
        interval: &str,
        limit: u32,
    ) -> Result<Vec<ProviderCandle>, MarketDataError> {
        let url = format!(
            "{}/api/v3/klines?symbol={}&interval={}&limit={}",
            self.base_url.trim_end_matches('/'),
            pair,
            interval,
            limit
        );

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::Status {
                provider: PROVIDER_ID,
                status: status.as_u16(),
            });
        }

        let payload: Value =
            response
                .json()
                .await
                .map_err(|e| MarketDataError::MalformedPayload {
                    provider: PROVIDER_ID,
                    message: e.to_string(),
                })?;

        parse_kline_array(pair, &payload)
    }
}

/// Decode the kline array-of-arrays payload.
///
/// Rows that do not decode (too short, bad timestamp, unparsable prices) are
/// skipped with a warning; only a non-array top level is treated as a
/// provider failure.
fn parse_kline_array(pair: &str, payload: &Value) -> Result<Vec<ProviderCandle>, MarketDataError> {
    let rows = payload
        .as_array()
        .ok_or_else(|| MarketDataError::MalformedPayload {
            provider: PROVIDER_ID,
            message: "expected top-level array".to_string(),
        })?;

    let mut candles = Vec::with_capacity(rows.len());

    for row in rows {
        match parse_kline_row(row) {
            Some(candle) => candles.push(candle),
            None => warn!("skipping malformed kline row for {}: {}", pair, row),
        }
    }

    Ok(candles)
}

fn parse_kline_row(row: &Value) -> Option<ProviderCandle> {
    let fields = row.as_array()?;
    if fields.len() < 6 {
        return None;
    }

    let open_time = millis_to_utc(fields[0].as_i64()?)?;
    Some(ProviderCandle {
        open_time,
        open: field_as_f64(&fields[1])?,
        high: field_as_f64(&fields[2])?,
        low: field_as_f64(&fields[3])?,
        close: field_as_f64(&fields[4])?,
        volume: field_as_f64(&fields[5]),
    })
}

/// Price fields arrive as decimal strings, but some compatible APIs send
/// plain numbers.
fn field_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

fn millis_to_utc(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}
