//! Wire-level models returned by the providers.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One entry of the asset listing endpoint.
///
/// Numeric fields arrive as decimal strings and are kept that way here;
/// parsing to `f64` happens record-by-record in the snapshot collector so a
/// single bad field skips one asset instead of failing the batch. Fields the
/// upstream occasionally omits are optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedAsset {
    /// Ticker symbol, e.g. "BTC". Case-sensitive as provided.
    pub symbol: String,
    /// Human-readable asset name, e.g. "Bitcoin".
    pub name: String,
    /// Spot price in USD as a decimal string.
    pub price_usd: Option<String>,
    /// 24-hour traded volume in USD as a decimal string.
    #[serde(rename = "volumeUsd24Hr")]
    pub volume_usd_24hr: Option<String>,
}

/// One OHLC candle as decoded from the candle endpoint.
///
/// `open_time` is the start of the candle's timeframe, already converted
/// from epoch milliseconds to UTC.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderCandle {
    pub open_time: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: Option<f64>,
}
