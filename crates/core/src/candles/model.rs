//! Candle domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted OHLC candle.
///
/// Immutable once inserted. At most one candle exists per
/// `(symbol_id, timeframe_start)` pair; that tuple is the dedup key the
/// pipeline enforces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candle {
    pub id: i32,
    pub symbol_id: i32,
    pub symbol: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Traded volume in the timeframe. Absent when the provider omits it.
    pub volume: Option<f64>,
    /// Start instant of the candle's timeframe.
    pub timeframe_start: DateTime<Utc>,
}

/// Payload for inserting a candle row.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCandle {
    pub symbol_id: i32,
    pub symbol: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: Option<f64>,
    pub timeframe_start: DateTime<Utc>,
}
