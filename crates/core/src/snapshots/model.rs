//! Snapshot domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One point-in-time observation of an asset's price and 24h volume.
///
/// Append-only; duplicates across cycles are expected, this is a time
/// series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub id: i32,
    pub symbol_id: i32,
    pub name: String,
    pub symbol: String,
    pub price_usd: f64,
    pub volume_usd: f64,
    /// Capture time of the cycle this row belongs to. Shared by every asset
    /// captured in the same run.
    pub collected_at: DateTime<Utc>,
}

/// Payload for appending a snapshot row.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSnapshot {
    pub symbol_id: i32,
    pub name: String,
    pub symbol: String,
    pub price_usd: f64,
    pub volume_usd: f64,
    pub collected_at: DateTime<Utc>,
}
