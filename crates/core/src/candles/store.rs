//! Candle storage trait.

use super::model::NewCandle;
use crate::errors::Result;

/// Storage interface for persisted candles.
///
/// The conditional insert is the idempotence contract: implementations must
/// decide presence and insert atomically on the
/// `(symbol_id, timeframe_start)` dedup key, so replaying an unchanged
/// provider response never creates duplicate rows.
pub trait CandleStore: Send + Sync {
    /// Insert the candle unless a row with the same
    /// `(symbol_id, timeframe_start)` already exists.
    ///
    /// Returns `true` when a row was written, `false` when the candle was
    /// already present.
    fn insert_if_new(&self, candle: &NewCandle) -> Result<bool>;
}
