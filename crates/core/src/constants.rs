//! Ingestion constants.

/// Quote currency appended to a symbol to build the provider trading pair
/// (e.g. "BTC" -> "BTCUSDT").
pub const QUOTE_SUFFIX: &str = "USDT";

/// Candle granularity requested from the candle endpoint.
pub const CANDLE_INTERVAL: &str = "1m";

/// Size of the recent-candle window requested per symbol per cycle.
/// Small on purpose: with a short polling interval, consecutive windows
/// overlap and the dedup check drops the already-seen candles.
pub const CANDLE_LIMIT: u32 = 10;

/// Default seconds between ingestion cycles when not configured.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;
