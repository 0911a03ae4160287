//! Provider trait definitions.
//!
//! The collectors in `coinwatch-core` depend on these traits, never on a
//! concrete client, so tests can substitute in-process fakes.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{ListedAsset, ProviderCandle};

/// Source of the full current asset listing.
#[async_trait]
pub trait AssetListingProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Fetch the complete asset listing in one call.
    ///
    /// A provider-level failure (unreachable host, non-2xx status, malformed
    /// top-level payload) is returned as a [`MarketDataError`]; entries whose
    /// numeric fields later fail to parse are the caller's concern.
    async fn fetch_listing(&self) -> Result<Vec<ListedAsset>, MarketDataError>;
}

/// Source of recent OHLC candles for a single trading pair.
#[async_trait]
pub trait CandleProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Fetch the most recent `limit` candles at `interval` granularity for
    /// `pair` (symbol plus quote-currency suffix, e.g. "BTCUSDT").
    ///
    /// Candles are returned oldest first. Malformed rows inside an otherwise
    /// valid payload are skipped, not surfaced as errors.
    async fn fetch_recent_candles(
        &self,
        pair: &str,
        interval: &str,
        limit: u32,
    ) -> Result<Vec<ProviderCandle>, MarketDataError>;
}
