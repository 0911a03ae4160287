//! Coinwatch market data crate.
//!
//! Provider-facing half of the ingestion pipeline: HTTP clients for the two
//! upstream endpoints and the error taxonomy for everything that can go
//! wrong between here and the network.
//!
//! # Overview
//!
//! Two kinds of sources are supported:
//! - an asset listing endpoint returning the full current universe of traded
//!   assets with spot price and 24h volume;
//! - a candle endpoint returning a small window of recent fine-grained OHLC
//!   candles for one trading pair.
//!
//! Both are exposed behind traits ([`AssetListingProvider`],
//! [`CandleProvider`]) so the collectors in `coinwatch-core` can be exercised
//! against in-process fakes.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{ListedAsset, ProviderCandle};
pub use provider::binance::BinanceProvider;
pub use provider::coincap::CoinCapProvider;
pub use provider::{AssetListingProvider, CandleProvider};
