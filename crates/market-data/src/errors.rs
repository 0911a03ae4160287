//! Error types for provider operations.

use thiserror::Error;

/// Errors that can occur while talking to a market data provider.
///
/// All variants are cycle-scoped: they abort the collector run that hit
/// them, never the process. Record-scoped decode problems (a single listing
/// entry or kline row that does not parse) are handled by skipping the
/// record, not by returning one of these.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The HTTP request itself failed (DNS, connect, timeout, TLS).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered with a non-success status code.
    #[error("Provider {provider} returned status {status}")]
    Status {
        /// The provider that returned the status
        provider: &'static str,
        /// The HTTP status code
        status: u16,
    },

    /// The top-level payload did not have the expected shape.
    #[error("Malformed payload from {provider}: {message}")]
    MalformedPayload {
        /// The provider whose payload failed to decode
        provider: &'static str,
        /// What was wrong with it
        message: String,
    },
}
