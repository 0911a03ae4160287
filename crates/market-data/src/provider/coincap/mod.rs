//! CoinCap-style asset listing provider.
//!
//! Fetches the full current asset universe from a single `GET {base}/assets`
//! call. The payload is a JSON object with a top-level `data` array; each
//! entry carries the symbol, display name and decimal-string price/volume
//! fields.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::ListedAsset;
use crate::provider::AssetListingProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "COINCAP";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Top-level response of the listing endpoint.
#[derive(Debug, Deserialize)]
struct AssetListingResponse {
    data: Vec<ListedAsset>,
}

/// Asset listing provider backed by a CoinCap-compatible HTTP API.
pub struct CoinCapProvider {
    client: Client,
    base_url: String,
}

impl CoinCapProvider {
    /// Create a new provider against the given base URL
    /// (e.g. `https://api.coincap.io/v2`).
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
impl AssetListingProvider for CoinCapProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_listing(&self) -> Result<Vec<ListedAsset>, MarketDataError> {
        let url = format!("{}/assets", self.base_url.trim_end_matches('/'));

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::Status {
                provider: PROVIDER_ID,
                status: status.as_u16(),
            });
        }

        let listing: AssetListingResponse =
            response
                .json()
                .await
                .map_err(|e| MarketDataError::MalformedPayload {
                    provider: PROVIDER_ID,
                    message: e.to_string(),
                })?;

        Ok(listing.data)
    }
}
