//! Snapshot collection: one listing fetch per cycle, one row per asset.

use chrono::Utc;
use log::warn;
use std::sync::Arc;

use coinwatch_market_data::{AssetListingProvider, ListedAsset};

use super::model::NewSnapshot;
use super::store::SnapshotStore;
use crate::errors::{Result, ValidationError};
use crate::symbols::SymbolRegistry;

/// Captures the full asset listing into the snapshot table.
///
/// A provider-level failure aborts the whole run with no rows written.
/// Everything below that is isolated per asset: a record that fails to
/// decode, resolve or insert is logged and skipped while the rest of the
/// listing proceeds.
pub struct SnapshotCollector {
    provider: Arc<dyn AssetListingProvider>,
    registry: Arc<SymbolRegistry>,
    store: Arc<dyn SnapshotStore>,
}

impl SnapshotCollector {
    pub fn new(
        provider: Arc<dyn AssetListingProvider>,
        registry: Arc<SymbolRegistry>,
        store: Arc<dyn SnapshotStore>,
    ) -> Self {
        Self {
            provider,
            registry,
            store,
        }
    }

    /// Run one snapshot cycle. Returns the number of assets successfully
    /// inserted.
    ///
    /// Every row written in the same run carries the same `collected_at`,
    /// captured once before the per-asset loop.
    pub async fn run(&self) -> Result<usize> {
        let listing = self.provider.fetch_listing().await?;
        let collected_at = Utc::now();

        let mut inserted = 0;
        for asset in &listing {
            let (price_usd, volume_usd) = match decode_numeric_fields(asset) {
                Ok(parsed) => parsed,
                Err(e) => {
                    warn!("skipping asset {}: {}", asset.symbol, e);
                    continue;
                }
            };

            let symbol_id = match self.registry.resolve(&asset.symbol, &asset.name) {
                Ok(id) => id,
                Err(e) => {
                    warn!("failed to resolve symbol {}: {}", asset.symbol, e);
                    continue;
                }
            };

            let snapshot = NewSnapshot {
                symbol_id,
                name: asset.name.clone(),
                symbol: asset.symbol.clone(),
                price_usd,
                volume_usd,
                collected_at,
            };

            match self.store.insert(&snapshot) {
                Ok(()) => inserted += 1,
                Err(e) => warn!("failed to insert snapshot for {}: {}", asset.symbol, e),
            }
        }

        Ok(inserted)
    }
}

/// Parse the decimal-string price and volume fields of one listing entry.
fn decode_numeric_fields(asset: &ListedAsset) -> std::result::Result<(f64, f64), ValidationError> {
    let price = asset
        .price_usd
        .as_deref()
        .ok_or_else(|| ValidationError::MissingField("priceUsd".to_string()))?
        .parse::<f64>()?;
    let volume = asset
        .volume_usd_24hr
        .as_deref()
        .ok_or_else(|| ValidationError::MissingField("volumeUsd24Hr".to_string()))?
        .parse::<f64>()?;
    Ok((price, volume))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{DatabaseError, Error};
    use crate::symbols::{NewSymbolMapping, SymbolMapping, SymbolStore};
    use async_trait::async_trait;
    use coinwatch_market_data::MarketDataError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemorySymbolStore {
        rows: Mutex<Vec<SymbolMapping>>,
    }

    impl SymbolStore for MemorySymbolStore {
        fn find_by_symbol(&self, symbol: &str) -> Result<Option<SymbolMapping>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|m| m.symbol == symbol)
                .cloned())
        }

        fn get_or_insert(&self, new: &NewSymbolMapping) -> Result<SymbolMapping> {
            let mut rows = self.rows.lock().unwrap();
            if let Some(existing) = rows.iter().find(|m| m.symbol == new.symbol) {
                return Ok(existing.clone());
            }
            let mapping = SymbolMapping {
                id: rows.len() as i32 + 1,
                symbol: new.symbol.clone(),
                name: new.name.clone(),
            };
            rows.push(mapping.clone());
            Ok(mapping)
        }

        fn list(&self) -> Result<Vec<SymbolMapping>> {
            Ok(self.rows.lock().unwrap().clone())
        }
    }

    #[derive(Default)]
    struct MemorySnapshotStore {
        rows: Mutex<Vec<NewSnapshot>>,
        /// Symbols whose inserts should fail, to simulate storage errors.
        fail_for: Vec<String>,
    }

    impl SnapshotStore for MemorySnapshotStore {
        fn insert(&self, snapshot: &NewSnapshot) -> Result<()> {
            if self.fail_for.contains(&snapshot.symbol) {
                return Err(Error::Database(DatabaseError::QueryFailed(
                    "disk I/O error".to_string(),
                )));
            }
            self.rows.lock().unwrap().push(snapshot.clone());
            Ok(())
        }
    }

    struct FakeListingProvider {
        result: Mutex<Option<std::result::Result<Vec<ListedAsset>, MarketDataError>>>,
    }

    impl FakeListingProvider {
        fn returning(assets: Vec<ListedAsset>) -> Self {
            Self {
                result: Mutex::new(Some(Ok(assets))),
            }
        }

        fn failing() -> Self {
            Self {
                result: Mutex::new(Some(Err(MarketDataError::Status {
                    provider: "FAKE",
                    status: 502,
                }))),
            }
        }
    }

    #[async_trait]
    impl AssetListingProvider for FakeListingProvider {
        fn id(&self) -> &'static str {
            "FAKE"
        }

        async fn fetch_listing(&self) -> std::result::Result<Vec<ListedAsset>, MarketDataError> {
            self.result.lock().unwrap().take().expect("single use")
        }
    }

    fn listed(symbol: &str, name: &str, price: Option<&str>, volume: Option<&str>) -> ListedAsset {
        ListedAsset {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price_usd: price.map(String::from),
            volume_usd_24hr: volume.map(String::from),
        }
    }

    fn collector(
        provider: FakeListingProvider,
        snapshot_store: Arc<MemorySnapshotStore>,
    ) -> (SnapshotCollector, Arc<MemorySymbolStore>) {
        let symbol_store = Arc::new(MemorySymbolStore::default());
        let registry = Arc::new(SymbolRegistry::new(symbol_store.clone()));
        (
            SnapshotCollector::new(Arc::new(provider), registry, snapshot_store),
            symbol_store,
        )
    }

    #[tokio::test]
    async fn test_inserts_one_row_per_asset_with_shared_timestamp() {
        let provider = FakeListingProvider::returning(vec![
            listed("BTC", "Bitcoin", Some("60000"), Some("1000000000")),
            listed("ETH", "Ethereum", Some("2500"), Some("900000000")),
        ]);
        let store = Arc::new(MemorySnapshotStore::default());
        let (collector, symbol_store) = collector(provider, store.clone());

        let count = collector.run().await.unwrap();

        assert_eq!(count, 2);
        let rows = store.rows.lock().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].collected_at, rows[1].collected_at);
        assert_eq!(symbol_store.list().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_scenario_btc_listing_row() {
        let provider = FakeListingProvider::returning(vec![listed(
            "BTC",
            "Bitcoin",
            Some("60000"),
            Some("1000000000"),
        )]);
        let store = Arc::new(MemorySnapshotStore::default());
        let (collector, _) = collector(provider, store.clone());

        let count = collector.run().await.unwrap();
        assert_eq!(count, 1);

        let rows = store.rows.lock().unwrap();
        let row = &rows[0];
        assert_eq!(row.symbol, "BTC");
        assert_eq!(row.name, "Bitcoin");
        assert_eq!(row.price_usd, 60000.0);
        assert_eq!(row.volume_usd, 1000000000.0);
    }

    #[tokio::test]
    async fn test_undecodable_asset_is_skipped_not_fatal() {
        let provider = FakeListingProvider::returning(vec![
            listed("BTC", "Bitcoin", Some("60000"), Some("1000000000")),
            listed("BAD", "Badcoin", Some("not-a-number"), Some("1")),
            listed("NEW", "Newcoin", None, None),
            listed("ETH", "Ethereum", Some("2500"), Some("900000000")),
        ]);
        let store = Arc::new(MemorySnapshotStore::default());
        let (collector, symbol_store) = collector(provider, store.clone());

        let count = collector.run().await.unwrap();

        assert_eq!(count, 2);
        // Skipped assets never reach the registry either.
        assert_eq!(symbol_store.list().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_provider_failure_aborts_with_no_rows() {
        let store = Arc::new(MemorySnapshotStore::default());
        let (collector, _) = collector(FakeListingProvider::failing(), store.clone());

        let result = collector.run().await;

        assert!(matches!(result, Err(Error::MarketData(_))));
        assert!(store.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_storage_error_on_one_asset_does_not_stop_the_run() {
        let provider = FakeListingProvider::returning(vec![
            listed("BTC", "Bitcoin", Some("60000"), Some("1000000000")),
            listed("ETH", "Ethereum", Some("2500"), Some("900000000")),
        ]);
        let store = Arc::new(MemorySnapshotStore {
            rows: Mutex::new(Vec::new()),
            fail_for: vec!["BTC".to_string()],
        });
        let (collector, _) = collector(provider, store.clone());

        let count = collector.run().await.unwrap();

        assert_eq!(count, 1);
        assert_eq!(store.rows.lock().unwrap()[0].symbol, "ETH");
    }
}
