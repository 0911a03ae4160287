//! Candle collection: per-symbol fetch, dedup, and fault isolation.

use log::{debug, warn};
use std::sync::Arc;

use coinwatch_market_data::CandleProvider;

use super::model::NewCandle;
use super::store::CandleStore;
use crate::constants::{CANDLE_INTERVAL, CANDLE_LIMIT, QUOTE_SUFFIX};
use crate::errors::Result;
use crate::symbols::SymbolStore;

/// Result of candle collection for a single symbol.
#[derive(Debug, Clone)]
pub struct SymbolCandleResult {
    /// The symbol that was collected.
    pub symbol: String,
    /// Number of candles actually written (already-present ones excluded).
    pub inserted: usize,
    /// Outcome of the collection.
    pub status: CollectStatus,
    /// Error message when the provider call failed.
    pub error: Option<String>,
}

/// Outcome of collecting one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectStatus {
    /// The provider responded and every returned candle was processed.
    Success,
    /// The provider call failed; no candles were processed for this symbol.
    Failed,
}

/// Aggregate result of one candle collection run.
#[derive(Debug, Clone, Default)]
pub struct CandleRunResult {
    /// Number of symbols collected successfully.
    pub succeeded: usize,
    /// Number of symbols whose provider call failed.
    pub failed: usize,
    /// Total candles written across all symbols.
    pub candles_inserted: usize,
    /// Per-symbol outcomes, in collection order.
    pub outcomes: Vec<SymbolCandleResult>,
}

impl CandleRunResult {
    /// Check whether every symbol collected cleanly.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// One-line summary for the cycle log.
    pub fn summary(&self) -> String {
        if self.is_success() {
            format!(
                "inserted {} candles across {} symbols",
                self.candles_inserted, self.succeeded
            )
        } else {
            format!(
                "inserted {} candles across {} symbols ({} failed)",
                self.candles_inserted, self.succeeded, self.failed
            )
        }
    }

    fn add_result(&mut self, result: SymbolCandleResult) {
        match result.status {
            CollectStatus::Success => {
                self.succeeded += 1;
                self.candles_inserted += result.inserted;
            }
            CollectStatus::Failed => self.failed += 1,
        }
        self.outcomes.push(result);
    }
}

/// Fetches recent candles for every mapped symbol and persists the ones not
/// seen before.
///
/// The symbol list is read fresh on every run, so symbols discovered by the
/// snapshot step become eligible in the same cycle. A provider error for one
/// symbol (unsupported pair, rate limit, network failure) is recorded and
/// the collector proceeds to the next symbol; it never aborts the run.
pub struct CandleCollector {
    provider: Arc<dyn CandleProvider>,
    symbols: Arc<dyn SymbolStore>,
    store: Arc<dyn CandleStore>,
}

impl CandleCollector {
    pub fn new(
        provider: Arc<dyn CandleProvider>,
        symbols: Arc<dyn SymbolStore>,
        store: Arc<dyn CandleStore>,
    ) -> Self {
        Self {
            provider,
            symbols,
            store,
        }
    }

    /// Run one candle cycle over every known symbol.
    ///
    /// Only listing the symbols can fail the run as a whole; everything past
    /// that is symbol-scoped or operation-scoped.
    pub async fn run(&self) -> Result<CandleRunResult> {
        let mappings = self.symbols.list()?;
        let mut result = CandleRunResult::default();

        for mapping in mappings {
            let pair = format!("{}{}", mapping.symbol, QUOTE_SUFFIX);

            let candles = match self
                .provider
                .fetch_recent_candles(&pair, CANDLE_INTERVAL, CANDLE_LIMIT)
                .await
            {
                Ok(candles) => candles,
                Err(e) => {
                    warn!("candle fetch failed for {}: {}", pair, e);
                    result.add_result(SymbolCandleResult {
                        symbol: mapping.symbol.clone(),
                        inserted: 0,
                        status: CollectStatus::Failed,
                        error: Some(e.to_string()),
                    });
                    continue;
                }
            };

            let mut inserted = 0;
            for candle in &candles {
                let row = NewCandle {
                    symbol_id: mapping.id,
                    symbol: mapping.symbol.clone(),
                    open: candle.open,
                    high: candle.high,
                    low: candle.low,
                    close: candle.close,
                    volume: candle.volume,
                    timeframe_start: candle.open_time,
                };

                match self.store.insert_if_new(&row) {
                    Ok(true) => inserted += 1,
                    Ok(false) => {}
                    Err(e) => warn!(
                        "failed to insert candle {} @ {}: {}",
                        mapping.symbol, candle.open_time, e
                    ),
                }
            }

            debug!(
                "collected {}: {} fetched, {} new",
                mapping.symbol,
                candles.len(),
                inserted
            );
            result.add_result(SymbolCandleResult {
                symbol: mapping.symbol.clone(),
                inserted,
                status: CollectStatus::Success,
                error: None,
            });
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{NewSymbolMapping, SymbolMapping};
    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use coinwatch_market_data::{MarketDataError, ProviderCandle};
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemorySymbolStore {
        rows: Mutex<Vec<SymbolMapping>>,
    }

    impl MemorySymbolStore {
        fn with_symbols(symbols: &[(&str, &str)]) -> Self {
            let rows = symbols
                .iter()
                .enumerate()
                .map(|(i, (symbol, name))| SymbolMapping {
                    id: i as i32 + 1,
                    symbol: symbol.to_string(),
                    name: name.to_string(),
                })
                .collect();
            Self {
                rows: Mutex::new(rows),
            }
        }
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

    /// In-memory candle store enforcing the dedup key like the real schema.
    #[derive(Default)]
    struct MemoryCandleStore {
        rows: Mutex<Vec<NewCandle>>,
    }

    impl CandleStore for MemoryCandleStore {
        fn insert_if_new(&self, candle: &NewCandle) -> Result<bool> {
            let mut rows = self.rows.lock().unwrap();
            let exists = rows.iter().any(|c| {
                c.symbol_id == candle.symbol_id && c.timeframe_start == candle.timeframe_start
            });
            if exists {
                return Ok(false);
            }
            rows.push(candle.clone());
            Ok(true)
        }
    }

    /// Fake provider with canned per-pair responses, reusable across runs.
    #[derive(Default)]
    struct FakeCandleProvider {
        responses: HashMap<String, Vec<ProviderCandle>>,
        failing_pairs: Vec<String>,
    }

    #[async_trait]
    impl CandleProvider for FakeCandleProvider {
        fn id(&self) -> &'static str {
            "FAKE"
        }

        async fn fetch_recent_candles(
            &self,
            pair: &str,
            _interval: &str,
            _limit: u32,
        ) -> std::result::Result<Vec<ProviderCandle>, MarketDataError> {
            if self.failing_pairs.iter().any(|p| p == pair) {
                return Err(MarketDataError::Status {
                    provider: "FAKE",
                    status: 429,
                });
            }
            Ok(self.responses.get(pair).cloned().unwrap_or_default())
        }
    }

    fn minute(offset: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::minutes(offset)
    }

    fn candle_at(start: DateTime<Utc>) -> ProviderCandle {
        ProviderCandle {
            open_time: start,
            open: 29000.0,
            high: 29500.0,
            low: 28500.0,
            close: 29000.0,
            volume: Some(1000.0),
        }
    }

    #[tokio::test]
    async fn test_rerun_with_unchanged_response_inserts_nothing() {
        let mut provider = FakeCandleProvider::default();
        provider.responses.insert(
            "BTCUSDT".to_string(),
            vec![candle_at(minute(0)), candle_at(minute(1))],
        );

        let symbols = Arc::new(MemorySymbolStore::with_symbols(&[("BTC", "Bitcoin")]));
        let store = Arc::new(MemoryCandleStore::default());
        let collector = CandleCollector::new(Arc::new(provider), symbols, store.clone());

        let first = collector.run().await.unwrap();
        assert_eq!(first.candles_inserted, 2);

        let second = collector.run().await.unwrap();
        assert_eq!(second.candles_inserted, 0);
        assert_eq!(second.succeeded, 1);
        assert_eq!(store.rows.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_scenario_single_btc_kline() {
        let mut provider = FakeCandleProvider::default();
        provider
            .responses
            .insert("BTCUSDT".to_string(), vec![candle_at(minute(0))]);

        let symbols = Arc::new(MemorySymbolStore::with_symbols(&[("BTC", "Bitcoin")]));
        let store = Arc::new(MemoryCandleStore::default());
        let collector = CandleCollector::new(Arc::new(provider), symbols, store.clone());

        let result = collector.run().await.unwrap();
        assert_eq!(result.candles_inserted, 1);

        {
            let rows = store.rows.lock().unwrap();
            let row = &rows[0];
            assert_eq!(
                row.timeframe_start,
                Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap()
            );
            assert_eq!(row.open, 29000.0);
            assert_eq!(row.high, 29500.0);
            assert_eq!(row.low, 28500.0);
            assert_eq!(row.close, 29000.0);
            assert_eq!(row.volume, Some(1000.0));
        }

        let rerun = collector.run().await.unwrap();
        assert_eq!(rerun.candles_inserted, 0);
    }

    #[tokio::test]
    async fn test_one_failing_symbol_does_not_block_the_rest() {
        let mut provider = FakeCandleProvider::default();
        provider.failing_pairs.push("AAAUSDT".to_string());
        provider
            .responses
            .insert("BBBUSDT".to_string(), vec![candle_at(minute(0))]);

        let symbols = Arc::new(MemorySymbolStore::with_symbols(&[
            ("AAA", "Coin A"),
            ("BBB", "Coin B"),
        ]));
        let store = Arc::new(MemoryCandleStore::default());
        let collector = CandleCollector::new(Arc::new(provider), symbols, store.clone());

        let result = collector.run().await.unwrap();

        assert_eq!(result.failed, 1);
        assert_eq!(result.succeeded, 1);
        assert_eq!(result.candles_inserted, 1);
        assert!(!result.is_success());

        let failed = result
            .outcomes
            .iter()
            .find(|o| o.symbol == "AAA")
            .unwrap();
        assert_eq!(failed.status, CollectStatus::Failed);
        assert!(failed.error.is_some());

        assert_eq!(store.rows.lock().unwrap()[0].symbol, "BBB");
    }

    #[tokio::test]
    async fn test_symbol_list_is_read_fresh_each_run() {
        let mut provider = FakeCandleProvider::default();
        provider
            .responses
            .insert("BTCUSDT".to_string(), vec![candle_at(minute(0))]);
        provider
            .responses
            .insert("ETHUSDT".to_string(), vec![candle_at(minute(0))]);

        let symbols = Arc::new(MemorySymbolStore::with_symbols(&[("BTC", "Bitcoin")]));
        let store = Arc::new(MemoryCandleStore::default());
        let collector =
            CandleCollector::new(Arc::new(provider), symbols.clone(), store.clone());

        let first = collector.run().await.unwrap();
        assert_eq!(first.outcomes.len(), 1);

        // A snapshot cycle discovers a new symbol between candle runs.
        symbols
            .get_or_insert(&NewSymbolMapping {
                symbol: "ETH".to_string(),
                name: "Ethereum".to_string(),
            })
            .unwrap();

        let second = collector.run().await.unwrap();
        assert_eq!(second.outcomes.len(), 2);
        assert_eq!(second.candles_inserted, 1);
    }

    #[tokio::test]
    async fn test_no_symbols_is_an_empty_success() {
        let provider = FakeCandleProvider::default();
        let symbols = Arc::new(MemorySymbolStore::default());
        let store = Arc::new(MemoryCandleStore::default());
        let collector = CandleCollector::new(Arc::new(provider), symbols, store);

        let result = collector.run().await.unwrap();

        assert!(result.is_success());
        assert!(result.outcomes.is_empty());
        assert_eq!(result.candles_inserted, 0);
    }
}
