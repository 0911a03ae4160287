use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use coinwatch_core::candles::CandleCollector;
use coinwatch_core::snapshots::SnapshotCollector;
use coinwatch_core::symbols::SymbolRegistry;
use coinwatch_market_data::{BinanceProvider, CoinCapProvider};
use coinwatch_storage_sqlite::candles::CandleRepository;
use coinwatch_storage_sqlite::db;
use coinwatch_storage_sqlite::snapshots::SnapshotRepository;
use coinwatch_storage_sqlite::symbols::SymbolRepository;

/// Everything the scheduler drives. Owns the collectors, which in turn own
/// the shared pool and HTTP clients; dropping the state releases them.
pub struct AppState {
    pub snapshot_collector: SnapshotCollector,
    pub candle_collector: CandleCollector,
}

pub fn init_tracing() {
    let log_format = std::env::var("CW_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let db_path = db::init(&config.data_dir)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;

    let symbol_repo = Arc::new(SymbolRepository::new(pool.clone()));
    let snapshot_repo = Arc::new(SnapshotRepository::new(pool.clone()));
    let candle_repo = Arc::new(CandleRepository::new(pool));

    let registry = Arc::new(SymbolRegistry::new(symbol_repo.clone()));
    let listing_provider = Arc::new(CoinCapProvider::new(config.listing_base_url.clone()));
    let candle_provider = Arc::new(BinanceProvider::new(config.candle_base_url.clone()));

    let snapshot_collector = SnapshotCollector::new(listing_provider, registry, snapshot_repo);
    let candle_collector = CandleCollector::new(candle_provider, symbol_repo, candle_repo);

    Ok(AppState {
        snapshot_collector,
        candle_collector,
    })
}
