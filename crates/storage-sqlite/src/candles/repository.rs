use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use super::model::{CandleDB, NewCandleDB};
use crate::db::get_connection;
use crate::errors::StorageError;
use crate::schema::candles::dsl as candles_dsl;
use coinwatch_core::candles::{Candle, CandleStore, NewCandle};
use coinwatch_core::Result;

/// Repository for persisted candles.
pub struct CandleRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl CandleRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// All candles for one symbol, oldest timeframe first.
    pub fn list_for_symbol(&self, symbol_id: i32) -> Result<Vec<Candle>> {
        let mut conn = get_connection(&self.pool)?;

        let results = candles_dsl::candles
            .filter(candles_dsl::symbol_id.eq(symbol_id))
            .order(candles_dsl::timeframe_start.asc())
            .select(CandleDB::as_select())
            .load::<CandleDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(results.into_iter().map(Candle::from).collect())
    }
}

impl CandleStore for CandleRepository {
    /// Conditional insert on the `(symbol_id, timeframe_start)` unique
    /// index. `INSERT OR IGNORE` reports zero affected rows when the candle
    /// is already present, which is exactly the dedup signal the collector
    /// needs.
    fn insert_if_new(&self, candle: &NewCandle) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;

        let inserted = diesel::insert_or_ignore_into(candles_dsl::candles)
            .values(&NewCandleDB::from(candle))
            .execute(&mut conn)
            .map_err(StorageError::from)?;

        Ok(inserted > 0)
    }
}
