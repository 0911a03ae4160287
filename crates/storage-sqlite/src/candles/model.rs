//! Database models for persisted candles.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use coinwatch_core::candles::{Candle, NewCandle};

/// Database model for a candle row. `timeframe_start` is stored as RFC 3339
/// text; together with `symbol_id` it is covered by a unique index.
#[derive(Queryable, Identifiable, Selectable, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[diesel(table_name = crate::schema::candles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct CandleDB {
    pub id: i32,
    pub symbol_id: i32,
    pub symbol: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: Option<f64>,
    pub timeframe_start: String,
}

/// Insert payload; the id is assigned by SQLite.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::candles)]
pub struct NewCandleDB {
    pub symbol_id: i32,
    pub symbol: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: Option<f64>,
    pub timeframe_start: String,
}

fn parse_datetime(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

impl From<CandleDB> for Candle {
    fn from(db: CandleDB) -> Self {
        Candle {
            id: db.id,
            symbol_id: db.symbol_id,
            symbol: db.symbol,
            open: db.open,
            high: db.high,
            low: db.low,
            close: db.close,
            volume: db.volume,
            timeframe_start: parse_datetime(&db.timeframe_start),
        }
    }
}

impl From<&NewCandle> for NewCandleDB {
    fn from(new: &NewCandle) -> Self {
        NewCandleDB {
            symbol_id: new.symbol_id,
            symbol: new.symbol.clone(),
            open: new.open,
            high: new.high,
            low: new.low,
            close: new.close,
            volume: new.volume,
            timeframe_start: new.timeframe_start.to_rfc3339(),
        }
    }
}
