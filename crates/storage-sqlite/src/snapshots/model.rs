//! Database models for the snapshot time series.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use coinwatch_core::snapshots::{NewSnapshot, Snapshot};

/// Database model for a snapshot row. Timestamps are stored as RFC 3339
/// text.
#[derive(Queryable, Identifiable, Selectable, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[diesel(table_name = crate::schema::snapshots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct SnapshotDB {
    pub id: i32,
    pub symbol_id: i32,
    pub name: String,
    pub symbol: String,
    pub price_usd: f64,
    pub volume_usd: f64,
    pub collected_at: String,
}

/// Insert payload; the id is assigned by SQLite.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::snapshots)]
pub struct NewSnapshotDB {
    pub symbol_id: i32,
    pub name: String,
    pub symbol: String,
    pub price_usd: f64,
    pub volume_usd: f64,
    pub collected_at: String,
}

fn parse_datetime(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

impl From<SnapshotDB> for Snapshot {
    fn from(db: SnapshotDB) -> Self {
        Snapshot {
            id: db.id,
            symbol_id: db.symbol_id,
            name: db.name,
            symbol: db.symbol,
            price_usd: db.price_usd,
            volume_usd: db.volume_usd,
            collected_at: parse_datetime(&db.collected_at),
        }
    }
}

impl From<&NewSnapshot> for NewSnapshotDB {
    fn from(new: &NewSnapshot) -> Self {
        NewSnapshotDB {
            symbol_id: new.symbol_id,
            name: new.name.clone(),
            symbol: new.symbol.clone(),
            price_usd: new.price_usd,
            volume_usd: new.volume_usd,
            collected_at: new.collected_at.to_rfc3339(),
        }
    }
}
