use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use super::model::{NewSnapshotDB, SnapshotDB};
use crate::db::get_connection;
use crate::errors::StorageError;
use crate::schema::snapshots::dsl as snapshots_dsl;
use coinwatch_core::snapshots::{NewSnapshot, Snapshot, SnapshotStore};
use coinwatch_core::Result;

/// Repository for the snapshot time series.
pub struct SnapshotRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl SnapshotRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// All snapshots for one symbol, oldest first.
    pub fn list_for_symbol(&self, symbol_id: i32) -> Result<Vec<Snapshot>> {
        let mut conn = get_connection(&self.pool)?;

        let results = snapshots_dsl::snapshots
            .filter(snapshots_dsl::symbol_id.eq(symbol_id))
            .order(snapshots_dsl::collected_at.asc())
            .select(SnapshotDB::as_select())
            .load::<SnapshotDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(results.into_iter().map(Snapshot::from).collect())
    }
}

impl SnapshotStore for SnapshotRepository {
    fn insert(&self, snapshot: &NewSnapshot) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;

        diesel::insert_into(snapshots_dsl::snapshots)
            .values(&NewSnapshotDB::from(snapshot))
            .execute(&mut conn)
            .map_err(StorageError::from)?;

        Ok(())
    }
}
