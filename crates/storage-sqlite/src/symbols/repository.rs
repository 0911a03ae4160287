use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use super::model::{NewSymbolMappingDB, SymbolMappingDB};
use crate::db::get_connection;
use crate::errors::StorageError;
use crate::schema::symbol_mappings::dsl as symbol_mappings_dsl;
use coinwatch_core::symbols::{NewSymbolMapping, SymbolMapping, SymbolStore};
use coinwatch_core::Result;

/// Repository for the symbol mapping table.
pub struct SymbolRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl SymbolRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

impl SymbolStore for SymbolRepository {
    fn find_by_symbol(&self, symbol: &str) -> Result<Option<SymbolMapping>> {
        let mut conn = get_connection(&self.pool)?;

        let result = symbol_mappings_dsl::symbol_mappings
            .filter(symbol_mappings_dsl::symbol.eq(symbol))
            .select(SymbolMappingDB::as_select())
            .first::<SymbolMappingDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        Ok(result.map(SymbolMapping::from))
    }

    /// Atomic get-or-create on the symbol's UNIQUE constraint.
    ///
    /// `INSERT OR IGNORE` turns a losing race into a no-op, so the re-read
    /// afterwards returns whichever row won. The first-seen name wins
    /// because the ignore path never updates.
    fn get_or_insert(&self, new: &NewSymbolMapping) -> Result<SymbolMapping> {
        let mut conn = get_connection(&self.pool)?;

        let row = NewSymbolMappingDB::from(new);
        diesel::insert_or_ignore_into(symbol_mappings_dsl::symbol_mappings)
            .values(&row)
            .execute(&mut conn)
            .map_err(StorageError::from)?;

        let result = symbol_mappings_dsl::symbol_mappings
            .filter(symbol_mappings_dsl::symbol.eq(&new.symbol))
            .select(SymbolMappingDB::as_select())
            .first::<SymbolMappingDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(result.into())
    }

    fn list(&self) -> Result<Vec<SymbolMapping>> {
        let mut conn = get_connection(&self.pool)?;

        let results = symbol_mappings_dsl::symbol_mappings
            .order(symbol_mappings_dsl::id.asc())
            .select(SymbolMappingDB::as_select())
            .load::<SymbolMappingDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(results.into_iter().map(SymbolMapping::from).collect())
    }
}
