//! Database models for the symbol mapping table.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use coinwatch_core::symbols::{NewSymbolMapping, SymbolMapping};

/// Database model for a symbol mapping row.
#[derive(
    Queryable, Identifiable, Selectable, Debug, Clone, Serialize, Deserialize, PartialEq, Eq,
)]
#[diesel(table_name = crate::schema::symbol_mappings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct SymbolMappingDB {
    pub id: i32,
    pub symbol: String,
    pub name: String,
}

/// Insert payload; the id is assigned by SQLite.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::symbol_mappings)]
pub struct NewSymbolMappingDB {
    pub symbol: String,
    pub name: String,
}

impl From<SymbolMappingDB> for SymbolMapping {
    fn from(db: SymbolMappingDB) -> Self {
        SymbolMapping {
            id: db.id,
            symbol: db.symbol,
            name: db.name,
        }
    }
}

impl From<&NewSymbolMapping> for NewSymbolMappingDB {
    fn from(new: &NewSymbolMapping) -> Self {
        NewSymbolMappingDB {
            symbol: new.symbol.clone(),
            name: new.name.clone(),
        }
    }
}
