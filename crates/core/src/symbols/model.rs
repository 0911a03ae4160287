//! Symbol mapping domain models.

use serde::{Deserialize, Serialize};

/// One row of the symbol->internal-id mapping.
///
/// Created the first time a symbol is seen, never updated, never deleted.
/// `id` is the stable identifier every downstream table references; `symbol`
/// is unique and case-sensitive as the provider reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolMapping {
    pub id: i32,
    pub symbol: String,
    /// Display name as first seen. Later name changes upstream are ignored.
    pub name: String,
}

/// Payload for creating a mapping row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSymbolMapping {
    pub symbol: String,
    pub name: String,
}
