//! Symbol mapping storage trait.

use super::model::{NewSymbolMapping, SymbolMapping};
use crate::errors::Result;

/// Storage interface for the symbol mapping table.
///
/// Implementations must make `get_or_insert` atomic with respect to the
/// symbol's uniqueness constraint: two concurrent calls for the same unseen
/// symbol must both return the single row that ends up persisted, never a
/// duplicate and never a constraint error.
pub trait SymbolStore: Send + Sync {
    /// Look up a mapping by its exact symbol.
    fn find_by_symbol(&self, symbol: &str) -> Result<Option<SymbolMapping>>;

    /// Return the existing mapping for `new.symbol`, inserting it first if
    /// absent. The first-seen name wins; `new.name` is ignored when the row
    /// already exists.
    fn get_or_insert(&self, new: &NewSymbolMapping) -> Result<SymbolMapping>;

    /// List every known mapping.
    fn list(&self) -> Result<Vec<SymbolMapping>>;
}
