//! Symbol registry service.

use log::debug;
use std::sync::Arc;

use super::model::NewSymbolMapping;
use super::store::SymbolStore;
use crate::errors::Result;

/// The only source of truth for internal symbol identifiers.
///
/// Downstream components hold the ids this registry hands out; none of them
/// ever create or mutate mapping rows themselves. The registry keeps no
/// in-memory cache: the mapping row is immutable once written, so a storage
/// read is always authoritative.
pub struct SymbolRegistry {
    store: Arc<dyn SymbolStore>,
}

impl SymbolRegistry {
    pub fn new(store: Arc<dyn SymbolStore>) -> Self {
        Self { store }
    }

    /// Resolve a symbol to its internal id, creating the mapping on first
    /// sight.
    ///
    /// `display_name` is only used when the symbol has never been seen;
    /// subsequent resolutions ignore it even if the provider reports a
    /// changed name.
    pub fn resolve(&self, symbol: &str, display_name: &str) -> Result<i32> {
        if let Some(existing) = self.store.find_by_symbol(symbol)? {
            return Ok(existing.id);
        }

        let mapping = self.store.get_or_insert(&NewSymbolMapping {
            symbol: symbol.to_string(),
            name: display_name.to_string(),
        })?;
        debug!("registered new symbol {} -> id {}", symbol, mapping.id);
        Ok(mapping.id)
    }
}
