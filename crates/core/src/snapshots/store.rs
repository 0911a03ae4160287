//! Snapshot storage trait.

use super::model::NewSnapshot;
use crate::errors::Result;

/// Storage interface for the snapshot time series.
///
/// Append-only by design; there is deliberately no update or delete.
pub trait SnapshotStore: Send + Sync {
    /// Append one snapshot row.
    fn insert(&self, snapshot: &NewSnapshot) -> Result<()>;
}
