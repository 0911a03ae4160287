//! Asset snapshots: the append-only price/volume time series.

mod collector;
mod model;
mod store;

pub use collector::SnapshotCollector;
pub use model::{NewSnapshot, Snapshot};
pub use store::SnapshotStore;
