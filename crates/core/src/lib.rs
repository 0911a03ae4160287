//! Coinwatch core crate.
//!
//! Domain half of the ingestion pipeline: models, storage traits and the
//! three components that do the actual work each cycle.
//!
//! # Architecture
//!
//! ```text
//! SnapshotCollector ──► AssetListingProvider (market-data crate)
//!        │        └───► SymbolRegistry ──► SymbolStore
//!        └────────────► SnapshotStore
//!
//! CandleCollector ────► SymbolStore (fresh symbol list each cycle)
//!        │        └───► CandleProvider (market-data crate)
//!        └────────────► CandleStore
//! ```
//!
//! This crate is database-agnostic: the store traits defined here are
//! implemented by `coinwatch-storage-sqlite`, and nothing in this crate
//! knows about Diesel.

pub mod candles;
pub mod constants;
pub mod errors;
pub mod snapshots;
pub mod symbols;

pub use errors::{DatabaseError, Error, Result, ValidationError};
