//! SQLite storage implementation for coinwatch.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the store traits defined in `coinwatch-core`
//! and contains:
//! - Database connection pooling and management
//! - Embedded, idempotent migrations
//! - Repository implementations for the three ingestion tables
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. `coinwatch-core` is database-agnostic and works with traits.
//!
//! ```text
//!        core (domain)
//!             │
//!             ▼
//!   storage-sqlite (this crate)
//!             │
//!             ▼
//!         SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod candles;
pub mod snapshots;
pub mod symbols;

// Re-export database utilities
pub use db::{create_pool, get_connection, get_db_path, init, run_migrations, DbConnection, DbPool};

// Re-export storage errors and conversion helpers
pub use errors::StorageError;

// Re-export from coinwatch-core for convenience
pub use coinwatch_core::errors::{DatabaseError, Error, Result};
