//! Core error types for the ingestion pipeline.
//!
//! This module defines database-agnostic error types. Storage-specific
//! errors (from Diesel, SQLite, etc.) are converted to these types by the
//! storage layer.

use chrono::ParseError as ChronoParseError;
use std::num::ParseFloatError;
use thiserror::Error;

use coinwatch_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the ingestion pipeline.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Database-agnostic error type for storage operations.
///
/// Uses `String` for all error details so the storage layer can convert
/// backend-specific errors (Diesel, r2d2) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for record-level data parsing.
///
/// These are record-scoped: a collector logs them and moves on to the next
/// record rather than aborting its run.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse number: {0}")]
    NumberParse(#[from] ParseFloatError),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
