//! # Store Errors
//!
//! Error types for store operations.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the requested id
    #[error("Landmark not found")]
    NotFound,

    /// A stored id does not parse as a decimal integer, so the next id
    /// cannot be computed
    #[error("Stored landmark id is not numeric: {0}")]
    NonNumericId(String),

    /// The store lock was poisoned by a panicking writer
    #[error("Store lock poisoned")]
    LockPoisoned,
}
