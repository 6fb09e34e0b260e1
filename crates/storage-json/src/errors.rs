//! Storage-specific error types for the JSON document store.
//!
//! This module provides error types that wrap filesystem and serde errors
//! and convert them to the storage-agnostic error types defined in
//! `streakfolio_core`.

use streakfolio_core::errors::{Error, StoreError};
use thiserror::Error;

/// Storage-specific errors that wrap I/O and serde types.
///
/// These errors are internal to the storage layer and are converted to
/// `streakfolio_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Store lock poisoned: {0}")]
    Poisoned(String),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Io(e) => Error::Store(StoreError::Io(e.to_string())),
            StorageError::Json(e) => Error::Store(StoreError::Corrupted(e.to_string())),
            StorageError::NotFound(e) => Error::Store(StoreError::NotFound(e)),
            StorageError::Poisoned(e) => Error::Store(StoreError::Internal(e)),
        }
    }
}

/// Extension trait for easily converting storage Results to core Results.
///
/// This provides a `.into_core()` method which handles the conversion
/// through `StorageError`.
pub trait IntoCore<T> {
    fn into_core(self) -> streakfolio_core::Result<T>;
}

impl<T> IntoCore<T> for std::result::Result<T, StorageError> {
    fn into_core(self) -> streakfolio_core::Result<T> {
        self.map_err(Error::from)
    }
}

impl<T> IntoCore<T> for std::result::Result<T, serde_json::Error> {
    fn into_core(self) -> streakfolio_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}

impl<T> IntoCore<T> for std::result::Result<T, std::io::Error> {
    fn into_core(self) -> streakfolio_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}
