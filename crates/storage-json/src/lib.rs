//! JSON file storage implementation for Streakfolio.
//!
//! This crate persists tracker state as JSON documents in a local store
//! directory, one document per key, the way a browser's key-value storage
//! holds one value per key. It implements the repository traits defined in
//! `streakfolio-core` and contains:
//! - The document store with atomic whole-value replacement
//! - Repository implementations for goals and settings
//! - Storage-specific persisted record types
//!
//! # Architecture
//!
//! This crate is the only place in the application that touches the
//! filesystem. All other crates are storage-agnostic and work with traits.
//!
//! ```text
//! core (domain)
//!       │
//!       ▼
//! storage-json (this crate)
//!       │
//!       ▼
//!  store directory
//! ```

pub mod errors;
pub mod store;

// Repository implementations
pub mod goals;
pub mod settings;

// Re-export the store and storage errors
pub use errors::{IntoCore, StorageError};
pub use store::JsonStore;

// Re-export from streakfolio-core for convenience
pub use streakfolio_core::errors::{Error, Result, StoreError};
