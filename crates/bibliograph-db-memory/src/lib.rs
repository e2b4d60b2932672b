//! # bibliograph-db-memory
//!
//! In-memory catalog storage backend for Bibliograph.
//!
//! This crate provides an in-memory implementation of the
//! [`CatalogStorage`] trait from `bibliograph-storage`, using concurrent
//! hash maps. It backs single-process deployments and the test suites.
//!
//! # Example
//!
//! ```ignore
//! use bibliograph_db_memory::InMemoryCatalog;
//! use bibliograph_storage::{CatalogStorage, NewAuthor};
//!
//! let storage = InMemoryCatalog::new();
//! let author = storage.create_author(NewAuthor::new("Iain Banks")).await?;
//! ```

mod storage;

pub use bibliograph_storage::{CatalogStorage, StorageError};
pub use storage::InMemoryCatalog;

/// Creates a new shareable in-memory storage instance.
pub fn create_memory_storage() -> bibliograph_storage::DynStorage {
    std::sync::Arc::new(InMemoryCatalog::new())
}
