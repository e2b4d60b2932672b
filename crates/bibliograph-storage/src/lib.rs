//! # bibliograph-storage
//!
//! Persistence gateway abstraction for the Bibliograph catalog.
//!
//! This crate defines the trait and types every storage backend must
//! implement. It does not contain an implementation; those live in
//! sibling crates (e.g. `bibliograph-db-memory`).
//!
//! ## Overview
//!
//! The main trait is [`CatalogStorage`], a typed CRUD contract over the
//! three catalog entities:
//!
//! - authors: create, find, list
//! - books: create, find, list (author joined), list by author, delete
//! - users: create, find, list, delete
//!
//! Find operations return `Option` — absence is a normal outcome, not an
//! error. Delete operations return `bool` — `false` means nothing was
//! there to delete.
//!
//! ## Example
//!
//! ```ignore
//! use bibliograph_storage::{CatalogStorage, StorageError};
//!
//! async fn shelf_size(storage: &dyn CatalogStorage) -> Result<usize, StorageError> {
//!     Ok(storage.list_books().await?.len())
//! }
//! ```

mod error;
mod traits;
mod types;

pub use error::StorageError;
pub use traits::CatalogStorage;
pub use types::{NewAuthor, NewBook, NewUser};

/// Type alias for a storage result.
pub type StorageResult<T> = Result<T, StorageError>;

/// Type alias for a shared storage trait object.
pub type DynStorage = std::sync::Arc<dyn CatalogStorage>;
