//! # bibliograph-cache
//!
//! Listing cache for the Bibliograph catalog.
//!
//! ## Architecture
//!
//! - [`CacheBackend`] — raw byte cache with TTL, either in-process
//!   (`DashMap`) or Redis. Single-instance deployments use the memory
//!   mode; multi-instance deployments point at a shared Redis.
//! - [`ListingCache`] — read-through snapshot cache over a backend:
//!   serde_json snapshots of whole listings, deleted (never patched)
//!   when the underlying collection changes.
//!
//! ## Graceful degradation
//!
//! The cache is an optimization, never a source of truth. No operation
//! here returns an error to the caller: a Redis outage turns every read
//! into a miss and every write into a logged no-op, so requests fall
//! through to the persistence layer and keep working.

mod backend;
mod listing;

pub use backend::{CacheBackend, CachedEntry};
pub use listing::ListingCache;
