//! Read-through snapshot cache for listing queries.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::backend::CacheBackend;

/// Caches whole listing snapshots under collection-name keys.
///
/// The policy is read-through with delete-on-write: a miss is filled by
/// the caller from the persistence layer, and any mutation of the
/// underlying collection calls [`ListingCache::invalidate`] instead of
/// patching the snapshot. Snapshots are serde_json.
#[derive(Clone)]
pub struct ListingCache {
    backend: CacheBackend,
    ttl: Duration,
}

impl ListingCache {
    /// Creates a listing cache over `backend` with one TTL for every
    /// snapshot.
    #[must_use]
    pub fn new(backend: CacheBackend, ttl: Duration) -> Self {
        Self { backend, ttl }
    }

    /// Returns the cached snapshot for `key`, or `None` on miss.
    ///
    /// A snapshot that no longer deserializes is evicted and treated as
    /// a miss, so a schema change cannot wedge the cache until TTL.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let data = self.backend.get(key).await?;
        match serde_json::from_slice(&data) {
            Ok(value) => {
                tracing::debug!(key = %key, "listing cache hit");
                Some(value)
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "evicting undecodable cache snapshot");
                self.backend.delete(key).await;
                None
            }
        }
    }

    /// Stores a fresh snapshot for `key`.
    ///
    /// Call this only after a successful persistence read; a failed
    /// serialization skips caching rather than failing the request.
    pub async fn put<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_vec(value) {
            Ok(data) => {
                self.backend.set(key, data, self.ttl).await;
                tracing::debug!(key = %key, ttl_secs = self.ttl.as_secs(), "listing cache filled");
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to serialize listing snapshot");
            }
        }
    }

    /// Deletes the snapshot for `key` after the underlying collection
    /// changed. Idempotent; an absent key is a no-op.
    pub async fn invalidate(&self, key: &str) {
        self.backend.delete(key).await;
        tracing::debug!(key = %key, "listing cache invalidated");
    }

    /// Raw bytes accessor used by tests and diagnostics.
    pub async fn raw(&self, key: &str) -> Option<Arc<Vec<u8>>> {
        self.backend.get(key).await
    }
}
