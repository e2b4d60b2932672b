//! Raw cache backend with expiring entries.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use deadpool_redis::Pool;
use redis::AsyncCommands;

/// A cached value with its expiry bookkeeping.
///
/// The bytes are wrapped in `Arc` so a cache hit hands out a cheap clone
/// of the snapshot instead of copying it.
#[derive(Clone, Debug)]
pub struct CachedEntry {
    pub data: Arc<Vec<u8>>,
    pub cached_at: Instant,
    pub ttl: Duration,
}

impl CachedEntry {
    /// Creates a new entry expiring `ttl` from now.
    #[must_use]
    pub fn new(data: Vec<u8>, ttl: Duration) -> Self {
        Self {
            data: Arc::new(data),
            cached_at: Instant::now(),
            ttl,
        }
    }

    /// Returns `true` once this entry must no longer be served.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.cached_at.elapsed() > self.ttl
    }
}

/// Byte cache with TTL semantics.
///
/// ## Modes
///
/// - **Memory**: in-process `DashMap`, for single-instance deployments
///   and tests. Expiry is enforced on read; expired entries are dropped.
/// - **Redis**: a shared `deadpool-redis` pool; expiry is delegated to
///   Redis via `SETEX`.
///
/// All operations are infallible from the caller's perspective: backend
/// failures are logged at `warn` and surface as a miss (`get`) or a
/// no-op (`set`/`delete`).
#[derive(Clone)]
pub enum CacheBackend {
    Memory(Arc<DashMap<String, CachedEntry>>),
    Redis(Pool),
}

impl CacheBackend {
    /// Creates an in-process cache backend.
    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(Arc::new(DashMap::new()))
    }

    /// Creates a Redis-backed cache backend.
    #[must_use]
    pub fn new_redis(pool: Pool) -> Self {
        Self::Redis(pool)
    }

    /// Looks up a key. Absent, expired and unreachable all read as
    /// `None`.
    pub async fn get(&self, key: &str) -> Option<Arc<Vec<u8>>> {
        match self {
            Self::Memory(map) => {
                if let Some(entry) = map.get(key) {
                    if !entry.is_expired() {
                        return Some(Arc::clone(&entry.data));
                    }
                    drop(entry);
                    map.remove(key);
                }
                None
            }
            Self::Redis(pool) => match pool.get().await {
                Ok(mut conn) => match conn.get::<_, Option<Vec<u8>>>(key).await {
                    Ok(Some(data)) => Some(Arc::new(data)),
                    Ok(None) => None,
                    Err(e) => {
                        tracing::warn!(key = %key, error = %e, "Redis GET failed; treating as miss");
                        None
                    }
                },
                Err(e) => {
                    tracing::warn!(error = %e, "Redis connection unavailable; treating as miss");
                    None
                }
            },
        }
    }

    /// Stores a value under `key`, replacing any existing entry and
    /// scheduling expiry at now + `ttl`.
    pub async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) {
        match self {
            Self::Memory(map) => {
                map.insert(key.to_string(), CachedEntry::new(value, ttl));
            }
            Self::Redis(pool) => {
                // Redis rejects a zero expiry.
                let ttl_secs = ttl.as_secs().max(1);
                match pool.get().await {
                    Ok(mut conn) => {
                        if let Err(e) = conn.set_ex::<_, _, ()>(key, value, ttl_secs).await {
                            tracing::warn!(key = %key, error = %e, "Redis SETEX failed; entry not cached");
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Redis connection unavailable; entry not cached");
                    }
                }
            }
        }
    }

    /// Removes a key. Removing an absent key is a no-op, never an error.
    pub async fn delete(&self, key: &str) {
        match self {
            Self::Memory(map) => {
                map.remove(key);
            }
            Self::Redis(pool) => match pool.get().await {
                Ok(mut conn) => {
                    if let Err(e) = conn.del::<_, ()>(key).await {
                        tracing::warn!(key = %key, error = %e, "Redis DEL failed; entry may serve stale until TTL");
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Redis connection unavailable; entry may serve stale until TTL");
                }
            },
        }
    }
}
