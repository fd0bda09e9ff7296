use async_trait::async_trait;

use crate::errors::CacheError;
use crate::key::CacheKey;

/// Minimal key-value surface the pipeline relies on. The store provides
/// per-key atomicity for each operation; no additional locking is layered on
/// top of it.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &CacheKey) -> Result<Option<String>, CacheError>;

    /// Set without expiry, replacing any previous value and TTL.
    async fn put(&self, key: &CacheKey, value: String) -> Result<(), CacheError>;

    /// Set with expiry `ttl_secs` seconds from now, replacing any previous
    /// value and TTL.
    async fn put_ex(&self, key: &CacheKey, value: String, ttl_secs: u64) -> Result<(), CacheError>;

    /// Remove the key, reporting whether a live entry existed.
    async fn delete(&self, key: &CacheKey) -> Result<bool, CacheError>;
}
