use std::sync::Arc;

use chatrelay_types::prelude::SearchResult;

use crate::errors::CacheError;
use crate::key::CacheKey;
use crate::store::KvStore;

/// Freshness window for cached search results, measured from the most recent
/// write. Appending resets it.
pub const SEARCH_TTL_SECS: u64 = 3600;

/// Typed view over `search:<query>` entries: an ordered list of results,
/// JSON-encoded, expiring `SEARCH_TTL_SECS` after the last write.
#[derive(Clone)]
pub struct SearchCache {
    kv: Arc<dyn KvStore>,
}

impl SearchCache {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }

    pub async fn get(&self, query: &str) -> Result<Option<Vec<SearchResult>>, CacheError> {
        let raw = self.kv.get(&CacheKey::search(query)).await?;
        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Replace the stored list for `query` (retrieval write-through path).
    pub async fn put(&self, query: &str, results: &[SearchResult]) -> Result<(), CacheError> {
        let json = serde_json::to_string(results)?;
        self.kv
            .put_ex(&CacheKey::search(query), json, SEARCH_TTL_SECS)
            .await
    }

    /// Append one result to the stored list, creating it if absent. Returns
    /// the updated list. The TTL restarts from this write.
    pub async fn append(
        &self,
        query: &str,
        result: SearchResult,
    ) -> Result<Vec<SearchResult>, CacheError> {
        let mut results = self.get(query).await?.unwrap_or_default();
        results.push(result);
        self.put(query, &results).await?;
        Ok(results)
    }

    pub async fn evict(&self, query: &str) -> Result<bool, CacheError> {
        self.kv.delete(&CacheKey::search(query)).await
    }
}

/// Single-slot record of the most recently declared token interest. One
/// process-wide key, last-write-wins, no TTL; concurrent writers racing on it
/// is accepted behavior, not something to serialize.
#[derive(Clone)]
pub struct TokenRegistry {
    kv: Arc<dyn KvStore>,
}

impl TokenRegistry {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }

    pub async fn put(&self, tokens: &[String]) -> Result<(), CacheError> {
        let json = serde_json::to_string(tokens)?;
        self.kv.put(&CacheKey::tokens(), json).await
    }

    pub async fn get(&self) -> Result<Option<Vec<String>>, CacheError> {
        let raw = self.kv.get(&CacheKey::tokens()).await?;
        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    pub async fn clear(&self) -> Result<bool, CacheError> {
        self.kv.delete(&CacheKey::tokens()).await
    }
}
