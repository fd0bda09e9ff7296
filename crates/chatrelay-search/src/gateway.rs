use std::sync::Arc;

use async_trait::async_trait;
use chatrelay_cache::prelude::SearchCache;
use chatrelay_types::prelude::SearchResult;
use tracing::debug;

use crate::client::SearchBackend;
use crate::errors::RetrievalError;

/// Ranked results are truncated to this many entries before caching.
pub const MAX_RESULTS: usize = 3;

/// Seam the context composer retrieves through, so composition can be tested
/// without a cache or a search service behind it.
#[async_trait]
pub trait Retrieve: Send + Sync {
    async fn retrieve(&self, query: &str) -> Result<Vec<SearchResult>, RetrievalError>;
}

/// Cache-first retrieval: a hit short-circuits the network call entirely,
/// relying on TTL expiry for freshness; a miss searches, truncates, and
/// writes through with the fixed TTL.
#[derive(Clone)]
pub struct RetrievalGateway {
    cache: SearchCache,
    backend: Arc<dyn SearchBackend>,
}

impl RetrievalGateway {
    pub fn new(cache: SearchCache, backend: Arc<dyn SearchBackend>) -> Self {
        Self { cache, backend }
    }
}

#[async_trait]
impl Retrieve for RetrievalGateway {
    async fn retrieve(&self, query: &str) -> Result<Vec<SearchResult>, RetrievalError> {
        if let Some(cached) = self.cache.get(query).await? {
            debug!(query, entries = cached.len(), "retrieval cache hit");
            return Ok(cached);
        }

        let mut results = self.backend.search(query).await?;
        results.truncate(MAX_RESULTS);
        self.cache.put(query, &results).await?;
        debug!(query, entries = results.len(), "retrieval cache fill");
        Ok(results)
    }
}
