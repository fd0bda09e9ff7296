use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use crate::errors::CacheError;
use crate::key::CacheKey;
use crate::store::KvStore;

#[derive(Clone, Debug)]
pub(crate) struct Entry {
    pub value: String,
    pub expires_at_ms: Option<i64>,
}

impl Entry {
    pub fn is_expired(&self, now_ms: i64) -> bool {
        matches!(self.expires_at_ms, Some(at) if now_ms >= at)
    }
}

/// In-process store with per-key expiry. Stands in for Redis in tests and
/// single-node deployments; expired entries are dropped lazily on access.
#[derive(Clone, Default)]
pub struct MemoryKv {
    inner: Arc<Mutex<HashMap<String, Entry>>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemoryKv {
    async fn get(&self, key: &CacheKey) -> Result<Option<String>, CacheError> {
        let now = Utc::now().timestamp_millis();
        let mut guard = self.inner.lock();
        match guard.get(key.as_str()) {
            Some(entry) if entry.is_expired(now) => {
                guard.remove(key.as_str());
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    async fn put(&self, key: &CacheKey, value: String) -> Result<(), CacheError> {
        self.inner.lock().insert(
            key.as_str().to_string(),
            Entry {
                value,
                expires_at_ms: None,
            },
        );
        Ok(())
    }

    async fn put_ex(&self, key: &CacheKey, value: String, ttl_secs: u64) -> Result<(), CacheError> {
        let expires = Utc::now().timestamp_millis() + (ttl_secs as i64).saturating_mul(1_000);
        self.inner.lock().insert(
            key.as_str().to_string(),
            Entry {
                value,
                expires_at_ms: Some(expires),
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &CacheKey) -> Result<bool, CacheError> {
        let now = Utc::now().timestamp_millis();
        let mut guard = self.inner.lock();
        match guard.remove(key.as_str()) {
            Some(entry) => Ok(!entry.is_expired(now)),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_without_ttl_never_expires() {
        let entry = Entry {
            value: "v".into(),
            expires_at_ms: None,
        };
        assert!(!entry.is_expired(i64::MAX));
    }

    #[test]
    fn entry_expires_at_deadline() {
        let entry = Entry {
            value: "v".into(),
            expires_at_ms: Some(1_000),
        };
        assert!(!entry.is_expired(999));
        assert!(entry.is_expired(1_000));
    }
}
