use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use crate::errors::CacheError;
use crate::key::CacheKey;
use crate::store::KvStore;

/// Redis-backed store. The connection manager reconnects on its own; every
/// operation maps one-to-one onto a Redis command (GET/SET/SETEX/DEL).
#[derive(Clone)]
pub struct RedisKv {
    conn: ConnectionManager,
}

impl RedisKv {
    pub async fn connect(url: &str) -> Result<Self, CacheError> {
        let client = Client::open(url)
            .map_err(|err| CacheError::backend(format!("redis url invalid: {err}")))?;
        let conn = client
            .get_connection_manager()
            .await
            .map_err(|err| CacheError::backend(format!("redis connect failed: {err}")))?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl KvStore for RedisKv {
    async fn get(&self, key: &CacheKey) -> Result<Option<String>, CacheError> {
        let mut conn = self.conn.clone();
        conn.get(key.as_str())
            .await
            .map_err(|err| CacheError::backend(format!("redis GET {}: {err}", key.as_str())))
    }

    async fn put(&self, key: &CacheKey, value: String) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        let _: () = conn
            .set(key.as_str(), value)
            .await
            .map_err(|err| CacheError::backend(format!("redis SET {}: {err}", key.as_str())))?;
        Ok(())
    }

    async fn put_ex(&self, key: &CacheKey, value: String, ttl_secs: u64) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        let _: () = conn
            .set_ex(key.as_str(), value, ttl_secs)
            .await
            .map_err(|err| CacheError::backend(format!("redis SETEX {}: {err}", key.as_str())))?;
        Ok(())
    }

    async fn delete(&self, key: &CacheKey) -> Result<bool, CacheError> {
        let mut conn = self.conn.clone();
        let removed: i64 = conn
            .del(key.as_str())
            .await
            .map_err(|err| CacheError::backend(format!("redis DEL {}: {err}", key.as_str())))?;
        Ok(removed > 0)
    }
}
