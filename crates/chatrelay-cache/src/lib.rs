pub mod errors;
pub mod key;
pub mod memory;
#[cfg(feature = "redis")]
pub mod redis;
pub mod store;
pub mod typed;

pub mod prelude {
    pub use crate::errors::CacheError;
    pub use crate::key::CacheKey;
    pub use crate::memory::MemoryKv;
    #[cfg(feature = "redis")]
    pub use crate::redis::RedisKv;
    pub use crate::store::KvStore;
    pub use crate::typed::{SearchCache, TokenRegistry, SEARCH_TTL_SECS};
}
