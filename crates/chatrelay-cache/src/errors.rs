use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache backend error: {0}")]
    Backend(String),
    #[error("cache codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

impl CacheError {
    pub fn backend(detail: impl Into<String>) -> Self {
        CacheError::Backend(detail.into())
    }
}
