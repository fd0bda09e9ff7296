use chatrelay_cache::prelude::CacheError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("search request failed: {0}")]
    Transport(String),
    #[error("search service returned {status}: {body}")]
    Http { status: u16, body: String },
    #[error("search response decode failed: {0}")]
    Decode(String),
    #[error(transparent)]
    Cache(#[from] CacheError),
}

impl RetrievalError {
    pub fn transport(detail: impl Into<String>) -> Self {
        RetrievalError::Transport(detail.into())
    }

    pub fn decode(detail: impl Into<String>) -> Self {
        RetrievalError::Decode(detail.into())
    }
}
