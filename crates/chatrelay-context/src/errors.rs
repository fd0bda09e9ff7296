use chatrelay_cache::prelude::CacheError;
use chatrelay_llm::prelude::CompletionError;
use chatrelay_search::prelude::RetrievalError;
use thiserror::Error;

/// Necessity-classifier failure. Never fatal: callers fall back to the
/// no-search context.
#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("necessity classification failed: {0}")]
    Completion(#[from] CompletionError),
}

/// Failure assembling context on a directive-driven path, where the user
/// explicitly asked for token data and partial output is not acceptable.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
    #[error(transparent)]
    Cache(#[from] CacheError),
}
