use serde::{Deserialize, Serialize};

/// One ranked result as normalized at the retrieval boundary. Immutable once
/// stored; cache updates replace or append whole entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub content: String,
    pub url: String,
}
