/// Cache key as written to the store. Constructors here are the only place
/// that knows the key layout; callers never format keys by hand.
///
/// `search:` keys carry the raw query text with no normalization, so callers
/// must pass identical query strings to share an entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn search(query: &str) -> Self {
        CacheKey(format!("search:{query}"))
    }

    pub fn tokens() -> Self {
        CacheKey("tokens".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
