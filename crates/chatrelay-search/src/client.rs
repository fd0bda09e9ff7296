use std::time::Duration;

use async_trait::async_trait;
use chatrelay_types::prelude::SearchResult;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::errors::RetrievalError;

/// Seam for the external ranked-results service.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, RetrievalError>;
}

#[derive(Clone, Debug)]
pub struct SearchConfig {
    pub base_url: Url,
    pub request_timeout: Duration,
}

impl SearchConfig {
    pub fn new(base_url: &str) -> Result<Self, RetrievalError> {
        let base_url = Url::parse(base_url)
            .map_err(|err| RetrievalError::decode(format!("search base url parse: {err}")))?;
        Ok(Self {
            base_url,
            request_timeout: Duration::from_secs(15),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

pub struct SearchClient {
    client: Client,
    search_url: Url,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<RawResult>,
}

/// Result records arrive with either a `content` or a `snippet` field
/// depending on the engine; normalization to `SearchResult` happens here and
/// nowhere downstream.
#[derive(Deserialize)]
struct RawResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    snippet: Option<String>,
    #[serde(default)]
    url: String,
}

impl From<RawResult> for SearchResult {
    fn from(raw: RawResult) -> Self {
        SearchResult {
            title: raw.title,
            content: raw.content.or(raw.snippet).unwrap_or_default(),
            url: raw.url,
        }
    }
}

impl SearchClient {
    pub fn new(config: SearchConfig) -> Result<Self, RetrievalError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| RetrievalError::transport(format!("client build failed: {err}")))?;
        let search_url = config
            .base_url
            .join("search")
            .map_err(|err| RetrievalError::decode(format!("search url join: {err}")))?;
        Ok(Self { client, search_url })
    }
}

#[async_trait]
impl SearchBackend for SearchClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, RetrievalError> {
        let response = self
            .client
            .get(self.search_url.clone())
            .query(&[("q", query), ("format", "json")])
            .send()
            .await
            .map_err(|err| RetrievalError::transport(format!("search request error: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RetrievalError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let decoded: SearchResponse = response
            .json()
            .await
            .map_err(|err| RetrievalError::decode(format!("search response decode: {err}")))?;
        Ok(decoded.results.into_iter().map(SearchResult::from).collect())
    }
}
