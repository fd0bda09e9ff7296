use anyhow::Context;

/// Process configuration, read once at startup from the environment.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    pub listen: String,
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub search_base_url: String,
    pub redis_url: Option<String>,
    pub allow_origin: String,
}

impl GatewayConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            listen: std::env::var("CHATRELAY_LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".into()),
            gemini_api_key: std::env::var("GEMINI_API_KEY").context("GEMINI_API_KEY not set")?,
            gemini_base_url: std::env::var("GEMINI_BASE_URL").context("GEMINI_BASE_URL not set")?,
            search_base_url: std::env::var("SEARCH_BASE_URL")
                .unwrap_or_else(|_| "http://searxng:8080".into()),
            redis_url: std::env::var("REDIS_URL").ok(),
            allow_origin: std::env::var("CHATRELAY_ALLOW_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".into()),
        })
    }
}
