use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use chatrelay_cache::prelude::{KvStore, MemoryKv, RedisKv};
use chatrelay_gateway::config::GatewayConfig;
use chatrelay_gateway::{app_router, AppState};
use chatrelay_llm::prelude::{GeminiClient, GeminiConfig};
use chatrelay_search::prelude::{SearchClient, SearchConfig};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = GatewayConfig::from_env()?;

    let kv: Arc<dyn KvStore> = match config.redis_url.as_deref() {
        Some(url) => Arc::new(RedisKv::connect(url).await?),
        None => {
            warn!("REDIS_URL not set; falling back to the in-process store");
            Arc::new(MemoryKv::new())
        }
    };

    let completion = Arc::new(GeminiClient::new(GeminiConfig::new(
        config.gemini_api_key.clone(),
        &config.gemini_base_url,
    )?)?);
    let search = Arc::new(SearchClient::new(SearchConfig::new(&config.search_base_url)?)?);

    let state = AppState::from_parts(kv, completion, search);

    let cors = CorsLayer::new()
        .allow_origin(config.allow_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    let app = app_router(state, cors);

    let addr: SocketAddr = config.listen.parse()?;
    info!("listening on {addr}");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
