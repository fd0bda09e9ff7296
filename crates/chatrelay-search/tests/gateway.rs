use std::sync::Arc;

use chatrelay_cache::prelude::*;
use chatrelay_search::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(server: &MockServer, kv: Arc<MemoryKv>) -> RetrievalGateway {
    let client = SearchClient::new(SearchConfig::new(&server.uri()).unwrap()).unwrap();
    RetrievalGateway::new(SearchCache::new(kv), Arc::new(client))
}

fn five_results() -> serde_json::Value {
    json!({
        "results": (1..=5).map(|i| json!({
            "title": format!("title {i}"),
            "content": format!("content {i}"),
            "url": format!("https://example.com/{i}")
        })).collect::<Vec<_>>()
    })
}

#[tokio::test]
async fn second_retrieve_hits_cache_and_skips_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "BTC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(five_results()))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server, Arc::new(MemoryKv::new()));
    let first = gateway.retrieve("BTC").await.unwrap();
    let second = gateway.retrieve("BTC").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn results_are_truncated_to_three_before_caching() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(five_results()))
        .mount(&server)
        .await;

    let kv = Arc::new(MemoryKv::new());
    let gateway = gateway_for(&server, kv.clone());
    let results = gateway.retrieve("BTC").await.unwrap();
    assert_eq!(results.len(), MAX_RESULTS);
    assert_eq!(results[2].title, "title 3");

    let cached = SearchCache::new(kv).get("BTC").await.unwrap().unwrap();
    assert_eq!(cached.len(), MAX_RESULTS);
}

#[tokio::test]
async fn expired_entry_triggers_exactly_one_refetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("q", "ETH"))
        .respond_with(ResponseTemplate::new(200).set_body_json(five_results()))
        .expect(1)
        .mount(&server)
        .await;

    let kv = Arc::new(MemoryKv::new());
    // Simulate an entry whose TTL has lapsed.
    kv.put_ex(&CacheKey::search("ETH"), "[]".into(), 0)
        .await
        .unwrap();

    let gateway = gateway_for(&server, kv);
    let results = gateway.retrieve("ETH").await.unwrap();
    assert_eq!(results.len(), MAX_RESULTS);
}

#[tokio::test]
async fn upstream_failure_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("engine down"))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server, Arc::new(MemoryKv::new()));
    let err = gateway.retrieve("BTC").await.unwrap_err();
    assert!(matches!(err, RetrievalError::Http { status: 500, .. }));
}

#[tokio::test]
async fn distinct_query_text_means_distinct_cache_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(five_results()))
        .expect(2)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server, Arc::new(MemoryKv::new()));
    gateway.retrieve("BTC").await.unwrap();
    // No normalization: trailing whitespace is a different key.
    gateway.retrieve("BTC ").await.unwrap();
}
