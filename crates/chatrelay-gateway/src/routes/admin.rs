use axum::extract::{Path, State};
use axum::Json;
use chatrelay_types::prelude::SearchResult;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

/// Manual inspection and maintenance of the cache store. Absent entries
/// answer with an error body, not a 404; repeated deletes are idempotent.
pub async fn get_tokens(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    match state.tokens.get().await? {
        Some(tokens) => Ok(Json(json!({ "tokens": tokens }))),
        None => Ok(Json(json!({ "error": "No tokens found" }))),
    }
}

pub async fn delete_tokens(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    if state.tokens.clear().await? {
        Ok(Json(json!({ "message": "Tokens deleted from Redis" })))
    } else {
        Ok(Json(json!({ "error": "No tokens found in Redis" })))
    }
}

pub async fn save_search_result(
    State(state): State<AppState>,
    Path(query): Path<String>,
    Json(result): Json<SearchResult>,
) -> Result<Json<Value>, AppError> {
    let updated = state.searches.append(&query, result).await?;
    Ok(Json(json!({
        "message": format!("Search result added for '{query}'"),
        "updated_results": updated
    })))
}

pub async fn get_search_results(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<Value>, AppError> {
    match state.searches.get(&query).await? {
        Some(results) => Ok(Json(json!({ "query": query, "results": results }))),
        None => Ok(Json(
            json!({ "error": format!("No cached results found for {query}") }),
        )),
    }
}

pub async fn delete_search_cache(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<Value>, AppError> {
    if state.searches.evict(&query).await? {
        Ok(Json(
            json!({ "message": format!("Search cache for '{query}' deleted") }),
        ))
    } else {
        Ok(Json(
            json!({ "error": format!("No cache found for query '{query}'") }),
        ))
    }
}
