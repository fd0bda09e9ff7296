pub mod admin;
pub mod chat;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

pub fn app_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/v1/chat/completions", post(chat::chat_completions))
        .route(
            "/redis/tokens",
            get(admin::get_tokens).delete(admin::delete_tokens),
        )
        .route(
            "/redis/search/:query",
            post(admin::save_search_result)
                .get(admin::get_search_results)
                .delete(admin::delete_search_cache),
        )
        .layer(cors)
        .with_state(state)
}
