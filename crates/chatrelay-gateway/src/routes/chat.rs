use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chatrelay_types::prelude::{last_user_content, GenerationParams, Message};
use serde::Deserialize;
use tracing::debug;

use crate::error::AppError;
use crate::framer;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatCompletionRequest {
    pub messages: Vec<Message>,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default)]
    pub stream: bool,
}

fn default_max_tokens() -> u32 {
    2048
}

fn default_temperature() -> f32 {
    0.7
}

pub async fn chat_completions(
    State(state): State<AppState>,
    Json(request): Json<ChatCompletionRequest>,
) -> Result<Response, AppError> {
    let user_message = last_user_content(&request.messages)
        .ok_or_else(|| AppError::validation("request contains no user message"))?
        .to_string();

    let plan = state.pipeline.assemble(&user_message).await?;
    debug!(kind = ?plan.kind, context_chars = plan.context.chars().count(), "context assembled");

    let params = GenerationParams {
        max_tokens: request.max_tokens,
        temperature: request.temperature,
    };

    if request.stream {
        let chunks = state
            .orchestrator
            .complete_chunked(plan.kind, &plan.context, &user_message, params)
            .await?;
        Ok(framer::sse_response(chunks).into_response())
    } else {
        let content = state
            .orchestrator
            .complete(plan.kind, &plan.context, &user_message, params)
            .await?;
        Ok(Json(framer::completion_body(&content)).into_response())
    }
}
