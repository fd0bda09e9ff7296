use std::sync::Arc;

use chatrelay_types::prelude::GenerationParams;
use tracing::debug;

use crate::chunk::{chunk_text, DEFAULT_CHUNK_CHARS};
use crate::client::CompletionBackend;
use crate::errors::CompletionError;
use crate::prompt::{build_prompt, PromptKind};

/// Builds the final prompt and invokes the completion service exactly once.
/// Both delivery modes share the single-shot call; streaming is a post-hoc
/// re-framing of the same text.
#[derive(Clone)]
pub struct CompletionOrchestrator {
    backend: Arc<dyn CompletionBackend>,
}

impl CompletionOrchestrator {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    pub async fn complete(
        &self,
        kind: PromptKind,
        context: &str,
        user_query: &str,
        params: GenerationParams,
    ) -> Result<String, CompletionError> {
        let prompt = build_prompt(kind, context, user_query);
        debug!(kind = ?kind, prompt_chars = prompt.chars().count(), "dispatching completion");
        self.backend.generate(&prompt, params).await
    }

    /// Incremental delivery: the completed text, decomposed into fixed-size
    /// chunks in order.
    pub async fn complete_chunked(
        &self,
        kind: PromptKind,
        context: &str,
        user_query: &str,
        params: GenerationParams,
    ) -> Result<Vec<String>, CompletionError> {
        let text = self.complete(kind, context, user_query, params).await?;
        Ok(chunk_text(&text, DEFAULT_CHUNK_CHARS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingBackend {
        prompts: Mutex<Vec<String>>,
        reply: String,
    }

    #[async_trait]
    impl CompletionBackend for RecordingBackend {
        async fn generate(
            &self,
            prompt: &str,
            _params: GenerationParams,
        ) -> Result<String, CompletionError> {
            self.prompts.lock().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    #[tokio::test]
    async fn complete_uses_the_requested_framing() {
        let backend = Arc::new(RecordingBackend {
            reply: "ok".into(),
            ..Default::default()
        });
        let orchestrator = CompletionOrchestrator::new(backend.clone());

        orchestrator
            .complete(
                PromptKind::Summarize,
                "Token: BTC",
                "irrelevant",
                GenerationParams::default(),
            )
            .await
            .unwrap();

        let prompts = backend.prompts.lock();
        assert!(prompts[0].contains("\u{3010}Token Data\u{3011}"));
        assert!(!prompts[0].contains("User's Query"));
    }

    #[tokio::test]
    async fn chunked_delivery_is_lossless() {
        let reply = "x".repeat(230);
        let backend = Arc::new(RecordingBackend {
            reply: reply.clone(),
            ..Default::default()
        });
        let orchestrator = CompletionOrchestrator::new(backend);

        let chunks = orchestrator
            .complete_chunked(
                PromptKind::Answer,
                "",
                "question",
                GenerationParams::default(),
            )
            .await
            .unwrap();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks.concat(), reply);
    }
}
