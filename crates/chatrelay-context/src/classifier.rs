use std::sync::Arc;

use chatrelay_llm::prelude::CompletionBackend;
use chatrelay_types::prelude::GenerationParams;

use crate::errors::ClassificationError;

const CLASSIFIER_PARAMS: GenerationParams = GenerationParams {
    max_tokens: 8,
    temperature: 0.0,
};

/// Heuristic oracle asking the completion service whether a query needs a
/// web search. Not guaranteed correct; callers treat a failure as "do not
/// search" and degrade, never abort.
#[derive(Clone)]
pub struct NecessityClassifier {
    backend: Arc<dyn CompletionBackend>,
}

impl NecessityClassifier {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    pub async fn needs_search(&self, query: &str) -> Result<bool, ClassificationError> {
        let prompt = format!(
            "Decide whether answering the query below requires a web search.\n\
             Answer strictly \"yes\" or \"no\".\n\
             Answer yes if the query concerns recent events, specific named entities, \
             or uncommon technical concepts; otherwise answer no.\n\n\
             Query: {query}"
        );
        let answer = self.backend.generate(&prompt, CLASSIFIER_PARAMS).await?;
        Ok(answer.trim().to_lowercase().contains("yes"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chatrelay_llm::prelude::CompletionError;

    struct FixedBackend(&'static str);

    #[async_trait]
    impl CompletionBackend for FixedBackend {
        async fn generate(
            &self,
            _prompt: &str,
            _params: GenerationParams,
        ) -> Result<String, CompletionError> {
            Ok(self.0.to_string())
        }
    }

    #[tokio::test]
    async fn answer_containing_yes_means_search() {
        let classifier = NecessityClassifier::new(Arc::new(FixedBackend("  Yes.\n")));
        assert!(classifier.needs_search("latest BTC price").await.unwrap());
    }

    #[tokio::test]
    async fn anything_else_means_no_search() {
        let classifier = NecessityClassifier::new(Arc::new(FixedBackend("No")));
        assert!(!classifier.needs_search("2 + 2").await.unwrap());
    }
}
