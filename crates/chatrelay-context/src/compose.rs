use std::sync::Arc;

use chatrelay_cache::prelude::TokenRegistry;
use chatrelay_llm::prelude::PromptKind;
use chatrelay_search::prelude::Retrieve;
use chatrelay_types::prelude::SearchResult;
use tracing::{debug, warn};

use crate::classifier::NecessityClassifier;
use crate::errors::ContextError;
use crate::intent::{matches_token_list, Directive};

/// Degraded context used when the classifier or the classifier-driven
/// retrieval fails.
pub const NO_SEARCH_FALLBACK: &str =
    "No web search could be performed. The answer below relies on general knowledge only.";

/// What the composer hands to the orchestrator: the assembled context blob
/// and which prompt framing to dispatch it with. An empty context is a
/// meaningful value, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextPlan {
    pub kind: PromptKind,
    pub context: String,
}

impl ContextPlan {
    fn answer(context: impl Into<String>) -> Self {
        ContextPlan {
            kind: PromptKind::Answer,
            context: context.into(),
        }
    }

    fn summarize(context: String) -> Self {
        ContextPlan {
            kind: PromptKind::Summarize,
            context,
        }
    }
}

/// Ordered-rule evaluator for context assembly. Branches are tried in order;
/// the first applicable one wins:
///
/// 1. a directive with tokens fans out one retrieval per token,
/// 2. a registry entry plus a token-list shaped query does the same without
///    re-extracting,
/// 3. the classifier decides whether one ad hoc retrieval happens,
/// 4. otherwise the context is empty.
///
/// Directive-driven retrieval (1 and 2) never consults the classifier; the
/// intent is already explicit and the extra completion round-trip is skipped.
#[derive(Clone)]
pub struct ContextComposer {
    registry: TokenRegistry,
    retriever: Arc<dyn Retrieve>,
    classifier: NecessityClassifier,
}

impl ContextComposer {
    pub fn new(
        registry: TokenRegistry,
        retriever: Arc<dyn Retrieve>,
        classifier: NecessityClassifier,
    ) -> Self {
        Self {
            registry,
            retriever,
            classifier,
        }
    }

    pub async fn compose(
        &self,
        directive: &Directive,
        raw_query: &str,
    ) -> Result<ContextPlan, ContextError> {
        let advice = matches!(directive, Directive::InvestmentAdvice { .. });
        if let Some(tokens) = directive.tokens() {
            if !tokens.is_empty() {
                let context = self.token_fan_out(tokens, advice).await?;
                return Ok(ContextPlan::summarize(context));
            }
        }

        if matches!(directive, Directive::None) && matches_token_list(raw_query) {
            if let Some(tokens) = self.registry.get().await? {
                if !tokens.is_empty() {
                    debug!(count = tokens.len(), "composing from registry tokens");
                    let context = self.token_fan_out(&tokens, false).await?;
                    return Ok(ContextPlan::summarize(context));
                }
            }
        }

        match self.classifier.needs_search(raw_query).await {
            Ok(true) => match self.retriever.retrieve(raw_query).await {
                Ok(results) => Ok(ContextPlan::answer(ad_hoc_fragments(&results))),
                Err(err) => {
                    warn!(error = %err, "classified retrieval failed; degrading");
                    Ok(ContextPlan::answer(NO_SEARCH_FALLBACK))
                }
            },
            Ok(false) => Ok(ContextPlan::answer("")),
            Err(err) => {
                warn!(error = %err, "necessity classification failed; degrading");
                Ok(ContextPlan::answer(NO_SEARCH_FALLBACK))
            }
        }
    }

    /// One retrieval per token, fragments concatenated in token input order.
    /// A token with no results contributes nothing; a failed retrieval aborts
    /// the whole composition.
    async fn token_fan_out(&self, tokens: &[String], advice: bool) -> Result<String, ContextError> {
        let mut parts = Vec::new();
        for token in tokens {
            let query = if advice {
                format!("{token} price trend")
            } else {
                token.clone()
            };
            let results = self.retriever.retrieve(&query).await?;
            for result in &results {
                parts.push(format!(
                    "Token: {token}\nTitle: {}\nContent: {}\nURL: {}\n\n",
                    result.title, result.content, result.url
                ));
            }
        }
        Ok(parts.join("\n"))
    }
}

fn ad_hoc_fragments(results: &[SearchResult]) -> String {
    results
        .iter()
        .map(|result| {
            format!(
                "Title: {}\nContent: {}\nURL: {}\n\n",
                result.title, result.content, result.url
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
