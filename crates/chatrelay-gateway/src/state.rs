use std::sync::Arc;

use chatrelay_cache::prelude::{KvStore, SearchCache, TokenRegistry};
use chatrelay_context::prelude::{ContextComposer, NecessityClassifier, Pipeline};
use chatrelay_llm::prelude::{CompletionBackend, CompletionOrchestrator};
use chatrelay_search::prelude::{RetrievalGateway, SearchBackend};

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Pipeline,
    pub orchestrator: CompletionOrchestrator,
    pub tokens: TokenRegistry,
    pub searches: SearchCache,
}

impl AppState {
    /// Wire the pipeline from its three collaborators. Tests inject
    /// mock-backed clients here; `main` passes the real ones.
    pub fn from_parts(
        kv: Arc<dyn KvStore>,
        completion: Arc<dyn CompletionBackend>,
        search: Arc<dyn SearchBackend>,
    ) -> Self {
        let searches = SearchCache::new(kv.clone());
        let tokens = TokenRegistry::new(kv);
        let gateway = RetrievalGateway::new(searches.clone(), search);
        let classifier = NecessityClassifier::new(completion.clone());
        let composer = ContextComposer::new(tokens.clone(), Arc::new(gateway), classifier);
        let pipeline = Pipeline::new(tokens.clone(), composer);
        let orchestrator = CompletionOrchestrator::new(completion);

        Self {
            pipeline,
            orchestrator,
            tokens,
            searches,
        }
    }
}
