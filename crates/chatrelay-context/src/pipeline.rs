use chatrelay_cache::prelude::TokenRegistry;
use tracing::{info, warn};

use crate::compose::{ContextComposer, ContextPlan};
use crate::errors::ContextError;
use crate::intent::{extract, Directive};

/// Front door of the core: extract intent, record declared token interest,
/// compose context. One call per inbound chat request.
#[derive(Clone)]
pub struct Pipeline {
    registry: TokenRegistry,
    composer: ContextComposer,
}

impl Pipeline {
    pub fn new(registry: TokenRegistry, composer: ContextComposer) -> Self {
        Self { registry, composer }
    }

    pub async fn assemble(&self, user_message: &str) -> Result<ContextPlan, ContextError> {
        let directive = extract(user_message);

        // Registry write is fire-and-forget: losing it degrades later
        // requests, never this one.
        if let Directive::TokenList { tokens } = &directive {
            match self.registry.put(tokens).await {
                Ok(()) => info!(count = tokens.len(), "token registry updated"),
                Err(err) => warn!(error = %err, "token registry write failed; continuing"),
            }
        }

        self.composer.compose(&directive, user_message).await
    }
}
