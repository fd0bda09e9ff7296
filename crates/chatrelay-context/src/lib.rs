pub mod classifier;
pub mod compose;
pub mod errors;
pub mod intent;
pub mod pipeline;

pub mod prelude {
    pub use crate::classifier::NecessityClassifier;
    pub use crate::compose::{ContextComposer, ContextPlan, NO_SEARCH_FALLBACK};
    pub use crate::errors::{ClassificationError, ContextError};
    pub use crate::intent::{extract, matches_token_list, Directive};
    pub use crate::pipeline::Pipeline;
}
