pub mod chunk;
pub mod client;
pub mod errors;
pub mod orchestrate;
pub mod prompt;

pub mod prelude {
    pub use crate::chunk::{chunk_text, DEFAULT_CHUNK_CHARS};
    pub use crate::client::{CompletionBackend, GeminiClient, GeminiConfig};
    pub use crate::errors::CompletionError;
    pub use crate::orchestrate::CompletionOrchestrator;
    pub use crate::prompt::{build_prompt, PromptKind};
}
