pub use crate::message::{last_user_content, GenerationParams, Message, Role};
pub use crate::search::SearchResult;
