use thiserror::Error;

/// Failures talking to the completion service. Always fatal for the request
/// that triggered them; the gateway surfaces the message verbatim.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Transport(String),
    #[error("completion service returned {status}: {body}")]
    Http { status: u16, body: String },
    #[error("completion response decode failed: {0}")]
    Decode(String),
}

impl CompletionError {
    pub fn transport(detail: impl Into<String>) -> Self {
        CompletionError::Transport(detail.into())
    }

    pub fn decode(detail: impl Into<String>) -> Self {
        CompletionError::Decode(detail.into())
    }
}
