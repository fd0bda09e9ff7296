/// Which of the two fixed prompt framings a request uses. Token-directed
/// requests are informational dumps, so they get the summarize framing;
/// everything else is answered as a question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptKind {
    Answer,
    Summarize,
}

pub fn build_prompt(kind: PromptKind, context: &str, user_query: &str) -> String {
    match kind {
        PromptKind::Answer => format!(
            "You are a helpful AI assistant.\n\n\
             Below is some context, followed by the user's query.\n\
             Please provide a helpful, coherent answer.\n\n\
             \u{3010}Context\u{3011}\n{context}\n\n\
             User's Query: {user_query}"
        ),
        PromptKind::Summarize => {
            let data = if context.trim().is_empty() {
                "(no cached token data available)"
            } else {
                context
            };
            format!(
                "You are a helpful AI assistant.\n\n\
                 The user wants information about certain tokens. \
                 Below is the data we have cached for them. \
                 Please summarize it in a user-friendly manner, highlighting key points.\n\n\
                 \u{3010}Token Data\u{3011}\n{data}\n"
            )
        }
    }
}
