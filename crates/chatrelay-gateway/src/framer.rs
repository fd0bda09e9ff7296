use std::convert::Infallible;

use axum::response::sse::{Event, Sse};
use futures_util::stream::{self, Stream};
use serde_json::json;

/// Batch reply shape.
pub fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "object": "chat.completion",
        "choices": [{
            "message": {
                "role": "assistant",
                "content": content
            }
        }]
    })
}

fn chunk_event(chunk: &str) -> Event {
    let payload = json!({
        "object": "chat.completion.chunk",
        "choices": [{ "delta": { "content": chunk } }]
    });
    // String serialization of a Value cannot fail.
    Event::default().data(serde_json::to_string(&payload).unwrap_or_default())
}

/// Streamed reply: one chunk event per text chunk in order, closed by the
/// literal `data: [DONE]` line.
pub fn sse_response(chunks: Vec<String>) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let events = chunks
        .into_iter()
        .map(|chunk| Ok::<_, Infallible>(chunk_event(&chunk)))
        .chain(std::iter::once(Ok(Event::default().data("[DONE]"))));
    Sse::new(stream::iter(events))
}
