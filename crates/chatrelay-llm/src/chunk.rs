/// Chunk width used for simulated streaming. The completion service is not
/// natively streaming; incremental delivery re-slices a finished response.
pub const DEFAULT_CHUNK_CHARS: usize = 100;

/// Split `text` into chunks of at most `chunk_chars` characters, never inside
/// a UTF-8 scalar. Concatenating the chunks in order reproduces `text`
/// exactly; empty input yields no chunks.
pub fn chunk_text(text: &str, chunk_chars: usize) -> Vec<String> {
    debug_assert!(chunk_chars > 0);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut len = 0usize;
    for ch in text.chars() {
        current.push(ch);
        len += 1;
        if len == chunk_chars {
            chunks.push(std::mem::take(&mut current));
            len = 0;
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_concatenate_back_to_input() {
        let text = "The quick brown fox jumps over the lazy dog";
        for size in [1, 2, 7, 100] {
            let chunks = chunk_text(text, size);
            assert_eq!(chunks.concat(), text, "size {size}");
        }
    }

    #[test]
    fn chunk_boundaries_respect_multibyte_chars() {
        let text = "가격 예측: ₿ is volatile — 요약";
        let chunks = chunk_text(text, 3);
        assert_eq!(chunks.concat(), text);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 3);
        }
    }

    #[test]
    fn empty_text_yields_no_chunks() {
        assert!(chunk_text("", 100).is_empty());
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_chunk() {
        let chunks = chunk_text("abcdef", 3);
        assert_eq!(chunks, vec!["abc".to_string(), "def".to_string()]);
    }
}
