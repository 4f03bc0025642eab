//! Outbound message chunking.
//!
//! Replies longer than the platform limit are cut into fixed-width pieces and
//! sent as consecutive messages. Cuts are positional: a boundary may fall in
//! the middle of a word or a code block.

/// Per-message character limit of the chat platform.
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Split `text` into chunks of at most `max` characters.
///
/// Every chunk except possibly the last holds exactly `max` characters and the
/// chunks concatenate back to `text`. Input that fits yields a single chunk,
/// including the empty string. A `max` of zero is treated as one.
pub fn chunk_message(text: &str, max: usize) -> Vec<&str> {
    let max = max.max(1);
    let mut chunks = Vec::with_capacity(text.len() / max + 1);
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in text.char_indices() {
        if count == max {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    chunks.push(&text[start..]);
    chunks
}
