//! Incremental parser for the server-sent-events completion stream
//!
//! The completion endpoint replies with newline-delimited lines. Only lines
//! prefixed with `data: ` carry payloads; each payload is a JSON chunk exposing
//! `choices[0].delta.content` as an optional text fragment. Everything else
//! (blank keep-alives, `:` comments, non-JSON noise) is ignored.

use serde::Deserialize;

/// Line prefix marking a payload-bearing event
const DATA_MARKER: &str = "data: ";

/// Terminal payload some providers emit; carries no content
const DONE_PAYLOAD: &str = "[DONE]";

/// Stateful SSE line parser.
///
/// Bytes arrive in arbitrary chunk sizes, so lines may be split across calls to
/// [`feed`](Self::feed); the parser buffers the unterminated tail until the
/// next chunk completes it.
#[derive(Debug, Default)]
pub struct SseParser {
    buffer: Vec<u8>,
}

impl SseParser {
    /// Create a parser with an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume a chunk of response bytes, returning any completed content
    /// fragments in arrival order.
    ///
    /// Malformed JSON on a `data: ` line is skipped, not fatal: the external
    /// protocol is free to emit keep-alive lines we cannot parse.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(bytes);

        let mut fragments = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            // Drop the newline and any preceding CR
            let mut line = &line[..line.len() - 1];
            if line.last() == Some(&b'\r') {
                line = &line[..line.len() - 1];
            }
            if let Some(fragment) = parse_line(line) {
                fragments.push(fragment);
            }
        }
        fragments
    }

    /// Flush a trailing line that arrived without a final newline
    pub fn finish(&mut self) -> Vec<String> {
        if self.buffer.is_empty() {
            return Vec::new();
        }
        let line = std::mem::take(&mut self.buffer);
        parse_line(&line).into_iter().collect()
    }

    /// Number of buffered bytes awaiting a newline
    pub fn pending_bytes(&self) -> usize {
        self.buffer.len()
    }
}

/// Parse one complete line, returning its content fragment if it carries one
fn parse_line(line: &[u8]) -> Option<String> {
    let line = String::from_utf8_lossy(line);
    let payload = line.strip_prefix(DATA_MARKER)?;
    let payload = payload.trim();
    if payload == DONE_PAYLOAD {
        return None;
    }

    let chunk: StreamChunk = serde_json::from_str(payload).ok()?;
    chunk
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.delta.content)
        .filter(|content| !content.is_empty())
}

/// One streamed completion chunk
#[derive(Debug, Deserialize)]
struct StreamChunk {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    delta: Delta,
}

#[derive(Debug, Deserialize, Default)]
struct Delta {
    #[serde(default)]
    content: Option<String>,
}
