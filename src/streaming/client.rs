//! Granite completion streaming client
//!
//! Issues the streaming chat-completion POST and assembles the answer from the
//! SSE fragments as they arrive.

use crate::errors::{AdvisorError, Result};
use crate::streaming::parser::SseParser;
use futures_util::StreamExt;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Fallback answer when the stream closes without emitting any content
pub const NO_ANSWER_FALLBACK: &str = "No answer generated.";

/// Request timeout covering the whole streamed response.
/// The upstream service has no cancellation mechanism; without this bound a
/// stalled stream would block forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Streaming client for the deployed watsonx completion endpoint
#[derive(Debug, Clone)]
pub struct GraniteClient {
    client: Client,
    endpoint_url: String,
}

impl GraniteClient {
    /// Create a client for the given completion endpoint
    pub fn new(endpoint_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(AdvisorError::Http)?;

        Ok(Self {
            client,
            endpoint_url: endpoint_url.into(),
        })
    }

    /// Ask the model one question and collect the streamed answer.
    ///
    /// Returns the whitespace-trimmed concatenation of the content fragments,
    /// or [`NO_ANSWER_FALLBACK`] if the stream closed without any. A non-200
    /// status or a mid-stream transport fault is an error; the caller decides
    /// what to show the user.
    pub async fn generate(&self, question: &str, token: &str) -> Result<String> {
        let request = ChatRequest {
            messages: vec![ChatMessage {
                role: "user",
                content: question,
            }],
        };

        let response = self
            .client
            .post(&self.endpoint_url)
            .bearer_auth(token)
            .json(&request)
            .send()
            .await
            .map_err(AdvisorError::Http)?;

        let status = response.status();
        if status.as_u16() != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(AdvisorError::Generation {
                status: status.as_u16(),
                body,
            });
        }

        let mut parser = SseParser::new();
        let mut answer = String::new();
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| AdvisorError::Streaming(e.to_string()))?;
            for fragment in parser.feed(&chunk) {
                answer.push_str(&fragment);
            }
        }
        for fragment in parser.finish() {
            answer.push_str(&fragment);
        }

        let answer = answer.trim();
        if answer.is_empty() {
            Ok(NO_ANSWER_FALLBACK.to_string())
        } else {
            Ok(answer.to_string())
        }
    }

    /// Completion endpoint URL this client posts to
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}

/// Chat-completion request body
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    messages: Vec<ChatMessage<'a>>,
}

/// Single chat message
#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}
