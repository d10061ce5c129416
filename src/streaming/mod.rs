//! Streaming generation module
//!
//! Provides the Granite completion client and the SSE line parser it feeds.

pub mod client;
pub mod parser;

// Re-export commonly used types
pub use client::{GraniteClient, NO_ANSWER_FALLBACK};
pub use parser::SseParser;
