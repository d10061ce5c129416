//! FinAdvisor - Retrieval + Generation finance assistant
//!
//! Answers one digital finance question per invocation by combining:
//!
//! - **Local retrieval**: a keyword-indexed directory of text notes, scanned
//!   first-match-wins.
//! - **Generation**: a streamed chat completion from a deployed watsonx
//!   (Granite) endpoint, authenticated via the IBM IAM token exchange.
//!
//! Both paths run best-effort: a failure in one never blocks the other.

pub mod auth;
pub mod cli;
pub mod config;
pub mod errors;
pub mod retrieval;
pub mod streaming;

// Re-export commonly used types
pub use config::Config;
pub use errors::{AdvisorError, Result};
