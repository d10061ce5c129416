//! CLI module for FinAdvisor
//!
//! Handles command-line argument parsing.

pub mod args;

pub use args::{Args, Verbosity};
