//! Command-line argument parsing for FinAdvisor
//!
//! Provides a clap-based CLI with verbosity control. All flags are optional;
//! with none given the program prompts interactively and reads its endpoints
//! from the environment.

use clap::Parser;
use std::path::PathBuf;

/// FinAdvisor - answer digital finance questions from a local knowledge base and Granite
#[derive(Parser, Debug)]
#[command(name = "finadvisor")]
#[command(version = "0.1.0")]
#[command(about = "Digital finance assistant: local retrieval + Granite generation", long_about = None)]
pub struct Args {
    /// Question to answer (prompts interactively if omitted)
    #[arg(value_name = "QUESTION")]
    pub question: Option<String>,

    /// Knowledge-base directory (overrides KNOWLEDGE_BASE_DIR)
    #[arg(long)]
    pub kb: Option<PathBuf>,

    /// Completion endpoint URL (overrides ENDPOINT_URL)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Verbosity level: default (normal), -v (verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress headers, print results only)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose > 0 {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}
