//! FinAdvisor - Main CLI Entry Point
//!
//! One question per invocation: print whatever the local knowledge base has,
//! then ask Granite regardless. All network and file failures are caught here,
//! logged to stderr, and turned into plain-language console text; the process
//! exits 0 either way.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use finadvisor::auth::IamClient;
use finadvisor::cli::{Args, Verbosity};
use finadvisor::config::Config;
use finadvisor::retrieval::KnowledgeBase;
use finadvisor::streaming::GraniteClient;
use rustyline::DefaultEditor;

/// Printed when no knowledge-base keyword matched (or the matched file was unreadable)
const NO_MATCH_NOTICE: &str = "No local content matched your question.";

/// Sentinel answer when the token exchange fails; generation is never attempted
const TOKEN_FAILURE_SENTINEL: &str = "Failed to get IAM token.";

/// Sentinel answer when the completion call fails
const GENERATION_FAILURE_SENTINEL: &str = "Error calling Granite.";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let verbosity = args.verbosity();
    let quiet = verbosity == Verbosity::Quiet;

    let config = Config::from_env_with_overrides(args.endpoint.clone(), args.kb.clone())?;

    if !quiet {
        println!("{}", "FinAdvisor - Retrieval + Generation".bold());
    }

    let question = match args.question {
        Some(q) => q,
        None => prompt_question()?,
    };

    // Local retrieval first; its outcome never gates the generation call.
    let kb = KnowledgeBase::with_default_index(&config.knowledge_dir);
    match kb.retrieve(&question) {
        Ok(Some(document)) => {
            if !quiet {
                println!("\n{}", "Retrieved from local knowledge base:".green().bold());
            }
            println!("{}", document);
        }
        Ok(None) => {
            println!("\n{}", NO_MATCH_NOTICE.yellow());
        }
        Err(e) => {
            eprintln!("{}: {}", "Warning".yellow(), e);
            println!("\n{}", NO_MATCH_NOTICE.yellow());
        }
    }

    let answer = generate_answer(&config, &question, verbosity).await;
    if !quiet {
        println!("\n{}", "Granite AI answer:".cyan().bold());
    }
    println!("{}", answer);

    Ok(())
}

/// Read the question interactively when none was given on the command line
fn prompt_question() -> Result<String> {
    let mut editor = DefaultEditor::new().context("Failed to initialize input editor")?;
    let line = editor
        .readline("Ask your digital finance question: ")
        .context("Failed to read question")?;
    Ok(line.trim().to_string())
}

/// Token exchange then streamed completion, folded down to the text we print.
///
/// A failed exchange short-circuits: the completion call is never issued.
async fn generate_answer(config: &Config, question: &str, verbosity: Verbosity) -> String {
    let token = match fetch_token(config, verbosity).await {
        Some(token) => token,
        None => return TOKEN_FAILURE_SENTINEL.to_string(),
    };

    let client = match GraniteClient::new(&config.endpoint_url) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}: {}", "Error".red(), e);
            return GENERATION_FAILURE_SENTINEL.to_string();
        }
    };

    match client.generate(question, &token).await {
        Ok(answer) => answer,
        Err(e) => {
            eprintln!("{}: {}", "Error".red(), e);
            GENERATION_FAILURE_SENTINEL.to_string()
        }
    }
}

async fn fetch_token(config: &Config, verbosity: Verbosity) -> Option<String> {
    let iam = match IamClient::new() {
        Ok(iam) => iam,
        Err(e) => {
            eprintln!("{}: {}", "Error".red(), e);
            return None;
        }
    };

    if verbosity == Verbosity::Verbose {
        eprintln!("Exchanging API key for IAM token at {}", iam.token_url());
    }

    match iam.get_token(&config.api_key).await {
        Ok(token) => Some(token),
        Err(e) => {
            eprintln!("{}: {}", "Error".red(), e);
            None
        }
    }
}
