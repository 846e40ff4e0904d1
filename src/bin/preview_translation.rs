//! Preview translation binary - runs one translation and prints the result
//!
//! Usage:
//!   cargo run --bin preview -- es en "Hola mundo"
//!   cargo run --bin preview -- auto de "How are you?"
//!
//! Required environment variables:
//! - OPENAI_API_KEY
//!
//! Optional:
//! - OPENAI_MODEL (defaults to gpt-4o-mini)
//! - OPENAI_API_URL (defaults to the hosted chat-completions endpoint)

use anyhow::{bail, Context, Result};
use std::sync::Arc;
use std::time::Duration;

use phrase_translator::config::Config;
use phrase_translator::languages;
use phrase_translator::openai::OpenAiClient;
use phrase_translator::translator::{build_messages, TranslationService};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 {
        bail!("Usage: preview <source> <target> <text>");
    }
    let (source, target) = (&args[0], &args[1]);
    let text = args[2..].join(" ");

    if languages::input_name(source).is_none() {
        bail!("Unknown source language: {}", source);
    }
    if languages::output_name(target).is_none() {
        bail!("Unknown target language: {}", target);
    }

    let config = Config::from_env()?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .context("Failed to create HTTP client")?;

    let service = TranslationService::new(Arc::new(OpenAiClient::new(client, &config)));

    let messages = build_messages(source, target, &text);
    println!("Prompt: {}", messages.last().map(|m| m.content.as_str()).unwrap_or(""));

    let translation = service.translate(source, target, &text).await?;
    println!("Translation: {}", translation);

    Ok(())
}
