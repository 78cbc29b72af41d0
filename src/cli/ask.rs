// Copyright 2025 DnsChat Contributors
// Licensed under GPL-3.0

//! `ask` command: one-shot prompt against the configured endpoint
//!
//! Bypasses DNS entirely; useful to check credentials and endpoint
//! reachability before pointing clients at the server.

use anyhow::{bail, Result};
use clap::Args;
use dnschat::constants::DEFAULT_TIMEOUT_SECS;
use dnschat::{api_key_from_env, ChatModel, OpenAiClient};

#[derive(Args)]
pub struct AskArgs {
    /// OpenAI-compatible chat completions URL
    #[arg(long)]
    endpoint: String,
    /// Model identifier sent with the request
    #[arg(long)]
    model: String,
    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
    /// The question to ask
    #[arg(required = true)]
    prompt: Vec<String>,
}

pub async fn execute(args: AskArgs) -> Result<()> {
    let prompt = args.prompt.join(" ");
    let prompt = prompt.trim();
    if prompt.is_empty() {
        bail!("Prompt must not be empty");
    }

    let api_key = api_key_from_env()?;
    let client = OpenAiClient::new(args.endpoint, args.model, api_key, args.timeout)?;

    let answer = client.chat(prompt).await?;
    println!("{}", answer);

    Ok(())
}
