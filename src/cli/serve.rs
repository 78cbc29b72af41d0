// Copyright 2025 DnsChat Contributors
// Licensed under GPL-3.0

//! `serve` command: run the DNS server

use anyhow::Result;
use clap::Args;
use dnschat::{api_key_from_env, Config, OpenAiClient};
use std::net::{IpAddr, SocketAddr};

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0")]
    bind: IpAddr,
    /// UDP/TCP port to listen on
    #[arg(long, default_value = "5353")]
    port: u16,
    /// OpenAI-compatible chat completions URL
    #[arg(long)]
    endpoint: String,
    /// Model identifier sent with every request
    #[arg(long)]
    model: String,
    /// Maximum bytes per TXT chunk
    #[arg(long, default_value = "200")]
    chunk_size: usize,
    /// Upstream request timeout in seconds
    #[arg(long, default_value = "15")]
    timeout: u64,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = Config {
        endpoint: args.endpoint,
        model: args.model,
        chunk_size: args.chunk_size,
        timeout_secs: args.timeout,
    };
    config.validate()?;
    let api_key = api_key_from_env()?;

    println!("Starting DnsChat server...");
    println!("Endpoint: {}", config.endpoint);
    println!("Model: {}", config.model);
    println!("Chunk size: {} bytes", config.chunk_size);
    println!("Timeout: {}s\n", config.timeout_secs);

    let client = OpenAiClient::new(
        config.endpoint.clone(),
        config.model.clone(),
        api_key,
        config.timeout_secs,
    )?;

    let addr = SocketAddr::new(args.bind, args.port);

    tokio::select! {
        result = dnschat::server::run(addr, client, config.chunk_size) => {
            eprintln!("DNS server exited: {:?}", result);
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\n\nShutting down server...");
        }
    }

    println!("Server stopped.");

    Ok(())
}
