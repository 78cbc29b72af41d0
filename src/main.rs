// Copyright 2025 DnsChat Contributors
// Licensed under GPL-3.0

//! DnsChat CLI application

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

#[derive(Parser)]
#[command(name = "dnschat")]
#[command(about = "Ask a language model questions over DNS TXT queries", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the DNS server
    Serve(cli::serve::ServeArgs),
    /// Send a one-shot prompt to the chat endpoint
    Ask(cli::ask::AskArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Without -v: only WARN and ERROR from dnschat (quiet mode)
    // With -v: INFO, WARN, ERROR from dnschat, plus per-query DEBUG
    // With RUST_LOG set: whatever the caller asked for
    if std::env::var("RUST_LOG").is_err() {
        use tracing_subscriber::EnvFilter;

        let filter = if cli.verbose {
            EnvFilter::new("dnschat=debug")
        } else {
            EnvFilter::new("dnschat=warn")
        };

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_target(true)
            .init();
    }

    // Execute command
    match cli.command {
        Commands::Serve(args) => {
            cli::serve::execute(args).await?;
        }
        Commands::Ask(args) => {
            cli::ask::execute(args).await?;
        }
    }

    Ok(())
}
