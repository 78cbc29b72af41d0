// Copyright 2025 DnsChat Contributors
// Licensed under GPL-3.0

//! DnsChat - chat completions over DNS
//!
//! A DNS server that treats TXT question names as natural-language prompts
//! and answers them with TXT records carrying the response of an
//! OpenAI-compatible chat endpoint. Ask it things with stock DNS tooling:
//!
//! ```text
//! dig @127.0.0.1 -p 5353 "what.is.the.capital.of.france" TXT +short
//! ```

pub mod chat;
pub mod codec;
pub mod config;
pub mod constants;
pub mod server;

pub use constants::*;

// Re-export commonly used types
pub use chat::{ChatError, ChatModel, OpenAiClient};
pub use codec::{chunk_label, decode_qname, split_utf8_by_byte_limit};
pub use config::{api_key_from_env, Config};
pub use server::{ChainEnd, ChatHandler};

/// Common error type for DnsChat operations
pub type Result<T> = std::result::Result<T, anyhow::Error>;
