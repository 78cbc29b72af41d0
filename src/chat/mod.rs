// Copyright 2025 DnsChat Contributors
// Licensed under GPL-3.0

//! Upstream chat capability: send a prompt, get text back

pub mod openai;

pub use openai::OpenAiClient;

use async_trait::async_trait;
use thiserror::Error;

/// Failure modes of a chat call.
///
/// These are never escalated to DNS-level failures; the dispatcher renders
/// them as an `Error: ...` TXT answer so the querying client always gets a
/// readable result on the channel it asked on.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The HTTP request could not be completed (connect, timeout, body)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The endpoint answered with a non-2xx status
    #[error("upstream status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },
    /// The endpoint answered 2xx but the body was not a chat completion
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    /// The completion carried no choices
    #[error("no choices in response")]
    NoChoices,
}

/// Interface to the upstream model.
///
/// Implementations must respect the timeout they were configured with and
/// return either the completion text or a descriptive error. The dispatcher
/// makes exactly one call per query; retry policy, if any, lives behind
/// this trait.
#[async_trait]
pub trait ChatModel: Send + Sync + 'static {
    async fn chat(&self, prompt: &str) -> Result<String, ChatError>;
}
