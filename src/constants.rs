// Copyright 2025 DnsChat Contributors
// Licensed under GPL-3.0

/// Default DNS listen port
pub const DNS_PORT: u16 = 5353;

/// Default byte budget for a single TXT chunk
pub const DEFAULT_CHUNK_SIZE: usize = 200;

/// Largest chunk that still fits one TXT character-string on the wire
pub const MAX_CHUNK_SIZE: usize = 255;

/// Default upstream request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Environment variable holding the upstream API key
pub const ENV_API_KEY: &str = "DNSCHAT_API_KEY";
