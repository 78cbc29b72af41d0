// Copyright 2025 DnsChat Contributors
// Licensed under GPL-3.0

//! CLI command implementations

pub mod ask;
pub mod serve;
