// Copyright 2025 DnsChat Contributors
// Licensed under GPL-3.0

//! DNS server front end

pub mod dns;

pub use dns::{run, ChainEnd, ChatHandler};
