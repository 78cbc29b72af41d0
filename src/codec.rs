// Copyright 2025 DnsChat Contributors
// Licensed under GPL-3.0

//! Conversion between DNS query names and free text

use crate::constants::DEFAULT_CHUNK_SIZE;

/// Decode a DNS query name into a user prompt.
///
/// The name arrives in its textual form: dot-joined labels with special
/// bytes escaped as `\DDD` (three decimal digits) or `\X` (single escaped
/// byte), plus the trailing root dot. Label separators become spaces, so
/// `what\032is\032up.` and `what.is.up.` both decode to `what is up`.
///
/// Decoding is total: anything that is not a recognizable escape is copied
/// through verbatim rather than rejected, since DNS clients in the wild are
/// inconsistent about escaping. Decoded bytes that do not form valid UTF-8
/// are replaced with U+FFFD.
pub fn decode_qname(qname: &str) -> String {
    let qname = qname.strip_suffix('.').unwrap_or(qname);
    let bytes = qname.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let ch = bytes[i];
        if ch == b'\\' {
            if i + 3 < bytes.len() {
                let (d1, d2, d3) = (bytes[i + 1], bytes[i + 2], bytes[i + 3]);
                if d1.is_ascii_digit() && d2.is_ascii_digit() && d3.is_ascii_digit() {
                    let v = u32::from(d1 - b'0') * 100
                        + u32::from(d2 - b'0') * 10
                        + u32::from(d3 - b'0');
                    if v <= 255 {
                        out.push(v as u8);
                        i += 4;
                        continue;
                    }
                }
            }
            // Not a \DDD escape; the next byte is literal (covers \. and \\).
            if i + 1 < bytes.len() {
                out.push(bytes[i + 1]);
                i += 2;
                continue;
            }
        }
        if ch == b'.' {
            out.push(b' ');
        } else {
            out.push(ch);
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).trim().to_string()
}

/// Split text into chunks of at most `limit` bytes without splitting a
/// UTF-8 code point.
///
/// Always returns at least one chunk: empty text yields a single empty
/// chunk so a reply carries at least one record. A `limit` of zero falls
/// back to [`DEFAULT_CHUNK_SIZE`]. A code point that is by itself larger
/// than `limit` cannot be represented and is dropped.
pub fn split_utf8_by_byte_limit(text: &str, limit: usize) -> Vec<String> {
    let limit = if limit == 0 { DEFAULT_CHUNK_SIZE } else { limit };
    let mut chunks = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        let len = ch.len_utf8();
        if len > limit {
            continue;
        }
        if current.len() + len > limit {
            chunks.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    if chunks.is_empty() {
        chunks.push(String::new());
    }
    chunks
}

/// Build the record content for one chunk.
///
/// Multi-chunk answers get a 1-indexed `[i/N] ` prefix so clients can
/// reassemble them in order; a lone chunk is passed through untouched.
pub fn chunk_label(chunk: &str, index: usize, total: usize) -> String {
    if total <= 1 {
        chunk.to_string()
    } else {
        format!("[{}/{}] {}", index + 1, total, chunk)
    }
}
