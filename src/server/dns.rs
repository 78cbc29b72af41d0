// Copyright 2025 DnsChat Contributors
// Licensed under GPL-3.0

//! DNS server answering TXT questions with chat completions

use crate::chat::ChatModel;
use crate::codec::{chunk_label, decode_qname, split_utf8_by_byte_limit};
use anyhow::{Context, Result};
use hickory_proto::op::{Header, ResponseCode};
use hickory_proto::rr::rdata::TXT;
use hickory_proto::rr::{Name, RData, Record, RecordType};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use hickory_server::ServerFuture;
use std::net::SocketAddr;

/// DNS request handler that answers TXT questions by asking the upstream
/// model and delegates everything else to the next handler.
///
/// The question name is the prompt (see [`decode_qname`]); the answer comes
/// back as one TXT record per chunk with a zero TTL so resolvers never
/// cache it and every query reaches the model again.
#[derive(Clone)]
pub struct ChatHandler<C, N> {
    chat: C,
    next: N,
    chunk_size: usize,
}

impl<C, N> ChatHandler<C, N>
where
    C: ChatModel + Unpin,
    N: RequestHandler,
{
    pub fn new(chat: C, next: N, chunk_size: usize) -> Self {
        Self {
            chat,
            next,
            chunk_size,
        }
    }
}

#[async_trait::async_trait]
impl<C, N> RequestHandler for ChatHandler<C, N>
where
    C: ChatModel + Unpin,
    N: RequestHandler,
{
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handler: R,
    ) -> ResponseInfo {
        if request.header().query_count() == 0 {
            return send_status(request, &mut response_handler, ResponseCode::FormErr).await;
        }

        let query = request.query();
        if query.query_type() != RecordType::TXT {
            return self.next.handle_request(request, response_handler).await;
        }

        // The lowered name loses the client's casing; decode the original.
        let qname = query.original().name().to_string();
        let prompt = decode_qname(&qname);
        tracing::debug!("TXT query from {}: {:?}", request.src(), prompt);

        if prompt.is_empty() {
            return send_status(request, &mut response_handler, ResponseCode::NXDomain).await;
        }

        let answer = match self.chat.chat(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Chat call failed for {:?}: {}", prompt, e);
                format!("Error: {}", e)
            }
        };

        let records = txt_answer_records(query.original().name().clone(), &answer, self.chunk_size);

        let mut header = Header::response_from_request(request.header());
        header.set_authoritative(true);
        header.set_response_code(ResponseCode::NoError);
        let response = MessageResponseBuilder::from_message_request(request).build(
            header,
            records.iter(),
            &[],
            &[],
            &[],
        );

        match response_handler.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                tracing::error!("Failed to send DNS response: {}", e);
                let mut header = Header::response_from_request(request.header());
                header.set_response_code(ResponseCode::ServFail);
                ResponseInfo::from(header)
            }
        }
    }
}

/// Terminal next handler: answers SERVFAIL for whatever reaches it.
///
/// Stands in when no forwarder is configured behind the chat handler, so
/// non-TXT questions still get a well-formed response.
#[derive(Clone)]
pub struct ChainEnd;

#[async_trait::async_trait]
impl RequestHandler for ChainEnd {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handler: R,
    ) -> ResponseInfo {
        send_status(request, &mut response_handler, ResponseCode::ServFail).await
    }
}

/// Send a headers-only response carrying `code`.
async fn send_status<R: ResponseHandler>(
    request: &Request,
    response_handler: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    let mut header = Header::response_from_request(request.header());
    header.set_response_code(code);
    let response = MessageResponseBuilder::from_message_request(request).build_no_records(header);

    match response_handler.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            tracing::error!("Failed to send DNS response: {}", e);
            let mut header = Header::response_from_request(request.header());
            header.set_response_code(ResponseCode::ServFail);
            ResponseInfo::from(header)
        }
    }
}

/// Chunk the answer text and wrap every chunk in a TXT record under the
/// question's name. TTL is zero: answers must never be cached.
fn txt_answer_records(name: Name, text: &str, chunk_size: usize) -> Vec<Record> {
    let chunks = split_utf8_by_byte_limit(text, chunk_size);
    let total = chunks.len();
    chunks
        .into_iter()
        .enumerate()
        .map(|(index, chunk)| {
            let label = chunk_label(&chunk, index, total);
            Record::from_rdata(name.clone(), 0, RData::TXT(TXT::new(vec![label])))
        })
        .collect()
}

/// Start the DNS server on the given address.
pub async fn run<C>(addr: SocketAddr, chat: C, chunk_size: usize) -> Result<()>
where
    C: ChatModel + Clone + Unpin,
{
    println!("DNS server starting on {}", addr);

    let handler = ChatHandler::new(chat, ChainEnd, chunk_size);
    let mut server = ServerFuture::new(handler);

    server.register_socket(
        tokio::net::UdpSocket::bind(&addr)
            .await
            .context("Failed to bind DNS UDP socket")?,
    );

    server.register_listener(
        tokio::net::TcpListener::bind(&addr)
            .await
            .context("Failed to bind DNS TCP socket")?,
        std::time::Duration::from_secs(5),
    );

    println!("✓ DNS server listening on {}\n", addr);

    server
        .block_until_done()
        .await
        .context("DNS server error")?;

    Ok(())
}
