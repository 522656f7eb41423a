use std::net::SocketAddr;
use std::sync::Arc;

use bytes::{BufMut, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::config::Config;
use crate::http::parser::{parse_final, parse_request_line, ParseError};
use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::static_files::{self, Resolver};

/// One client connection, driven from the first byte read to close.
pub struct Connection<S> {
    stream: S,
    peer: SocketAddr,
    buffer: BytesMut,
    max_request_bytes: usize,
    resolver: Resolver,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Parsed(Request),
    Invalid(ParseError),
    Dispatched(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, peer: SocketAddr, config: Arc<Config>) -> Self {
        let max_request_bytes = config.server.max_request_bytes;
        Self {
            stream,
            peer,
            buffer: BytesMut::with_capacity(max_request_bytes),
            max_request_bytes,
            resolver: Resolver::new(config.static_files.root.clone()),
            state: ConnectionState::Reading,
        }
    }

    /// Serves one request, then closes the write side. The close happens even
    /// when reading or writing fails.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let result = self.drive().await;

        if let Err(e) = self.stream.shutdown().await {
            tracing::debug!(peer = %self.peer, error = %e, "Shutdown after response failed");
        }

        result
    }

    async fn drive(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        Ok(req) => ConnectionState::Parsed(req),
                        Err(e) => ConnectionState::Invalid(e),
                    };
                }

                ConnectionState::Parsed(req) => {
                    let response = handle_request(&req, &self.resolver).await;

                    tracing::info!(
                        peer = %self.peer,
                        method = %req.method,
                        request_target = %req.target,
                        version = %req.version,
                        status = response.status.as_u16(),
                        bytes = response.body.len(),
                        "Request served"
                    );

                    self.state = ConnectionState::Dispatched(ResponseWriter::new(&response));
                }

                ConnectionState::Invalid(err) => {
                    tracing::warn!(peer = %self.peer, error = %err, "Rejecting request");

                    let response = Response::bad_request(rejection_reason(&err));
                    self.state = ConnectionState::Dispatched(ResponseWriter::new(&response));
                }

                ConnectionState::Dispatched(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => break,
            }
        }

        Ok(())
    }

    /// Reads until the request line is complete, the peer stops sending, or
    /// the read limit is hit. The outer error is I/O; the inner is what gets
    /// reported to the client.
    async fn read_request(&mut self) -> anyhow::Result<Result<Request, ParseError>> {
        loop {
            match parse_request_line(&self.buffer) {
                Ok(req) => return Ok(Ok(req)),
                // Nothing read yet, or no line terminator yet
                Err(ParseError::EmptyRequest) | Err(ParseError::Incomplete) => {}
                Err(e) => return Ok(Err(e)),
            }

            let remaining = self.max_request_bytes.saturating_sub(self.buffer.len());
            if remaining == 0 {
                return Ok(Err(ParseError::RequestTooLarge {
                    limit: self.max_request_bytes,
                }));
            }

            let mut limited = (&mut self.buffer).limit(remaining);
            let n = self.stream.read_buf(&mut limited).await?;

            if n == 0 {
                // Client finished sending
                return Ok(parse_final(&self.buffer));
            }
        }
    }
}

/// Picks the response for a well-formed request.
pub async fn handle_request(req: &Request, resolver: &Resolver) -> Response {
    if req.method != Method::GET {
        return Response::not_implemented();
    }

    match resolver.resolve(&req.target).await {
        Ok(target) => static_files::respond(&target).await,
        Err(e) => {
            tracing::warn!(error = %e, "Refusing target outside document root");
            Response::not_found("File not found")
        }
    }
}

fn rejection_reason(err: &ParseError) -> &'static str {
    match err {
        ParseError::EmptyRequest => "No data received",
        ParseError::RequestTooLarge { .. } => "Request line too long",
        ParseError::MalformedRequest | ParseError::Incomplete => "Malformed request line",
    }
}
