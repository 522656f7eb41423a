use thiserror::Error;

use crate::http::request::{Method, Request};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The peer closed the connection without sending anything.
    #[error("no data received")]
    EmptyRequest,
    #[error("malformed request line")]
    MalformedRequest,
    /// The read limit was reached before the request line ended.
    #[error("request line exceeds {limit} bytes")]
    RequestTooLarge { limit: usize },
    /// No line terminator yet; more bytes are needed.
    #[error("incomplete request line")]
    Incomplete,
}

/// Parses the request line at the start of `buf`.
///
/// Only the first line matters: anything after it (headers, body) is ignored.
/// Returns `Incomplete` until a `\n` has arrived.
pub fn parse_request_line(buf: &[u8]) -> Result<Request, ParseError> {
    if buf.is_empty() {
        return Err(ParseError::EmptyRequest);
    }

    let line_end = buf
        .iter()
        .position(|&b| b == b'\n')
        .ok_or(ParseError::Incomplete)?;

    parse_line(&buf[..line_end])
}

/// Like [`parse_request_line`], for a buffer that will not grow any more
/// because the peer has finished sending. An unterminated line is taken as-is.
pub fn parse_final(buf: &[u8]) -> Result<Request, ParseError> {
    match parse_request_line(buf) {
        Err(ParseError::Incomplete) => parse_line(buf),
        other => other,
    }
}

fn parse_line(line: &[u8]) -> Result<Request, ParseError> {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    let line = std::str::from_utf8(line).map_err(|_| ParseError::MalformedRequest)?;

    let mut parts = line.split_whitespace();

    let method = parts.next().ok_or(ParseError::MalformedRequest)?;
    let target = parts.next().ok_or(ParseError::MalformedRequest)?;
    let version = parts.next().ok_or(ParseError::MalformedRequest)?;

    Ok(Request {
        method: Method::from(method),
        target: target.to_string(),
        version: version.to_string(),
    })
}
