//! HTTP request head decoder
//!
//! This module reads the request line and header block of HTTP/1.x requests from
//! a blocking byte source.
//!
//! # Components
//!
//! - [`RequestDecoder`]: Main decoder that coordinates status line and header parsing
//! - Line splitting: Uses [`LineReader`] on top of a buffered [`ByteReader`](crate::codec::ByteReader)
//! - Header parsing: Uses [`HeaderDecoder`] for the header block
//!
//! # Example
//!
//! ```no_run
//! use micro_http_head::codec::RequestDecoder;
//! use std::net::TcpStream;
//!
//! let stream = TcpStream::connect("127.0.0.1:8080").unwrap();
//! let mut decoder = RequestDecoder::new(stream);
//! while let Some(head) = decoder.next_request().unwrap() {
//!     println!("{} {}", head.method(), head.path());
//!     if !head.keep_alive() {
//!         break;
//!     }
//! }
//! ```

use std::io::Read;

use tracing::debug;

use crate::codec::LineReader;
use crate::codec::header::HeaderDecoder;
use crate::ensure;
use crate::protocol::{Headers, ParseError, RequestHead};

/// A decoder for HTTP request heads read from one connection.
///
/// The decoder owns the connection's receive buffer. Nothing else is kept
/// between requests, so a single decoder can be driven through any number of
/// requests on a persistent connection.
///
/// # Outcomes
///
/// Every step returns `Result<Option<_>, ParseError>`:
/// - `Ok(Some(_))`: the step completed
/// - `Ok(None)`: the peer closed the connection; not an error
/// - `Err(_)`: a receive failure or a malformed status line
#[derive(Debug)]
pub struct RequestDecoder<R> {
    lines: LineReader<R>,
    header_decoder: HeaderDecoder,
}

impl<R: Read> RequestDecoder<R> {
    /// Creates a new `RequestDecoder` with the default receive buffer capacity.
    pub fn new(reader: R) -> Self {
        Self { lines: LineReader::new(reader), header_decoder: HeaderDecoder }
    }

    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self { lines: LineReader::with_capacity(reader, capacity), header_decoder: HeaderDecoder }
    }

    /// Decodes the next request line and header block.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidStatusLine`] if the request line has fewer than
    /// three space-separated tokens, or [`ParseError::Io`] if reading fails.
    pub fn next_request(&mut self) -> Result<Option<RequestHead>, ParseError> {
        let Some((method, path)) = self.next_status_line()? else {
            return Ok(None);
        };

        let Some(headers) = self.next_headers()? else {
            return Ok(None);
        };

        debug!(method = %method, path = %path, header_count = headers.len(), "decoded request head");
        Ok(Some(RequestHead::new(method, path, headers)))
    }

    /// Reads the request line and returns its method and path tokens.
    pub fn next_status_line(&mut self) -> Result<Option<(String, String)>, ParseError> {
        match self.lines.next_line()? {
            Some(line) => parse_status_line(&line).map(Some),
            None => Ok(None),
        }
    }

    /// Reads the header block up to and including its terminating blank line.
    pub fn next_headers(&mut self) -> Result<Option<Headers>, ParseError> {
        self.header_decoder.decode(&mut self.lines)
    }

    /// Bytes already received past the last decoded line, such as the start of a body.
    pub fn buffered(&self) -> &[u8] {
        self.lines.buffered()
    }

    pub fn get_ref(&self) -> &R {
        self.lines.get_ref()
    }

    pub fn get_mut(&mut self) -> &mut R {
        self.lines.get_mut()
    }

    pub fn into_inner(self) -> R {
        self.lines.into_inner()
    }
}

/// Yields request heads until the peer closes the connection.
impl<R: Read> Iterator for RequestDecoder<R> {
    type Item = Result<RequestHead, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_request().transpose()
    }
}

/// Splits a request line such as `GET /index.html HTTP/1.1` on single spaces.
///
/// Runs of spaces produce empty tokens, they are not collapsed. Tokens after
/// the path are ignored.
fn parse_status_line(line: &str) -> Result<(String, String), ParseError> {
    let tokens: Vec<&str> = line.split(' ').collect();
    ensure!(tokens.len() >= 3, ParseError::invalid_status_line(line));

    Ok((tokens[0].to_string(), tokens[1].to_string()))
}
