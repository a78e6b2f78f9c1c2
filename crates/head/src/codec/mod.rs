//! HTTP codec module for decoding request heads from a blocking byte source
//!
//! The codec is layered, each layer owning the one below it:
//!
//! - [`ByteReader`]: Lazily refilled receive buffer, serving one byte at a time
//! - [`LineReader`]: Accumulates bytes into CRLF or LF terminated lines
//! - [`HeaderDecoder`]: Turns header lines into a [`Headers`](crate::protocol::Headers) map
//! - [`RequestDecoder`]: Status line plus header block, one request at a time
//!
//! # Example
//!
//! ```
//! use micro_http_head::codec::RequestDecoder;
//!
//! let mut decoder = RequestDecoder::new(&b"GET /index.html HTTP/1.1\r\nHost: localhost\r\n\r\n"[..]);
//! let head = decoder.next_request().unwrap().unwrap();
//! assert_eq!(head.method(), "GET");
//! assert_eq!(head.path(), "/index.html");
//! assert_eq!(head.header("Host"), Some(" localhost"));
//!
//! // the peer has nothing more to send
//! assert!(decoder.next_request().unwrap().is_none());
//! ```
//!
//! # Features
//!
//! - Fragmentation agnostic: results do not depend on how reads are split
//! - Never consumes bytes past the blank line that ends a header block
//! - Lenient header parsing: malformed header lines are skipped

mod byte_reader;
mod header;
mod line_reader;
mod request_decoder;

#[cfg(test)]
mod mock;

pub use byte_reader::{ByteReader, DEFAULT_BUFFER_CAPACITY};
pub use header::HeaderDecoder;
pub use line_reader::LineReader;
pub use request_decoder::RequestDecoder;
