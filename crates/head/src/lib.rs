//! A blocking micro HTTP request head decoder
//!
//! This crate reads HTTP/1.x request lines and header blocks from any blocking
//! byte source implementing [`std::io::Read`], typically a `TcpStream`. It is
//! the parsing core of a small server: socket handling, dispatch and response
//! writing stay with the caller.
//!
//! # Features
//!
//! - Buffered reads: one `read` call per buffer's worth of input, not per byte
//! - CRLF and bare LF line endings
//! - Case-insensitive header names, last occurrence wins
//! - Lenient header parsing: malformed header lines are skipped
//! - End of stream reported as `Ok(None)`, distinct from errors
//! - Strict opt-in keep-alive check
//!
//! # Example
//!
//! ```no_run
//! use std::io::Write;
//! use std::net::TcpListener;
//! use micro_http_head::codec::RequestDecoder;
//! use tracing::{error, info};
//!
//! let listener = TcpListener::bind("127.0.0.1:8080").unwrap();
//! for stream in listener.incoming() {
//!     let stream = stream.unwrap();
//!     let mut writer = stream.try_clone().unwrap();
//!     let mut decoder = RequestDecoder::new(stream);
//!
//!     loop {
//!         match decoder.next_request() {
//!             Ok(Some(head)) => {
//!                 info!(method = head.method(), path = head.path(), "receive request");
//!                 writer.write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n").unwrap();
//!                 if !head.keep_alive() {
//!                     break;
//!                 }
//!             }
//!             Ok(None) => break,
//!             Err(e) => {
//!                 error!(cause = %e, "can't receive next request");
//!                 break;
//!             }
//!         }
//!     }
//! }
//! ```
//!
//! # Architecture
//!
//! - [`codec`]: Byte reader, line reader and request/header decoders
//! - [`protocol`]: Request head, header map and error types
//!
//! # Limitations
//!
//! - Request line and headers only; bodies are left unread in the receive buffer
//! - No URL decoding and no multi-value headers
//! - HTTP/1.x only, no TLS
//! - No internal timeouts; set them on the socket

pub mod codec;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
