//! Core HTTP protocol types produced by the decoder.
//!
//! # Architecture
//!
//! - **Request Head** ([`request`]): the decoded status line and header block
//!   - [`RequestHead`]: method, path and header map of one request
//!
//! - **Headers** ([`header`]): header map and header predicates
//!   - [`Headers`]: lower-cased name to value, last occurrence wins
//!   - [`supports_keep_alive`]: strict opt-in `Connection: keep-alive` check
//!
//! - **Error Handling** ([`error`]): typed decode failures
//!   - [`ParseError`]: receive failures and malformed status lines
//!
//! A cleanly closed connection is not an error. Decoders report it as `Ok(None)`
//! so the caller can retire the connection without logging a failure.

mod header;
pub use header::Headers;
pub use header::supports_keep_alive;

mod request;
pub use request::RequestHead;

mod error;
pub use error::ParseError;
