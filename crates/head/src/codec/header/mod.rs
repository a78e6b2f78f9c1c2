//! HTTP header block decoding
//!
//! # Components
//!
//! - [`HeaderDecoder`]: Decodes `Name: Value` lines into a [`Headers`](crate::protocol::Headers) map
//!   - Case-insensitive names, last occurrence wins
//!   - Malformed lines skipped, not fatal
//!   - Terminates on the first blank line

mod header_decoder;

pub use header_decoder::HeaderDecoder;
