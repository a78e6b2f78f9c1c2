use std::io;
use thiserror::Error;

/// Failure while decoding a request head.
///
/// End of stream is not represented here: decoders report a cleanly closed
/// connection as `Ok(None)`.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid status line: {line}")]
    InvalidStatusLine { line: String },

    #[error("invalid http method")]
    InvalidMethod,

    #[error("invalid http uri")]
    InvalidUri,

    #[error("invalid header: {reason}")]
    InvalidHeader { reason: String },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl ParseError {
    pub fn invalid_status_line<S: ToString>(line: S) -> Self {
        Self::InvalidStatusLine { line: line.to_string() }
    }

    pub fn invalid_header<S: ToString>(str: S) -> Self {
        Self::InvalidHeader { reason: str.to_string() }
    }

    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }

    /// Returns true if the failure came from the underlying byte source.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
