//! HTTP header block decoder
//!
//! Reads `Name: Value` lines until the blank line that ends the header block.
//! Header names are lower-cased so lookups are case-insensitive; values are
//! stored exactly as received after the first colon, including any leading
//! space.
//!
//! The decoder is lenient with individual lines: a line without a colon, or
//! with an empty name or value, is skipped and decoding continues. Only a
//! receive failure or an early end of stream stops it.

use std::io::Read;

use tracing::trace;

use crate::codec::LineReader;
use crate::protocol::{Headers, ParseError};

/// Decoder for the header block that follows the request line.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeaderDecoder;

impl HeaderDecoder {
    /// Reads header lines from `lines` until the terminating blank line.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(headers))` once the blank line is read; the map may be empty
    /// - `Ok(None)` if the stream ends before the blank line, in which case the
    ///   headers read so far are dropped
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Io`] if the underlying read fails.
    pub fn decode<R: Read>(&self, lines: &mut LineReader<R>) -> Result<Option<Headers>, ParseError> {
        let mut headers = Headers::new();

        while let Some(line) = lines.next_line()? {
            if line.is_empty() {
                return Ok(Some(headers));
            }

            match parse_header_line(&line) {
                Some((name, value)) => {
                    headers.insert(name, value.to_string());
                }
                None => trace!(line = %line, "skip malformed header line"),
            }
        }

        Ok(None)
    }
}

/// Splits a header line on its first colon.
///
/// Returns the lower-cased name and the untrimmed value, or `None` if there is
/// no colon or either side is empty.
fn parse_header_line(line: &str) -> Option<(String, &str)> {
    let (name, value) = line.split_once(':')?;
    if name.is_empty() || value.is_empty() {
        return None;
    }

    Some((name.to_lowercase(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn decode(input: &str) -> Option<Headers> {
        let mut lines = LineReader::new(input.as_bytes());
        HeaderDecoder.decode(&mut lines).unwrap()
    }

    #[test]
    fn split_on_first_colon() {
        assert_eq!(parse_header_line("Host: 127.0.0.1:8080"), Some(("host".to_string(), " 127.0.0.1:8080")));
        assert_eq!(parse_header_line("X-Empty:"), None);
        assert_eq!(parse_header_line(": value"), None);
        assert_eq!(parse_header_line("X-Bad-Header"), None);
        assert_eq!(parse_header_line("X-Space: "), Some(("x-space".to_string(), " ")));
    }

    #[test]
    fn from_curl() {
        let str = indoc! {r##"
        Host: 127.0.0.1:8080
        User-Agent: curl/7.79.1
        Accept: */*

        "##};

        let headers = decode(str).unwrap();

        assert_eq!(headers.len(), 3);
        assert_eq!(headers.get("host").map(String::as_str), Some(" 127.0.0.1:8080"));
        assert_eq!(headers.get("user-agent").map(String::as_str), Some(" curl/7.79.1"));
        assert_eq!(headers.get("accept").map(String::as_str), Some(" */*"));
    }

    #[test]
    fn later_duplicate_wins() {
        let headers = decode("Content-Type: text/plain\r\nCONTENT-TYPE: text/html\r\n\r\n").unwrap();

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("content-type").map(String::as_str), Some(" text/html"));
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let headers = decode("X-Bad-Header\r\n: no-name\r\nX-No-Value:\r\nAccept: */*\r\n\r\n").unwrap();

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("accept").map(String::as_str), Some(" */*"));
    }

    #[test]
    fn blank_line_alone_is_empty_block() {
        assert_eq!(decode("\r\n"), Some(Headers::new()));
    }

    #[test]
    fn end_of_stream_before_blank_line() {
        assert_eq!(decode("Host: localhost\r\nAccept: */*\r\n"), None);
        assert_eq!(decode(""), None);
    }

    #[test]
    fn stops_at_blank_line() {
        let mut lines = LineReader::new(&b"Host: a\r\n\r\nbody"[..]);

        let headers = HeaderDecoder.decode(&mut lines).unwrap().unwrap();

        assert_eq!(headers.len(), 1);
        assert_eq!(lines.buffered(), b"body");
    }
}
