//! Line splitting on top of [`ByteReader`].

use std::io::Read;

use crate::codec::ByteReader;
use crate::protocol::ParseError;

const LF: u8 = b'\n';
const CR: u8 = b'\r';

/// Reads LF-terminated lines, tolerating both `\r\n` and bare `\n`.
///
/// Bytes are taken one at a time and mapped to the character of the same code
/// point. Control bytes up to and including CR are dropped, which removes the CR
/// of a CRLF pair without any lookahead.
#[derive(Debug)]
pub struct LineReader<R> {
    bytes: ByteReader<R>,
}

impl<R: Read> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self { bytes: ByteReader::new(reader) }
    }

    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self { bytes: ByteReader::with_capacity(reader, capacity) }
    }

    /// Reads the next line without its terminator.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(line))` for a terminated line, possibly empty
    /// - `Ok(Some(line))` for trailing unterminated text when the stream ends
    /// - `Ok(None)` if the stream ends before any character of the line was read
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Io`] as soon as the underlying read fails; the
    /// partial line is discarded.
    pub fn next_line(&mut self) -> Result<Option<String>, ParseError> {
        let mut line = String::new();

        loop {
            match self.bytes.next_byte()? {
                Some(LF) => return Ok(Some(line)),
                Some(byte) if byte > CR => line.push(char::from(byte)),
                Some(_) => {}
                None if line.is_empty() => return Ok(None),
                None => return Ok(Some(line)),
            }
        }
    }

    /// See [`ByteReader::buffered`].
    pub fn buffered(&self) -> &[u8] {
        self.bytes.buffered()
    }

    pub fn get_ref(&self) -> &R {
        self.bytes.get_ref()
    }

    pub fn get_mut(&mut self) -> &mut R {
        self.bytes.get_mut()
    }

    pub fn into_inner(self) -> R {
        self.bytes.into_inner()
    }
}

impl<R: Read> From<ByteReader<R>> for LineReader<R> {
    fn from(bytes: ByteReader<R>) -> Self {
        Self { bytes }
    }
}
