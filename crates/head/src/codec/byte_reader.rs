//! Buffered single-byte access to a blocking byte source.
//!
//! The header tokenizer inspects input one byte at a time to find line
//! terminators. [`ByteReader`] keeps that from turning into one `read` call per
//! byte: the internal buffer is refilled lazily, one `read` per buffer's worth
//! of input.

use std::io::{self, Read};

use bytes::{Buf, BytesMut};
use tracing::trace;

/// Default capacity in bytes of the receive buffer
pub const DEFAULT_BUFFER_CAPACITY: usize = 1024;

/// Serves bytes from a [`Read`] source through a fixed-capacity buffer.
///
/// The unread part of the buffer is the window between the read cursor and the
/// number of bytes filled by the last `read`; it never exceeds the capacity.
/// Once it is empty the next [`next_byte`](Self::next_byte) call performs a
/// single blocking `read`.
#[derive(Debug)]
pub struct ByteReader<R> {
    reader: R,
    buf: BytesMut,
    capacity: usize,
}

impl<R: Read> ByteReader<R> {
    pub fn new(reader: R) -> Self {
        Self::with_capacity(reader, DEFAULT_BUFFER_CAPACITY)
    }

    /// Creates a reader with a receive buffer of `capacity` bytes (at least 1).
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { reader, buf: BytesMut::with_capacity(capacity), capacity }
    }

    /// Returns the next byte from the source.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(byte))` for the next byte of input
    /// - `Ok(None)` if the peer closed the stream; later calls read again and keep
    ///   returning `Ok(None)` while the source stays at end of stream
    /// - `Err(_)` if the underlying `read` failed
    pub fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if !self.buf.has_remaining() && self.fill_buf()? == 0 {
            return Ok(None);
        }

        Ok(Some(self.buf.get_u8()))
    }

    /// Returns the bytes received but not yet handed out.
    ///
    /// After a request head is decoded these are the first bytes following the
    /// blank line, e.g. the start of a body or of a pipelined request.
    pub fn buffered(&self) -> &[u8] {
        &self.buf
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Returns the underlying source. Buffered bytes are dropped.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn fill_buf(&mut self) -> io::Result<usize> {
        self.buf.clear();
        self.buf.resize(self.capacity, 0);

        loop {
            match self.reader.read(&mut self.buf[..]) {
                Ok(n) => {
                    self.buf.truncate(n);
                    trace!(read_size = n, capacity = self.capacity, "refilled receive buffer");
                    return Ok(n);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.buf.clear();
                    return Err(e);
                }
            }
        }
    }
}
