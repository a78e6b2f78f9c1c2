//! Scripted byte source for decoder tests.

use std::io::{self, Read};

/// A [`Read`] implementation that hands out its data in bounded fragments.
#[derive(Debug)]
pub(crate) struct MockReader {
    data: Vec<u8>,
    pos: usize,
    fragment_size: usize,
    read_calls: usize,
    end_error: Option<io::ErrorKind>,
    interrupt_pending: bool,
}

impl MockReader {
    pub(crate) fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            pos: 0,
            fragment_size: usize::MAX,
            read_calls: 0,
            end_error: None,
            interrupt_pending: false,
        }
    }

    /// Limits every `read` to at most `fragment_size` bytes.
    pub(crate) fn fragmented(mut self, fragment_size: usize) -> Self {
        self.fragment_size = fragment_size.max(1);
        self
    }

    /// Fails with `kind` once the data is exhausted instead of reporting end of stream.
    pub(crate) fn fail_at_end(mut self, kind: io::ErrorKind) -> Self {
        self.end_error = Some(kind);
        self
    }

    /// Makes the first `read` fail with `ErrorKind::Interrupted`.
    pub(crate) fn interrupt_first(mut self) -> Self {
        self.interrupt_pending = true;
        self
    }

    pub(crate) fn read_calls(&self) -> usize {
        self.read_calls
    }
}

impl Read for MockReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read_calls += 1;

        if self.interrupt_pending {
            self.interrupt_pending = false;
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }

        let remaining = &self.data[self.pos..];
        if remaining.is_empty() {
            if let Some(kind) = self.end_error {
                return Err(io::Error::new(kind, "mock receive failure"));
            }
        }

        let amt = remaining.len().min(buf.len()).min(self.fragment_size);
        buf[..amt].copy_from_slice(&remaining[..amt]);
        self.pos += amt;
        Ok(amt)
    }
}
