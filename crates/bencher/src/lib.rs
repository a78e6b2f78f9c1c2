//! Request fixtures shared by the decoder benchmarks.

#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    group: TestGroup,
    file: TestFile,
}

impl TestCase {
    pub fn new(name: &'static str, group: TestGroup, file: TestFile) -> Self {
        Self { name, group, file }
    }

    /// A case whose input is handed to the decoder in a single read.
    pub fn whole(name: &'static str, file: TestFile) -> Self {
        Self::new(name, TestGroup::Whole, file)
    }

    /// A case whose input is handed to the decoder `fragment_size` bytes per read.
    pub fn fragmented(name: &'static str, file: TestFile, fragment_size: usize) -> Self {
        Self::new(name, TestGroup::Fragmented(fragment_size), file)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> TestGroup {
        self.group
    }

    pub fn file(&self) -> &TestFile {
        &self.file
    }

    /// Bytes served per `read` call for this case.
    pub fn fragment_size(&self) -> usize {
        match self.group {
            TestGroup::Whole => usize::MAX,
            TestGroup::Fragmented(size) => size,
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct TestFile {
    file_name: &'static str,
    content: &'static [u8],
}

impl TestFile {
    pub const fn new(file_name: &'static str, content: &'static [u8]) -> Self {
        Self { file_name, content }
    }

    pub fn content(&self) -> &'static [u8] {
        self.content
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }

    /// Returns a reader over the content that serves at most `fragment_size` bytes per read.
    pub fn reader(&self, fragment_size: usize) -> FragmentedReader {
        FragmentedReader { data: self.content, fragment_size: fragment_size.max(1) }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TestGroup {
    Whole,
    Fragmented(usize),
}

/// [`std::io::Read`] over static bytes with a cap on each read.
#[derive(Debug)]
pub struct FragmentedReader {
    data: &'static [u8],
    fragment_size: usize,
}

impl std::io::Read for FragmentedReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let amt = self.data.len().min(buf.len()).min(self.fragment_size);
        buf[..amt].copy_from_slice(&self.data[..amt]);
        self.data = &self.data[amt..];
        Ok(amt)
    }
}
