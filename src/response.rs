use core::str::Utf8Error;
use heapless::Vec;

/// Raw bytes which were buffered by the transport at read time
///
/// There is no guarantee that the module already finished its reply. Nothing gets parsed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Response<const RX_SIZE: usize> {
    data: Vec<u8, RX_SIZE>,
}

impl<const RX_SIZE: usize> Response<RX_SIZE> {
    pub(crate) fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Unused capacity, which gets filled by the next read
    pub(crate) fn spare_capacity(&mut self) -> &mut [u8] {
        let len = self.data.len();
        // Zero filling is required, as heapless does not expose the uninitialized tail
        self.data.resize(RX_SIZE, 0).ok();
        &mut self.data[len..]
    }

    /// Keeps `count` bytes of the last filled spare capacity
    pub(crate) fn commit(&mut self, used: usize, count: usize) {
        self.data.truncate(used + count);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Response as UTF-8 text
    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        core::str::from_utf8(&self.data)
    }

    /// Non empty lines of the response. Lines which are not valid UTF-8 are skipped.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.data
            .split(|byte| *byte == b'\n')
            .filter_map(|line| core::str::from_utf8(line).ok())
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True if the buffer is exhausted, so more data may still be pending at the transport
    pub fn is_full(&self) -> bool {
        self.data.len() == RX_SIZE
    }
}
