//! Growable output buffer for emitted bytes.

use tinystack_bytecode::MAX_PROGRAM_SIZE;

/// Appending would push the program past [`MAX_PROGRAM_SIZE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overflow;

/// Emitted bytes in program order.
///
/// Storage doubles when full, starting from a single byte. Offsets handed
/// out by [`append`](Self::append) stay valid for [`patch`](Self::patch)
/// for the lifetime of the buffer.
#[derive(Debug, Default)]
pub struct CodeBuffer {
    bytes: Vec<u8>,
}

impl CodeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a byte and return the offset it was written at.
    pub fn append(&mut self, byte: u8) -> Result<usize, Overflow> {
        let offset = self.bytes.len();
        if offset >= MAX_PROGRAM_SIZE {
            return Err(Overflow);
        }
        if offset == self.bytes.capacity() {
            self.bytes.reserve_exact(self.bytes.capacity().max(1));
        }
        self.bytes.push(byte);
        Ok(offset)
    }

    /// Offset the next appended byte will land at.
    #[inline]
    pub fn current_offset(&self) -> usize {
        self.bytes.len()
    }

    /// Overwrite a previously emitted byte.
    ///
    /// # Panics
    /// If `offset` was never handed out by `append`.
    pub fn patch(&mut self, offset: usize, byte: u8) {
        assert!(
            offset < self.bytes.len(),
            "patch offset {offset} past end of buffer ({})",
            self.bytes.len()
        );
        self.bytes[offset] = byte;
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
