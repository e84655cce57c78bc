//! Operand stack.

/// Slots allocated before the first push.
const INITIAL_CAPACITY: usize = 2;

/// Byte stack that doubles its storage when full.
#[derive(Debug)]
pub struct OperandStack {
    values: Vec<u8>,
}

impl Default for OperandStack {
    fn default() -> Self {
        Self::new()
    }
}

impl OperandStack {
    pub fn new() -> Self {
        Self {
            values: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    pub fn push(&mut self, value: u8) {
        if self.values.len() == self.values.capacity() {
            self.values.reserve_exact(self.values.capacity().max(1));
        }
        self.values.push(value);
    }

    pub fn pop(&mut self) -> Option<u8> {
        self.values.pop()
    }

    /// Top of the stack.
    pub fn peek(&self) -> Option<u8> {
        self.values.last().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// Contents, bottom first.
    pub fn as_slice(&self) -> &[u8] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.values
    }
}
