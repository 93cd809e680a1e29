use core::fmt;
use core::ops::Deref;

/// Byte storage behind a [`LineBuffer`]
///
/// Implemented for fixed-capacity `heapless::Vec<u8, N>` and, with the
/// `alloc` feature, for the growable `alloc::vec::Vec<u8>`.
pub trait LineStorage: Default {
    /// Append a byte, handing it back if the storage is full
    fn push_byte(&mut self, byte: u8) -> Result<(), u8>;
    /// Remove and return the last byte
    fn pop_byte(&mut self) -> Option<u8>;
    /// Shorten the storage to `len` bytes
    fn truncate_to(&mut self, len: usize);
    /// Stored bytes
    fn bytes(&self) -> &[u8];
}

impl<const N: usize> LineStorage for heapless::Vec<u8, N> {
    fn push_byte(&mut self, byte: u8) -> Result<(), u8> {
        self.push(byte)
    }

    fn pop_byte(&mut self) -> Option<u8> {
        self.pop()
    }

    fn truncate_to(&mut self, len: usize) {
        self.truncate(len);
    }

    fn bytes(&self) -> &[u8] {
        self.as_slice()
    }
}

#[cfg(feature = "alloc")]
impl LineStorage for alloc::vec::Vec<u8> {
    fn push_byte(&mut self, byte: u8) -> Result<(), u8> {
        self.push(byte);
        Ok(())
    }

    fn pop_byte(&mut self) -> Option<u8> {
        self.pop()
    }

    fn truncate_to(&mut self, len: usize) {
        self.truncate(len);
    }

    fn bytes(&self) -> &[u8] {
        self.as_slice()
    }
}

/// Line being edited: append and erase happen at the tail only
pub struct LineBuffer<S: LineStorage> {
    storage: S,
}

impl<S: LineStorage> LineBuffer<S> {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self {
            storage: S::default(),
        }
    }

    /// Append a byte, handing it back if the storage is full
    pub fn push(&mut self, byte: u8) -> Result<(), u8> {
        self.storage.push_byte(byte)
    }

    /// Drop the last byte. Returns `false` on an empty buffer.
    pub fn erase_last(&mut self) -> bool {
        self.storage.pop_byte().is_some()
    }

    pub fn len(&self) -> usize {
        self.storage.bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.storage.bytes()
    }

    /// Consume the buffer into a line with surrounding whitespace removed
    pub fn finish(mut self) -> Line<S> {
        let bytes = self.storage.bytes();
        let end = bytes
            .iter()
            .rposition(|b| !b.is_ascii_whitespace())
            .map_or(0, |i| i + 1);
        let start = bytes[..end]
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .unwrap_or(end);

        self.storage.truncate_to(end);
        Line {
            storage: self.storage,
            start,
        }
    }
}

impl<S: LineStorage> Default for LineBuffer<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: LineStorage> fmt::Debug for LineBuffer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineBuffer")
            .field("len", &self.len())
            .finish()
    }
}

/// A finished, trimmed input line
///
/// Never contains `\r` or `\n`. Only printable ASCII is ever stored, so
/// the contents are always valid UTF-8.
pub struct Line<S: LineStorage> {
    storage: S,
    start: usize,
}

impl<S: LineStorage> Line<S> {
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage.bytes()[self.start..]
    }

    pub fn as_str(&self) -> &str {
        core::str::from_utf8(self.as_bytes()).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

impl<S: LineStorage> Deref for Line<S> {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl<S: LineStorage> AsRef<str> for Line<S> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<S: LineStorage> PartialEq<str> for Line<S> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<S: LineStorage> PartialEq<&str> for Line<S> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<S: LineStorage> fmt::Display for Line<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<S: LineStorage> fmt::Debug for Line<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}
