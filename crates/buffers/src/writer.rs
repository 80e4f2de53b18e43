//! Growable binary buffer writer.

/// A binary buffer writer that appends big-endian integers and raw bytes.
///
/// The writer keeps a single allocation across [`Writer::reset`] and
/// [`Writer::flush`] cycles, so one instance can be reused for many records.
///
/// # Example
///
/// ```
/// use shortlink_buffers::Writer;
///
/// let mut writer = Writer::with_capacity(8);
/// writer.u8(0x01);
/// writer.u32(0x0203_0405);
/// assert_eq!(writer.flush(), vec![0x01, 0x02, 0x03, 0x04, 0x05]);
/// assert!(writer.is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct Writer {
    uint8: Vec<u8>,
}

impl Writer {
    /// Default initial allocation for a fresh writer.
    pub const DEFAULT_CAPACITY: usize = 256;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written since the last reset.
    pub fn len(&self) -> usize {
        self.uint8.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uint8.is_empty()
    }

    /// Makes sure at least `size` more bytes fit without reallocating.
    pub fn ensure_capacity(&mut self, size: usize) {
        self.uint8.reserve(size);
    }

    /// Discards written bytes, keeping the allocation.
    pub fn reset(&mut self) {
        self.uint8.clear();
    }

    /// Returns the bytes written so far without consuming them.
    pub fn as_slice(&self) -> &[u8] {
        &self.uint8
    }

    /// Takes the written bytes and resets the writer.
    pub fn flush(&mut self) -> Vec<u8> {
        let out = self.uint8.clone();
        self.uint8.clear();
        out
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.uint8.push(val);
    }

    /// Writes an unsigned 32-bit integer (big-endian).
    #[inline]
    pub fn u32(&mut self, val: u32) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes raw bytes.
    #[inline]
    pub fn buf(&mut self, data: &[u8]) {
        self.uint8.extend_from_slice(data);
    }

    /// Writes the UTF-8 bytes of `s` and returns how many were written.
    pub fn utf8(&mut self, s: &str) -> usize {
        self.uint8.extend_from_slice(s.as_bytes());
        s.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u32_is_big_endian() {
        let mut w = Writer::new();
        w.u32(0x1234_5678);
        assert_eq!(w.as_slice(), &[0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn flush_resets_but_reset_discards() {
        let mut w = Writer::new();
        w.buf(b"abc");
        assert_eq!(w.flush(), b"abc".to_vec());
        assert_eq!(w.len(), 0);

        w.u8(7);
        w.reset();
        assert!(w.flush().is_empty());
    }

    #[test]
    fn utf8_reports_byte_length() {
        let mut w = Writer::new();
        assert_eq!(w.utf8("añb"), 4);
        assert_eq!(w.len(), 4);
    }
}
