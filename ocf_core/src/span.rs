//! Owned byte spans with explicit sub-range bounds.

/// A contiguous range of bytes within an owned backing buffer.
///
/// All block and codec operations traffic in `ByteSpan` rather than raw
/// buffer/offset/length triples, so sub-range arithmetic is checked once, at
/// construction. A span constructed from a sub-range keeps the full backing
/// allocation but only ever exposes `[offset, offset + len)`.
///
/// Compression and decompression *replace* a block's span wholesale; the old
/// span (and its backing buffer) is dropped, never aliased, so stale length
/// metadata cannot survive a transform.
#[derive(Debug, Clone, Default)]
pub struct ByteSpan {
    buf: Vec<u8>,
    offset: usize,
    len: usize,
}

impl ByteSpan {
    /// Span covering the whole of `buf`.
    pub fn new(buf: Vec<u8>) -> Self {
        let len = buf.len();
        Self {
            buf,
            offset: 0,
            len,
        }
    }

    /// Zero-filled span of `capacity` bytes.
    pub fn zeroed(capacity: usize) -> Self {
        Self::new(vec![0u8; capacity])
    }

    /// Span over `[offset, offset + len)` of `buf`, without copying.
    ///
    /// Fails if the range does not lie within `buf`.
    pub fn sub_range(buf: Vec<u8>, offset: usize, len: usize) -> anyhow::Result<Self> {
        let end = offset
            .checked_add(len)
            .ok_or_else(|| anyhow::anyhow!("sub-range {}+{} overflows", offset, len))?;
        if end > buf.len() {
            anyhow::bail!(
                "sub-range {}..{} is out of bounds for a {}-byte buffer",
                offset,
                end,
                buf.len()
            );
        }
        Ok(Self { buf, offset, len })
    }

    /// Number of bytes visible through this span.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The visible bytes, exactly `[offset, offset + len)` of the backing
    /// buffer.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[self.offset..self.offset + self.len]
    }

    /// Mutable view of the visible bytes.
    #[inline]
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.buf[self.offset..self.offset + self.len]
    }
}

impl From<Vec<u8>> for ByteSpan {
    fn from(buf: Vec<u8>) -> Self {
        Self::new(buf)
    }
}
