//! One framed, compressed unit of entries within the container.

use std::io::{self, Write};
use std::mem;

use log::trace;

use crate::codec::Codec;
use crate::encode::BinaryEncoder;
use crate::error::Result;
use crate::format::SYNC_SIZE;
use crate::span::ByteSpan;

/// An in-memory data block: an entry count, a byte span, and the framing
/// needed to serialize both.
///
/// A block is created either fresh (zero-filled, to be filled by a producer
/// and then compressed) or from a span received off the wire (to be
/// decompressed and drained). The entry count is advisory metadata supplied
/// by the caller; the block never validates it against the payload.
///
/// # Frame layout written by [`write_block_to`](Self::write_block_to)
/// ```text
/// entryCount : varint long
/// blockSize  : varint long, equals the span length exactly
/// payload    : blockSize raw bytes
/// syncMarker : 16 literal bytes, not length-prefixed
/// ```
pub struct DataBlock {
    span: ByteSpan,
    num_entries: u64,
    flush_on_write: bool,
}

impl DataBlock {
    /// Fresh block with a zero-filled span of `capacity` bytes.
    pub fn new(num_entries: u64, capacity: usize) -> Self {
        Self {
            span: ByteSpan::zeroed(capacity),
            num_entries,
            flush_on_write: true,
        }
    }

    /// Block wrapping a received span, without copying. The entry count
    /// comes from the framing metadata the caller already parsed.
    pub fn from_span(span: ByteSpan, num_entries: u64) -> Self {
        Self {
            span,
            num_entries,
            flush_on_write: true,
        }
    }

    pub fn num_entries(&self) -> u64 {
        self.num_entries
    }

    /// Current span length. Updated by every compress/decompress.
    pub fn block_size(&self) -> usize {
        self.span.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.span.as_bytes()
    }

    /// Mutable payload access, used by producers filling a fresh block.
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        self.span.as_mut_bytes()
    }

    pub fn flush_on_write(&self) -> bool {
        self.flush_on_write
    }

    /// Defer (or restore) the per-block sink flush. Defaults to true;
    /// callers batching several blocks can disable it and flush once at the
    /// end of the batch.
    pub fn set_flush_on_write(&mut self, flush_on_write: bool) {
        self.flush_on_write = flush_on_write;
    }

    /// Replace the span with its compressed form. The entry count is
    /// untouched. On failure the old span has already been consumed and the
    /// block is left empty; no partial output is ever exposed.
    pub fn compress_using(&mut self, codec: &mut impl Codec) -> Result<()> {
        let span = mem::take(&mut self.span);
        self.span = codec.compress(span)?;
        Ok(())
    }

    /// Replace the span with its decompressed form. Same contract as
    /// [`compress_using`](Self::compress_using).
    pub fn decompress_using(&mut self, codec: &mut impl Codec) -> Result<()> {
        let span = mem::take(&mut self.span);
        self.span = codec.decompress(span)?;
        Ok(())
    }

    /// Serialize the block frame to `encoder`: entry count, span length,
    /// the span's exact sub-range bytes, then the literal sync marker.
    /// Flushes the sink afterwards unless flush-on-write is disabled.
    ///
    /// This layout is the byte-exact contract the container reader depends
    /// on; an empty block still produces a well-formed frame.
    pub fn write_block_to<W: Write>(
        &self,
        encoder: &mut BinaryEncoder<W>,
        sync: &[u8; SYNC_SIZE],
    ) -> io::Result<()> {
        encoder.write_long(self.num_entries as i64)?;
        encoder.write_long(self.span.len() as i64)?;
        encoder.write_fixed(self.span.as_bytes())?;
        encoder.write_fixed(sync)?;
        if self.flush_on_write {
            encoder.flush()?;
        }
        trace!(
            "wrote block: {} entries, {} payload bytes",
            self.num_entries,
            self.span.len()
        );
        Ok(())
    }
}
