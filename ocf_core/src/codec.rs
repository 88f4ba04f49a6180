//! The block compression capability.

use crate::error::Result;
use crate::span::ByteSpan;

/// Core compression abstraction.
///
/// Each `Codec` implementation:
/// - Is identified by a stable `name()` persisted in the container header
///   and used to reconstruct the codec on read.
/// - Must be deterministic: identical input and identical configuration
///   produce identical output.
/// - Must return a span sized exactly to its output, with no trailing
///   garbage, and must never surface a partial result on failure.
///
/// Spans are passed by value: a transform consumes its input and hands back
/// a replacement, so the pass-through codec can return its argument without
/// copying. Methods take `&mut self` because stream codecs reuse an owned
/// scratch buffer (and the checksum codec a running hasher) across calls; a
/// codec instance is therefore not safe for concurrent use. Callers wanting
/// parallel compression use one instance per thread.
pub trait Codec {
    /// Stable algorithm identifier stored in the container header.
    fn name(&self) -> &'static str;

    /// Compress one block.
    fn compress(&mut self, data: ByteSpan) -> Result<ByteSpan>;

    /// Decompress one block previously produced by `compress` under the
    /// same configuration.
    fn decompress(&mut self, data: ByteSpan) -> Result<ByteSpan>;
}
