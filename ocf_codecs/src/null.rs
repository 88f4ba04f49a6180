use ocf_core::codec::Codec;
use ocf_core::error::Result;
use ocf_core::format::NULL_CODEC;
use ocf_core::span::ByteSpan;

/// Pass-through codec: blocks are stored verbatim.
///
/// Useful for:
/// - Verifying the block framing independently of any compression engine.
/// - Data that is already compressed, where a real codec would expand it.
///
/// Both directions return the input span itself; nothing is copied or
/// allocated, and neither direction can fail. The codec is stateless, so
/// unlike the stream codecs a single instance can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NullCodec;

impl Codec for NullCodec {
    fn name(&self) -> &'static str {
        NULL_CODEC
    }

    fn compress(&mut self, data: ByteSpan) -> Result<ByteSpan> {
        Ok(data)
    }

    fn decompress(&mut self, data: ByteSpan) -> Result<ByteSpan> {
        Ok(data)
    }
}
