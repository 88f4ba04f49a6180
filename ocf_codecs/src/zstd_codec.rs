use std::hash::{Hash, Hasher};

use ocf_core::codec::Codec;
use ocf_core::error::Result;
use ocf_core::format::{DEFAULT_ZSTANDARD_LEVEL, ZSTANDARD_CODEC};
use ocf_core::span::ByteSpan;

/// Zstandard codec.
///
/// Each block is an independent zstd frame compressed at the configured
/// level; the frame carries its own content size, so decoding needs no
/// external length hint. The level is part of the codec's identity.
#[derive(Debug, Clone)]
pub struct ZstandardCodec {
    level: i32,
}

impl ZstandardCodec {
    pub fn new(level: i32) -> Self {
        Self { level }
    }

    pub fn level(&self) -> i32 {
        self.level
    }
}

impl Default for ZstandardCodec {
    fn default() -> Self {
        Self::new(DEFAULT_ZSTANDARD_LEVEL)
    }
}

impl Codec for ZstandardCodec {
    fn name(&self) -> &'static str {
        ZSTANDARD_CODEC
    }

    fn compress(&mut self, data: ByteSpan) -> Result<ByteSpan> {
        let compressed = zstd::bulk::compress(data.as_bytes(), self.level)?;
        Ok(ByteSpan::new(compressed))
    }

    fn decompress(&mut self, data: ByteSpan) -> Result<ByteSpan> {
        let raw = zstd::decode_all(data.as_bytes())?;
        Ok(ByteSpan::new(raw))
    }
}

impl PartialEq for ZstandardCodec {
    fn eq(&self, other: &Self) -> bool {
        self.level == other.level
    }
}

impl Eq for ZstandardCodec {}

impl Hash for ZstandardCodec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.level.hash(state);
    }
}
