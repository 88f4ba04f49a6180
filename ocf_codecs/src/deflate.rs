use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::{self, Write};

use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;

use ocf_core::codec::Codec;
use ocf_core::error::Result;
use ocf_core::format::{DEFAULT_DEFLATE_LEVEL, DEFLATE_CODEC};
use ocf_core::span::ByteSpan;

/// Deflate codec: raw deflate streams, no zlib header or trailer.
///
/// The container's baseline compression. The level is part of the codec's
/// identity, and the scratch buffer follows the same clear-don't-reallocate
/// strategy as the other stream codecs.
pub struct DeflateCodec {
    level: u32,
    scratch: Vec<u8>,
}

impl DeflateCodec {
    pub fn new(level: u32) -> Self {
        Self {
            level,
            scratch: Vec::new(),
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }
}

impl Default for DeflateCodec {
    fn default() -> Self {
        Self::new(DEFAULT_DEFLATE_LEVEL)
    }
}

impl Codec for DeflateCodec {
    fn name(&self) -> &'static str {
        DEFLATE_CODEC
    }

    fn compress(&mut self, data: ByteSpan) -> Result<ByteSpan> {
        self.scratch.clear();
        self.scratch.reserve(data.len());

        let mut encoder = DeflateEncoder::new(&mut self.scratch, Compression::new(self.level));
        encoder.write_all(data.as_bytes())?;
        encoder.finish()?;

        Ok(ByteSpan::new(self.scratch.clone()))
    }

    fn decompress(&mut self, data: ByteSpan) -> Result<ByteSpan> {
        self.scratch.clear();
        self.scratch.reserve(data.len());

        let mut decoder = DeflateDecoder::new(data.as_bytes());
        io::copy(&mut decoder, &mut self.scratch)?;

        Ok(ByteSpan::new(self.scratch.clone()))
    }
}

impl fmt::Debug for DeflateCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeflateCodec")
            .field("level", &self.level)
            .finish()
    }
}

impl PartialEq for DeflateCodec {
    fn eq(&self, other: &Self) -> bool {
        self.level == other.level
    }
}

impl Eq for DeflateCodec {}

impl Hash for DeflateCodec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.level.hash(state);
    }
}
