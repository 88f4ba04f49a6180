use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::{self, Write};

use xz2::read::XzDecoder;
use xz2::write::XzEncoder;

use ocf_core::codec::Codec;
use ocf_core::error::Result;
use ocf_core::format::{DEFAULT_XZ_LEVEL, XZ_CODEC};
use ocf_core::span::ByteSpan;

/// xz (LZMA2) stream codec.
///
/// The preset level is chosen at construction and is part of the codec's
/// identity: two `XzCodec` values compare equal iff their levels match.
/// Buffering follows the same strategy as [`Bzip2Codec`](crate::Bzip2Codec):
/// an instance-owned scratch buffer, cleared per call, holds the stream
/// output on both paths.
pub struct XzCodec {
    level: u32,
    scratch: Vec<u8>,
}

impl XzCodec {
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

impl Default for XzCodec {
    fn default() -> Self {
        Self::new(DEFAULT_XZ_LEVEL)
    }
}

impl Codec for XzCodec {
    fn name(&self) -> &'static str {
        XZ_CODEC
    }

    fn compress(&mut self, data: ByteSpan) -> Result<ByteSpan> {
        self.scratch.clear();
        self.scratch.reserve(data.len());

        let mut encoder = XzEncoder::new(&mut self.scratch, self.level);
        encoder.write_all(data.as_bytes())?;
        encoder.finish()?;

        Ok(ByteSpan::new(self.scratch.clone()))
    }

    fn decompress(&mut self, data: ByteSpan) -> Result<ByteSpan> {
        self.scratch.clear();
        self.scratch.reserve(data.len());

        let mut decoder = XzDecoder::new(data.as_bytes());
        io::copy(&mut decoder, &mut self.scratch)?;

        Ok(ByteSpan::new(self.scratch.clone()))
    }
}

impl fmt::Debug for XzCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XzCodec").field("level", &self.level).finish()
    }
}

impl PartialEq for XzCodec {
    fn eq(&self, other: &Self) -> bool {
        self.level == other.level
    }
}

impl Eq for XzCodec {}

impl Hash for XzCodec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.level.hash(state);
    }
}
