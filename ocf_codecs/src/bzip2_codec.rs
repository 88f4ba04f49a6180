use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::{Read, Write};

use bzip2::read::BzDecoder;
use bzip2::write::BzEncoder;
use bzip2::Compression;

use ocf_core::codec::Codec;
use ocf_core::error::Result;
use ocf_core::format::{BZIP2_CODEC, STREAM_CHUNK_SIZE};
use ocf_core::span::ByteSpan;

/// bzip2 stream codec.
///
/// Compression runs a fresh encoder per block over a scratch buffer owned
/// by the instance. The scratch is cleared between blocks, never
/// reallocated, which is what keeps large-block hot paths off the
/// allocator; the returned span is an exact-size copy of its contents.
/// Decompression reads the stream in [`STREAM_CHUNK_SIZE`] chunks,
/// accumulating into a growable output until the decoder is exhausted.
pub struct Bzip2Codec {
    scratch: Vec<u8>,
}

impl Bzip2Codec {
    pub fn new() -> Self {
        Self {
            scratch: Vec::new(),
        }
    }
}

impl Default for Bzip2Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec for Bzip2Codec {
    fn name(&self) -> &'static str {
        BZIP2_CODEC
    }

    fn compress(&mut self, data: ByteSpan) -> Result<ByteSpan> {
        self.scratch.clear();
        self.scratch.reserve(data.len());

        let mut encoder = BzEncoder::new(&mut self.scratch, Compression::best());
        encoder.write_all(data.as_bytes())?;
        encoder.finish()?;

        Ok(ByteSpan::new(self.scratch.clone()))
    }

    fn decompress(&mut self, data: ByteSpan) -> Result<ByteSpan> {
        let mut decoder = BzDecoder::new(data.as_bytes());
        let mut out = Vec::new();
        let mut chunk = vec![0u8; STREAM_CHUNK_SIZE];
        loop {
            let n = decoder.read(&mut chunk)?;
            if n == 0 {
                break;
            }
            out.extend_from_slice(&chunk[..n]);
        }
        Ok(ByteSpan::new(out))
    }
}

impl fmt::Debug for Bzip2Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bzip2Codec").finish()
    }
}

// Equality is by configuration only; the scratch buffer is not identity.
impl PartialEq for Bzip2Codec {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for Bzip2Codec {}

impl Hash for Bzip2Codec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        BZIP2_CODEC.hash(state);
    }
}
