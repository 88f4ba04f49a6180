use std::fmt;
use std::hash::{Hash, Hasher};
use std::io;

use ocf_core::codec::Codec;
use ocf_core::error::{CodecError, Result};
use ocf_core::format::SNAPPY_CODEC;
use ocf_core::span::ByteSpan;

/// Width of the CRC32 trailer appended to every compressed block.
const TRAILER_SIZE: usize = 4;

/// Snappy codec with a CRC32 integrity trailer.
///
/// Raw Snappy does not validate payload integrity on decode, so `compress`
/// appends a 4-byte big-endian CRC32 of the *uncompressed* input after the
/// compressed bytes. `decompress` strips the trailer, decompresses the
/// remainder, recomputes the checksum over the recovered plaintext, and
/// fails with [`CodecError::Integrity`] on mismatch.
///
/// The Snappy engine state and the hasher are held as instance fields and
/// reused across calls, so the codec requires exclusive access.
pub struct SnappyCodec {
    encoder: snap::raw::Encoder,
    decoder: snap::raw::Decoder,
    crc: crc32fast::Hasher,
}

impl SnappyCodec {
    pub fn new() -> Self {
        Self {
            encoder: snap::raw::Encoder::new(),
            decoder: snap::raw::Decoder::new(),
            crc: crc32fast::Hasher::new(),
        }
    }

    fn crc32(&mut self, bytes: &[u8]) -> u32 {
        self.crc.reset();
        self.crc.update(bytes);
        self.crc.clone().finalize()
    }
}

impl Default for SnappyCodec {
    fn default() -> Self {
        Self::new()
    }
}

fn engine_error(e: snap::Error) -> CodecError {
    CodecError::Codec(io::Error::new(io::ErrorKind::InvalidData, e))
}

impl Codec for SnappyCodec {
    fn name(&self) -> &'static str {
        SNAPPY_CODEC
    }

    fn compress(&mut self, data: ByteSpan) -> Result<ByteSpan> {
        let raw = data.as_bytes();
        let mut out = vec![0u8; snap::raw::max_compress_len(raw.len()) + TRAILER_SIZE];
        let size = self
            .encoder
            .compress(raw, &mut out)
            .map_err(engine_error)?;

        let crc = self.crc32(raw);
        out[size..size + TRAILER_SIZE].copy_from_slice(&crc.to_be_bytes());
        out.truncate(size + TRAILER_SIZE);
        Ok(ByteSpan::new(out))
    }

    fn decompress(&mut self, data: ByteSpan) -> Result<ByteSpan> {
        let bytes = data.as_bytes();
        if bytes.len() < TRAILER_SIZE {
            return Err(CodecError::Codec(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "snappy block shorter than its checksum trailer",
            )));
        }
        let (body, trailer) = bytes.split_at(bytes.len() - TRAILER_SIZE);

        let len = snap::raw::decompress_len(body).map_err(engine_error)?;
        let mut out = vec![0u8; len];
        let size = self
            .decoder
            .decompress(body, &mut out)
            .map_err(engine_error)?;
        out.truncate(size);

        let mut stored = [0u8; TRAILER_SIZE];
        stored.copy_from_slice(trailer);
        if u32::from_be_bytes(stored) != self.crc32(&out) {
            return Err(CodecError::Integrity);
        }
        Ok(ByteSpan::new(out))
    }
}

impl fmt::Debug for SnappyCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnappyCodec").finish()
    }
}

// Equality is by configuration only; the engine and hasher state are
// scratch.
impl PartialEq for SnappyCodec {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for SnappyCodec {}

impl Hash for SnappyCodec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        SNAPPY_CODEC.hash(state);
    }
}
