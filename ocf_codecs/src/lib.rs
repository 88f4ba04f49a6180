mod bzip2_codec;
mod deflate;
mod null;
mod snappy;
mod xz;
mod zstd_codec;

pub use bzip2_codec::Bzip2Codec;
pub use deflate::DeflateCodec;
pub use null::NullCodec;
pub use snappy::SnappyCodec;
pub use xz::XzCodec;
pub use zstd_codec::ZstandardCodec;

use log::debug;
use ocf_core::error::Result;
use ocf_core::format::{
    BZIP2_CODEC, DEFLATE_CODEC, NULL_CODEC, SNAPPY_CODEC, XZ_CODEC, ZSTANDARD_CODEC,
};
use ocf_core::span::ByteSpan;
use ocf_core::Codec as _;

/// The closed set of codecs the container understands.
///
/// Dispatch is by algorithm tag; the variant set is fixed, so new
/// algorithms are a change to this enum, not a trait implementation
/// elsewhere. Equality and hashing compare the tag plus configuration
/// (compression levels) and ignore scratch state, which makes a `Codec`
/// value usable as a map key, e.g. "which codec is configured for this
/// container".
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum Codec {
    Null(NullCodec),
    Deflate(DeflateCodec),
    Snappy(SnappyCodec),
    Bzip2(Bzip2Codec),
    Xz(XzCodec),
    Zstandard(ZstandardCodec),
}

impl ocf_core::Codec for Codec {
    fn name(&self) -> &'static str {
        match self {
            Codec::Null(c) => c.name(),
            Codec::Deflate(c) => c.name(),
            Codec::Snappy(c) => c.name(),
            Codec::Bzip2(c) => c.name(),
            Codec::Xz(c) => c.name(),
            Codec::Zstandard(c) => c.name(),
        }
    }

    fn compress(&mut self, data: ByteSpan) -> Result<ByteSpan> {
        match self {
            Codec::Null(c) => c.compress(data),
            Codec::Deflate(c) => c.compress(data),
            Codec::Snappy(c) => c.compress(data),
            Codec::Bzip2(c) => c.compress(data),
            Codec::Xz(c) => c.compress(data),
            Codec::Zstandard(c) => c.compress(data),
        }
    }

    fn decompress(&mut self, data: ByteSpan) -> Result<ByteSpan> {
        match self {
            Codec::Null(c) => c.decompress(data),
            Codec::Deflate(c) => c.decompress(data),
            Codec::Snappy(c) => c.decompress(data),
            Codec::Bzip2(c) => c.decompress(data),
            Codec::Xz(c) => c.decompress(data),
            Codec::Zstandard(c) => c.decompress(data),
        }
    }
}

/// Resolve a codec from the name persisted in the container header.
///
/// Called when opening an existing container, so the reader can be
/// initialized with the codec the writer used. Level-configured variants
/// come back at their default level; a caller that knows the writer-side
/// level constructs the variant directly instead.
pub fn codec_by_name(name: &str) -> anyhow::Result<Codec> {
    debug!("resolving codec {:?}", name);
    match name {
        NULL_CODEC => Ok(Codec::Null(NullCodec)),
        DEFLATE_CODEC => Ok(Codec::Deflate(DeflateCodec::default())),
        SNAPPY_CODEC => Ok(Codec::Snappy(SnappyCodec::new())),
        BZIP2_CODEC => Ok(Codec::Bzip2(Bzip2Codec::new())),
        XZ_CODEC => Ok(Codec::Xz(XzCodec::default())),
        ZSTANDARD_CODEC => Ok(Codec::Zstandard(ZstandardCodec::default())),
        other => anyhow::bail!(
            "unknown codec name {:?}; valid names: null, deflate, snappy, bzip2, xz, zstandard",
            other
        ),
    }
}
