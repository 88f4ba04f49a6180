//! Error types for block compression and decompression.

use std::fmt;
use std::io;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors surfaced by [`Codec`](crate::codec::Codec) implementations.
///
/// Integrity failures are kept distinct from engine failures so a reader can
/// tell corrupted-but-decodable data apart from a stream it cannot decode at
/// all. Neither kind is retriable at this layer.
#[derive(Debug)]
pub enum CodecError {
    /// The checksum stored with the block does not match the value
    /// recomputed over the decompressed bytes.
    Integrity,

    /// The underlying compression engine failed (malformed stream,
    /// truncated input, unsupported parameters).
    Codec(io::Error),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Integrity => write!(f, "checksum failure"),
            CodecError::Codec(e) => write!(f, "codec failure: {}", e),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Codec(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(error: io::Error) -> Self {
        CodecError::Codec(error)
    }
}
