//! Container-wide constants shared by the block writer and the codec set.

/// Number of bytes in the synchronization marker written after every block.
pub const SYNC_SIZE: usize = 16;

/// Fixed read size for streaming decompression loops (64 KiB).
///
/// Stream codecs pull compressed data through their decoder in chunks of
/// this size, accumulating into a growable output until the stream is
/// exhausted.
pub const STREAM_CHUNK_SIZE: usize = 64 * 1024;

// ── Codec names ────────────────────────────────────────────────────────────
//
// These strings are persisted in the container header and must never change.

/// Pass-through codec: blocks stored verbatim.
pub const NULL_CODEC: &str = "null";

/// Raw deflate (no zlib wrapper).
pub const DEFLATE_CODEC: &str = "deflate";

/// Raw Snappy with a trailing CRC32 of the uncompressed bytes.
pub const SNAPPY_CODEC: &str = "snappy";

/// bzip2 stream compression.
pub const BZIP2_CODEC: &str = "bzip2";

/// xz (LZMA2) stream compression.
pub const XZ_CODEC: &str = "xz";

/// Zstandard compression.
pub const ZSTANDARD_CODEC: &str = "zstandard";

// ── Default compression levels ─────────────────────────────────────────────

/// Default deflate level (zlib default).
pub const DEFAULT_DEFLATE_LEVEL: u32 = 6;

/// Default xz preset.
pub const DEFAULT_XZ_LEVEL: u32 = 6;

/// Default zstandard level (1 = fast / larger, 22 = slow / smallest).
pub const DEFAULT_ZSTANDARD_LEVEL: i32 = 3;
