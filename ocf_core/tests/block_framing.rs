//! Integration tests: data blocks driven through the real codec set.
//!
//! Covers the properties downstream readers depend on:
//!  1. Byte-for-byte round trips for every codec, including the empty span
//!     and spans straddling the 4 KiB boundary
//!  2. Tamper detection in the snappy codec's CRC32 trailer
//!  3. Frame exactness (entry count, length, payload sub-range, sync marker)
//!  4. Flush-on-write semantics against a flush-counting sink

use std::io::{self, Write};

use ocf_codecs::{
    codec_by_name, Bzip2Codec, Codec, DeflateCodec, NullCodec, SnappyCodec, XzCodec,
    ZstandardCodec,
};
use ocf_core::codec::Codec as _;
use ocf_core::error::CodecError;
use ocf_core::format::SYNC_SIZE;
use ocf_core::{BinaryEncoder, ByteSpan, DataBlock};

/// Generate `len` deterministic bytes using a simple LCG.
fn pseudo_random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = seed;
    (0..len)
        .map(|_| {
            rng = rng
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (rng >> 56) as u8
        })
        .collect()
}

/// Generate `len` highly compressible bytes (repeating pattern).
fn compressible_bytes(len: usize) -> Vec<u8> {
    let pattern = b"the quick brown fox jumps over the lazy dog. ";
    (0..len).map(|i| pattern[i % pattern.len()]).collect()
}

fn all_codecs() -> Vec<Codec> {
    vec![
        Codec::Null(NullCodec),
        Codec::Deflate(DeflateCodec::default()),
        Codec::Snappy(SnappyCodec::new()),
        Codec::Bzip2(Bzip2Codec::new()),
        Codec::Xz(XzCodec::default()),
        Codec::Zstandard(ZstandardCodec::default()),
    ]
}

// ── Round trips ────────────────────────────────────────────────────────────

#[test]
fn round_trip_boundary_sizes_every_codec() {
    for mut codec in all_codecs() {
        for &len in &[0usize, 1, 4095, 4096, 4097] {
            let data = pseudo_random_bytes(len, 0x5eed ^ len as u64);

            let compressed = codec.compress(ByteSpan::new(data.clone())).unwrap();
            let recovered = codec.decompress(compressed).unwrap();

            assert_eq!(
                recovered.as_bytes(),
                data.as_slice(),
                "{} round trip at {} bytes",
                codec.name(),
                len
            );
        }
    }
}

#[test]
fn round_trip_compressible_data_shrinks() {
    let data = compressible_bytes(64 * 1024);
    for mut codec in all_codecs() {
        let compressed = codec.compress(ByteSpan::new(data.clone())).unwrap();
        if codec.name() != "null" {
            assert!(
                compressed.len() < data.len(),
                "{} should compress repetitive data",
                codec.name()
            );
        }
        let recovered = codec.decompress(compressed).unwrap();
        assert_eq!(recovered.as_bytes(), data.as_slice());
    }
}

#[test]
fn round_trip_through_blocks_and_registry() {
    // Producer side: fill a fresh block, compress, frame it.
    for name in ["null", "deflate", "snappy", "bzip2", "xz", "zstandard"] {
        let payload = compressible_bytes(3000);
        let mut writer_codec = codec_by_name(name).unwrap();

        let mut block = DataBlock::new(40, payload.len());
        block.as_mut_bytes().copy_from_slice(&payload);
        block.compress_using(&mut writer_codec).unwrap();
        let wire = block.as_bytes().to_vec();

        // Consumer side: the outer reader parsed the framing metadata and
        // hands over the payload span plus the entry count.
        let mut reader_codec = codec_by_name(name).unwrap();
        let mut received = DataBlock::from_span(ByteSpan::new(wire), 40);
        received.decompress_using(&mut reader_codec).unwrap();

        assert_eq!(received.as_bytes(), payload.as_slice(), "codec {}", name);
        assert_eq!(received.block_size(), payload.len());
        assert_eq!(received.num_entries(), 40);
    }
}

#[test]
fn decompress_from_sub_range_of_received_buffer() {
    // A reader often slices one block's payload out of a larger read
    // buffer; the codec must only ever see the sub-range.
    let payload = compressible_bytes(2048);
    let mut codec = DeflateCodec::default();
    let compressed = codec.compress(ByteSpan::new(payload.clone())).unwrap();

    let mut read_buffer = vec![0xee; 37];
    read_buffer.extend_from_slice(compressed.as_bytes());
    read_buffer.extend_from_slice(&[0xee; 53]);

    let span = ByteSpan::sub_range(read_buffer, 37, compressed.len()).unwrap();
    let mut block = DataBlock::from_span(span, 7);
    block.decompress_using(&mut codec).unwrap();

    assert_eq!(block.as_bytes(), payload.as_slice());
}

// ── Snappy integrity ───────────────────────────────────────────────────────

#[test]
fn snappy_hello_world_round_trip_and_trailer_tamper() {
    let mut codec = SnappyCodec::new();
    let raw = "hello world".as_bytes().to_vec();

    let compressed = codec.compress(ByteSpan::new(raw.clone())).unwrap();
    let recovered = codec.decompress(compressed.clone()).unwrap();
    assert_eq!(recovered.as_bytes(), raw.as_slice());

    // Corrupting the last byte of the compressed stream must surface as an
    // integrity failure, not altered plaintext.
    let mut tampered = compressed.as_bytes().to_vec();
    let last = tampered.len() - 1;
    tampered[last] ^= 0x40;
    match codec.decompress(ByteSpan::new(tampered)) {
        Err(CodecError::Integrity) => {}
        Err(other) => panic!("expected integrity failure, got {}", other),
        Ok(_) => panic!("tampered block decoded silently"),
    }
}

#[test]
fn snappy_single_bit_flips_never_pass_silently() {
    let mut codec = SnappyCodec::new();
    let raw = pseudo_random_bytes(512, 42);
    let compressed = codec.compress(ByteSpan::new(raw.clone())).unwrap();
    let body_len = compressed.len() - 4;

    // Every bit position in the body (the trailer is covered above).
    for byte_idx in 0..body_len {
        for bit in 0..8 {
            let mut tampered = compressed.as_bytes().to_vec();
            tampered[byte_idx] ^= 1 << bit;

            match codec.decompress(ByteSpan::new(tampered)) {
                // Either the stream no longer decodes, or it decodes to
                // bytes whose checksum disagrees. Both are acceptable;
                // silence is not.
                Err(CodecError::Codec(_)) | Err(CodecError::Integrity) => {}
                Ok(out) => panic!(
                    "bit {} of byte {} flipped and decompress returned {} bytes",
                    bit,
                    byte_idx,
                    out.len()
                ),
            }
        }
    }
}

// ── Frame layout ───────────────────────────────────────────────────────────

#[test]
fn empty_block_frame_is_exact() {
    let sync: [u8; SYNC_SIZE] = *b"\x01\x23\x45\x67\x89\xab\xcd\xef\xfe\xdc\xba\x98\x76\x54\x32\x10";
    let block = DataBlock::new(0, 0);

    let mut enc = BinaryEncoder::new(Vec::new());
    block.write_block_to(&mut enc, &sync).unwrap();

    let mut expected = vec![0x00, 0x00];
    expected.extend_from_slice(&sync);
    assert_eq!(enc.into_inner(), expected);
}

#[test]
fn compressed_block_frame_has_exact_length_prefix() {
    let payload = compressible_bytes(500);
    let mut codec = ZstandardCodec::default();

    let mut block = DataBlock::new(12, payload.len());
    block.as_mut_bytes().copy_from_slice(&payload);
    block.compress_using(&mut codec).unwrap();

    let sync = [0x5a; SYNC_SIZE];
    let mut enc = BinaryEncoder::new(Vec::new());
    block.write_block_to(&mut enc, &sync).unwrap();
    let frame = enc.into_inner();

    let mut expected = BinaryEncoder::new(Vec::new());
    expected.write_long(12).unwrap();
    expected.write_long(block.block_size() as i64).unwrap();
    expected.write_fixed(block.as_bytes()).unwrap();
    expected.write_fixed(&sync).unwrap();
    assert_eq!(frame, expected.into_inner());
}

// ── Flush semantics ────────────────────────────────────────────────────────

struct CountingSink {
    data: Vec<u8>,
    flushes: usize,
}

impl CountingSink {
    fn new() -> Self {
        Self {
            data: Vec::new(),
            flushes: 0,
        }
    }
}

impl Write for CountingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

#[test]
fn flush_on_write_defaults_on_and_can_be_deferred() {
    let sync = [0u8; SYNC_SIZE];
    let mut sink = CountingSink::new();

    {
        let mut enc = BinaryEncoder::new(&mut sink);
        let block = DataBlock::new(1, 4);
        block.write_block_to(&mut enc, &sync).unwrap();
    }
    assert_eq!(sink.flushes, 1);
    // varint(1) + varint(4) + 4 payload bytes + 16 sync bytes
    assert_eq!(sink.data.len(), 22);

    {
        let mut enc = BinaryEncoder::new(&mut sink);
        let mut block = DataBlock::new(1, 4);
        block.set_flush_on_write(false);
        assert!(!block.flush_on_write());
        block.write_block_to(&mut enc, &sync).unwrap();
        block.write_block_to(&mut enc, &sync).unwrap();
        enc.flush().unwrap();
    }
    assert_eq!(sink.flushes, 2, "deferred blocks flush once, at the end");
    assert_eq!(sink.data.len(), 3 * 22);
}
