use std::io::Write;

use crate::nbt::NbtError;
use crate::nbt::compression::{Compression, decode_bytes, has_gzip_magic};

fn gzip(payload: &[u8]) -> Vec<u8> {
	let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
	encoder.write_all(payload).expect("gzip write succeeds");
	encoder.finish().expect("gzip finish succeeds")
}

#[test]
fn detects_gzip_magic() {
	assert!(has_gzip_magic(&[0x1F, 0x8B]));
	assert!(has_gzip_magic(&[0x1F, 0x8B, 0x08, 0x00]));
}

#[test]
fn short_buffers_are_not_gzip() {
	assert!(!has_gzip_magic(&[]));
	assert!(!has_gzip_magic(&[0x1F]));
	assert!(!has_gzip_magic(&[0x8B, 0x1F]));
}

#[test]
fn raw_buffer_passes_through_untouched() {
	let raw = vec![10, 0, 0, 0];
	let (compression, bytes) = decode_bytes(raw.clone()).expect("raw decode succeeds");
	assert_eq!(compression, Compression::None);
	assert_eq!(bytes, raw);
}

#[test]
fn gzip_buffer_round_trips() {
	let payload = b"named binary payload".to_vec();
	let (compression, bytes) = decode_bytes(gzip(&payload)).expect("gzip decode succeeds");
	assert_eq!(compression, Compression::Gzip);
	assert_eq!(bytes, payload);
}

#[test]
fn empty_input_fails_fast() {
	let err = decode_bytes(Vec::new()).expect_err("empty input fails");
	assert!(matches!(err, NbtError::EmptyInput));
}

#[test]
fn corrupt_gzip_stream_fails() {
	let err = decode_bytes(vec![0x1F, 0x8B, 0xFF, 0xFF, 0xFF]).expect_err("corrupt stream fails");
	assert!(matches!(err, NbtError::DecompressionFailed(_)));
}
