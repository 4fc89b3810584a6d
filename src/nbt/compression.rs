use std::io::Read;

use crate::nbt::{NbtError, Result};

const MAX_DECOMPRESSED_BYTES: usize = 512 * 1024 * 1024;
/// Gzip member magic used by compressed tag files.
pub const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Compression mode detected for a source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Raw uncompressed stream.
	None,
	/// Gzip-compressed stream.
	Gzip,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Gzip => "gzip",
		}
	}
}

/// Report whether `bytes` starts with the gzip magic sequence.
///
/// Buffers shorter than two bytes are never gzip.
pub fn has_gzip_magic(bytes: &[u8]) -> bool {
	bytes.starts_with(&GZIP_MAGIC)
}

/// Detect and decode compression, returning `(mode, decoded_bytes)`.
pub fn decode_bytes(raw: Vec<u8>) -> Result<(Compression, Vec<u8>)> {
	if raw.is_empty() {
		return Err(NbtError::EmptyInput);
	}

	if has_gzip_magic(&raw) {
		let out = decode_gzip(&raw)?;
		return Ok((Compression::Gzip, out));
	}

	Ok((Compression::None, raw))
}

fn decode_gzip(raw: &[u8]) -> Result<Vec<u8>> {
	let mut decoder = flate2::read::GzDecoder::new(raw);
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf).map_err(NbtError::DecompressionFailed)?;
		if read == 0 {
			break;
		}

		if out.len() + read > MAX_DECOMPRESSED_BYTES {
			return Err(NbtError::DecompressedTooLarge { limit: MAX_DECOMPRESSED_BYTES });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}

#[cfg(test)]
mod tests;
