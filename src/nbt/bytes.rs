use crate::nbt::{NbtError, Result};

/// Forward-only bounds-checked reader over a byte slice.
///
/// All multi-byte reads are big-endian, matching the wire format.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor starting at offset 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Current byte offset from the start of the buffer.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Bytes remaining after the current offset.
	pub fn remaining(&self) -> usize {
		self.bytes.len() - self.pos
	}

	/// Read exactly `need` bytes and advance past them.
	pub fn read_exact(&mut self, need: usize) -> Result<&'a [u8]> {
		let rem = self.remaining();
		if need > rem {
			return Err(NbtError::UnexpectedEof { at: self.pos, need, rem });
		}

		let out = &self.bytes[self.pos..self.pos + need];
		self.pos += need;
		Ok(out)
	}

	fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let bytes = self.read_exact(N)?;
		let mut out = [0_u8; N];
		out.copy_from_slice(bytes);
		Ok(out)
	}

	/// Read one signed byte.
	pub fn read_i8(&mut self) -> Result<i8> {
		Ok(self.read_array::<1>()?[0] as i8)
	}

	/// Read one unsigned byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_array::<1>()?[0])
	}

	/// Read a big-endian signed 16-bit integer.
	pub fn read_i16_be(&mut self) -> Result<i16> {
		Ok(i16::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian unsigned 16-bit integer.
	pub fn read_u16_be(&mut self) -> Result<u16> {
		Ok(u16::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian signed 32-bit integer.
	pub fn read_i32_be(&mut self) -> Result<i32> {
		Ok(i32::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian signed 64-bit integer.
	pub fn read_i64_be(&mut self) -> Result<i64> {
		Ok(i64::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian 32-bit IEEE float.
	pub fn read_f32_be(&mut self) -> Result<f32> {
		Ok(f32::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian 64-bit IEEE float.
	pub fn read_f64_be(&mut self) -> Result<f64> {
		Ok(f64::from_be_bytes(self.read_array()?))
	}
}
