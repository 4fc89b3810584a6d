use crate::nbt::bytes::Cursor;
use crate::nbt::tag::{CompoundTag, ListTag, Tag, TagType};
use crate::nbt::text::{TextMode, decode_text};
use crate::nbt::{NbtError, Result};

/// Runtime limits and behavior switches for tag decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum recursive container nesting depth.
	pub max_depth: u32,
	/// Maximum allowed element count for lists and typed arrays.
	pub max_array_elems: usize,
	/// Decode behavior for string payload bytes.
	pub text_mode: TextMode,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 64,
			max_array_elems: 1 << 24,
			text_mode: TextMode::Corrected,
		}
	}
}

impl DecodeOptions {
	/// Preset reproducing the legacy text decode.
	pub fn compatible_text() -> Self {
		Self {
			text_mode: TextMode::Compatible,
			..Self::default()
		}
	}
}

/// Decoded document root: exactly one named compound tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
	/// Root name; empty in most real files.
	pub name: Box<str>,
	/// Root compound members.
	pub root: CompoundTag,
}

/// Parse an uncompressed tag stream into its root document.
///
/// Trailing bytes after the root compound's terminator are ignored.
pub fn parse_document(bytes: &[u8], opt: &DecodeOptions) -> Result<Document> {
	if bytes.is_empty() {
		return Err(NbtError::EmptyInput);
	}

	let mut cursor = Cursor::new(bytes);
	let root_type = cursor.read_u8()?;
	if root_type != TagType::Compound as u8 {
		return Err(NbtError::MalformedRoot { got: root_type });
	}

	let name = read_string(&mut cursor, opt)?;
	let root = decode_compound(&mut cursor, opt, 0)?;
	Ok(Document { name, root })
}

/// Decode one tag body of an already-known kind.
pub fn decode_tag(cursor: &mut Cursor<'_>, tag_type: TagType, opt: &DecodeOptions, depth: u32) -> Result<Tag> {
	match tag_type {
		TagType::End => Ok(Tag::End),
		TagType::Byte => Ok(Tag::Byte(cursor.read_i8()?)),
		TagType::Short => Ok(Tag::Short(cursor.read_i16_be()?)),
		TagType::Int => Ok(Tag::Int(cursor.read_i32_be()?)),
		TagType::Long => Ok(Tag::Long(cursor.read_i64_be()?)),
		TagType::Float => Ok(Tag::Float(cursor.read_f32_be()?)),
		TagType::Double => Ok(Tag::Double(cursor.read_f64_be()?)),
		TagType::ByteArray => decode_byte_array(cursor, opt),
		TagType::String => Ok(Tag::String(read_string(cursor, opt)?)),
		TagType::List => decode_list(cursor, opt, depth),
		TagType::Compound => Ok(Tag::Compound(decode_compound(cursor, opt, depth)?)),
		TagType::IntArray => decode_int_array(cursor, opt),
		TagType::LongArray => decode_long_array(cursor, opt),
	}
}

fn decode_compound(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: u32) -> Result<CompoundTag> {
	if depth >= opt.max_depth {
		return Err(NbtError::DepthExceeded { max_depth: opt.max_depth });
	}

	let mut out = CompoundTag::default();
	loop {
		let at = cursor.pos();
		let type_byte = cursor.read_u8()?;
		if type_byte == TagType::End as u8 {
			return Ok(out);
		}

		let tag_type = TagType::from_byte(type_byte).ok_or(NbtError::UnknownTagType { id: type_byte, at })?;
		let name = read_string(cursor, opt)?;
		let value = decode_tag(cursor, tag_type, opt, depth + 1)?;
		out.insert(name, value);
	}
}

fn decode_list(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: u32) -> Result<Tag> {
	if depth >= opt.max_depth {
		return Err(NbtError::DepthExceeded { max_depth: opt.max_depth });
	}

	let at = cursor.pos();
	let elem_byte = cursor.read_u8()?;
	let elem = TagType::from_byte(elem_byte).ok_or(NbtError::UnknownTagType { id: elem_byte, at })?;
	let count = cursor.read_i32_be()?;

	// An End element kind marks the empty list; the count field is not trusted.
	if elem == TagType::End {
		return Ok(Tag::List(ListTag { elem, items: Vec::new() }));
	}

	// Every non-End element consumes at least one byte, so the count can be
	// bounds-checked against remaining input before any allocation.
	let count = check_count(cursor, "list", count, 1, opt, at)?;
	let mut items = Vec::with_capacity(count);
	for _ in 0..count {
		items.push(decode_tag(cursor, elem, opt, depth + 1)?);
	}

	Ok(Tag::List(ListTag { elem, items }))
}

fn decode_byte_array(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Tag> {
	let at = cursor.pos();
	let count = cursor.read_i32_be()?;
	let count = check_count(cursor, "byteArray", count, 1, opt, at)?;
	let bytes = cursor.read_exact(count)?;
	Ok(Tag::ByteArray(bytes.iter().map(|byte| *byte as i8).collect()))
}

fn decode_int_array(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Tag> {
	let at = cursor.pos();
	let count = cursor.read_i32_be()?;
	let count = check_count(cursor, "intArray", count, 4, opt, at)?;

	let mut items = Vec::with_capacity(count);
	for _ in 0..count {
		items.push(cursor.read_i32_be()?);
	}
	Ok(Tag::IntArray(items))
}

fn decode_long_array(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Tag> {
	let at = cursor.pos();
	let count = cursor.read_i32_be()?;
	let count = check_count(cursor, "longArray", count, 8, opt, at)?;

	let mut items = Vec::with_capacity(count);
	for _ in 0..count {
		items.push(cursor.read_i64_be()?);
	}
	Ok(Tag::LongArray(items))
}

fn read_string(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Box<str>> {
	let len = cursor.read_u16_be()?;
	let bytes = cursor.read_exact(usize::from(len))?;
	Ok(decode_text(bytes, opt.text_mode))
}

fn check_count(cursor: &Cursor<'_>, kind: &'static str, count: i32, elem_size: usize, opt: &DecodeOptions, at: usize) -> Result<usize> {
	if count < 0 {
		return Err(NbtError::NegativeCount { kind, count, at });
	}

	let count = count as usize;
	if count > opt.max_array_elems {
		return Err(NbtError::ArrayTooLarge {
			count,
			max: opt.max_array_elems,
		});
	}

	let need = count.saturating_mul(elem_size);
	if need > cursor.remaining() {
		return Err(NbtError::ArrayLenOutOfRange {
			count,
			elem_size,
			rem: cursor.remaining(),
			at,
		});
	}

	Ok(count)
}
