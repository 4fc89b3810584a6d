/// Decode behavior for string payload bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMode {
	/// Standard non-overlapping UTF-8 decode; invalid input becomes U+FFFD.
	#[default]
	Corrected,
	/// Reproduce the legacy overlapping scan byte for byte.
	Compatible,
}

impl TextMode {
	/// Render text mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Corrected => "corrected",
			Self::Compatible => "compatible",
		}
	}
}

/// Decode raw string bytes according to `mode`.
pub fn decode_text(bytes: &[u8], mode: TextMode) -> Box<str> {
	match mode {
		TextMode::Corrected => String::from_utf8_lossy(bytes).into_owned().into_boxed_str(),
		TextMode::Compatible => decode_compatible(bytes),
	}
}

/// Legacy scan: one byte per iteration, every position classified as a
/// potential sequence starter, continuation bytes never skipped. An iteration
/// bails as soon as lookahead runs past the end of the slice.
fn decode_compatible(bytes: &[u8]) -> Box<str> {
	let mut out = String::with_capacity(bytes.len());

	for (idx, &first) in bytes.iter().enumerate() {
		if first & 0x80 == 0 {
			out.push(char::from(first & 0x7F));
			continue;
		}

		let Some(&second) = bytes.get(idx + 1) else {
			continue;
		};
		if first & 0xE0 == 0xC0 && second & 0xC0 == 0x80 {
			push_unit(&mut out, (u32::from(first & 0x1F) << 6) | u32::from(second & 0x3F));
		}

		let Some(&third) = bytes.get(idx + 2) else {
			continue;
		};
		if first & 0xF0 == 0xE0 && second & 0xC0 == 0x80 && third & 0xC0 == 0x80 {
			push_unit(
				&mut out,
				(u32::from(first & 0x0F) << 12) | (u32::from(second & 0x3F) << 6) | u32::from(third & 0x3F),
			);
		}

		let Some(&fourth) = bytes.get(idx + 3) else {
			continue;
		};
		if first & 0xF8 == 0xF0 && second & 0xC0 == 0x80 && third & 0xC0 == 0x80 && fourth & 0xC0 == 0x80 {
			push_unit(
				&mut out,
				(u32::from(first & 0x07) << 18)
					| (u32::from(second & 0x3F) << 12)
					| (u32::from(third & 0x3F) << 6)
					| u32::from(fourth & 0x3F),
			);
		}
	}

	out.into_boxed_str()
}

// The legacy scan materialized code points as 16-bit units; values that
// truncate into the surrogate range have no scalar form and become U+FFFD.
fn push_unit(out: &mut String, code_point: u32) {
	let unit = code_point & 0xFFFF;
	out.push(char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER));
}
