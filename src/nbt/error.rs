use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, NbtError>;

/// Errors produced while reading, decoding, and traversing tag data.
#[derive(Debug, Error)]
pub enum NbtError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input buffer was empty.
	#[error("input buffer is empty")]
	EmptyInput,
	/// Gzip stream could not be decompressed.
	#[error("gzip decompression failed: {0}")]
	DecompressionFailed(#[source] std::io::Error),
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Root tag of the document was not a compound.
	#[error("root tag must be a compound, got type {got}")]
	MalformedRoot {
		/// Tag-type byte found at the document root.
		got: u8,
	},
	/// Tag-type byte outside the valid 0..=12 range.
	#[error("unknown tag type {id} at offset {at}")]
	UnknownTagType {
		/// Offending tag-type byte.
		id: u8,
		/// Byte offset where the type byte was read.
		at: usize,
	},
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// List or array length was negative.
	#[error("negative {kind} count {count} at offset {at}")]
	NegativeCount {
		/// Container kind being decoded.
		kind: &'static str,
		/// Parsed signed count.
		count: i32,
		/// Byte offset of the count field.
		at: usize,
	},
	/// Requested element count exceeded configured limit.
	#[error("array too large: count={count}, max={max}")]
	ArrayTooLarge {
		/// Requested element count.
		count: usize,
		/// Maximum permitted element count.
		max: usize,
	},
	/// Declared element count would read past the remaining input.
	#[error("array length out of range at offset {at}: count={count}, elem_size={elem_size}, remaining {rem}")]
	ArrayLenOutOfRange {
		/// Declared element count.
		count: usize,
		/// Byte width per element.
		elem_size: usize,
		/// Bytes still available.
		rem: usize,
		/// Byte offset of the count field.
		at: usize,
	},
	/// Decoder recursion depth exceeded configured limit.
	#[error("decode depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Path expression syntax is invalid.
	#[error("invalid tree path: {path}")]
	InvalidTreePath {
		/// Original user-provided path string.
		path: String,
	},
	/// Path step did not resolve against the tree.
	#[error("tree path step not found: {step}")]
	TreePathNotFound {
		/// Rendered step that failed to resolve.
		step: String,
	},
}
