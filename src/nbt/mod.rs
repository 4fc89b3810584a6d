mod bytes;
mod compression;
mod decode;
mod error;
mod file;
mod path;
mod tag;
mod text;
mod unwrap;

/// Bounds-checked big-endian cursor.
pub use bytes::Cursor;
/// Compression detection and transparent decompression.
pub use compression::{Compression, GZIP_MAGIC, decode_bytes, has_gzip_magic};
/// Decoding entry points and options.
pub use decode::{DecodeOptions, Document, decode_tag, parse_document};
/// Error and result aliases.
pub use error::{NbtError, Result};
/// File abstraction, one-shot decoding, and tree statistics.
pub use file::{NbtFile, TagStats, decode_to_plain};
/// Tree path parser and resolution types.
pub use path::{PathStep, TreePath};
/// Tag tree data model.
pub use tag::{CompoundTag, ListTag, NamedTag, Tag, TagType};
/// Text decode mode selection and entry point.
pub use text::{TextMode, decode_text};
/// Tag-tree unwrapping into plain values.
pub use unwrap::{unwrap_compound, unwrap_tag};
