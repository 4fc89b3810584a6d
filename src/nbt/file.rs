use std::fs;
use std::path::Path;

use crate::nbt::compression::decode_bytes;
use crate::nbt::tag::{Tag, TagType};
use crate::nbt::{Compression, DecodeOptions, Document, Result, parse_document};

pub struct NbtFile {
	pub compression: Compression,
	pub document: Document,
}

impl NbtFile {
	/// Read and decode a file from disk.
	pub fn open(path: impl AsRef<Path>, opt: &DecodeOptions) -> Result<Self> {
		let raw = fs::read(path)?;
		Self::from_bytes(raw, opt)
	}

	/// Decode an in-memory buffer, decompressing when gzip magic is present.
	pub fn from_bytes(raw: Vec<u8>, opt: &DecodeOptions) -> Result<Self> {
		let (compression, bytes) = decode_bytes(raw)?;
		let document = parse_document(&bytes, opt)?;
		Ok(Self { compression, document })
	}

	/// Scan the decoded tree for per-kind node counts and nesting depth.
	pub fn tag_stats(&self) -> TagStats {
		let mut stats = TagStats {
			counts: [0; 13],
			max_depth: 0,
			node_count: 0,
		};

		stats.record(TagType::Compound, 0);
		for entry in &self.document.root.entries {
			visit_tag(&entry.value, 1, &mut stats);
		}

		stats
	}
}

/// Decode a buffer all the way to its unwrapped plain tree.
pub fn decode_to_plain(raw: Vec<u8>, opt: &DecodeOptions) -> Result<serde_json::Value> {
	let file = NbtFile::from_bytes(raw, opt)?;
	Ok(file.document.unwrapped())
}

pub struct TagStats {
	pub counts: [u32; 13],
	pub max_depth: u32,
	pub node_count: u32,
}

impl TagStats {
	/// Node count for one tag kind.
	pub fn count(&self, tag_type: TagType) -> u32 {
		self.counts[tag_type as usize]
	}

	fn record(&mut self, tag_type: TagType, depth: u32) {
		self.counts[tag_type as usize] += 1;
		self.node_count += 1;
		self.max_depth = self.max_depth.max(depth);
	}
}

fn visit_tag(tag: &Tag, depth: u32, stats: &mut TagStats) {
	stats.record(tag.tag_type(), depth);

	match tag {
		Tag::List(list) => {
			for item in &list.items {
				visit_tag(item, depth + 1, stats);
			}
		}
		Tag::Compound(compound) => {
			for entry in &compound.entries {
				visit_tag(&entry.value, depth + 1, stats);
			}
		}
		_ => {}
	}
}
