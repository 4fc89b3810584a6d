#![allow(missing_docs)]

use std::io::Write;

use nbtdoc::nbt::{Compression, DecodeOptions, NbtFile, Tag, TagType, decode_to_plain};

fn push_str(out: &mut Vec<u8>, text: &str) {
	out.extend_from_slice(&(text.len() as u16).to_be_bytes());
	out.extend_from_slice(text.as_bytes());
}

fn named(out: &mut Vec<u8>, tag_type: u8, name: &str) {
	out.push(tag_type);
	push_str(out, name);
}

/// Storage-shaped document: `{ data: { contents: { players: [ {id, name}, ... ] } } }`.
fn storage_document() -> Vec<u8> {
	let mut bytes = vec![10];
	push_str(&mut bytes, "");

	named(&mut bytes, 10, "data");
	named(&mut bytes, 10, "contents");
	named(&mut bytes, 9, "players");
	bytes.push(10);
	bytes.extend_from_slice(&2_i32.to_be_bytes());
	for (id, name) in [(1_i32, "alpha"), (2, "beta")] {
		named(&mut bytes, 3, "id");
		bytes.extend_from_slice(&id.to_be_bytes());
		named(&mut bytes, 8, "name");
		push_str(&mut bytes, name);
		named(&mut bytes, 11, "uuid");
		bytes.extend_from_slice(&2_i32.to_be_bytes());
		bytes.extend_from_slice(&id.to_be_bytes());
		bytes.extend_from_slice(&(-id).to_be_bytes());
		bytes.push(0);
	}
	bytes.push(0);
	bytes.push(0);
	bytes.push(0);

	bytes
}

fn gzip(payload: &[u8]) -> Vec<u8> {
	let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
	encoder.write_all(payload).expect("gzip write succeeds");
	encoder.finish().expect("gzip finish succeeds")
}

#[test]
fn raw_and_gzip_buffers_decode_identically() {
	let raw = storage_document();

	let plain = NbtFile::from_bytes(raw.clone(), &DecodeOptions::default()).expect("raw decodes");
	let packed = NbtFile::from_bytes(gzip(&raw), &DecodeOptions::default()).expect("gzip decodes");

	assert_eq!(plain.compression, Compression::None);
	assert_eq!(packed.compression, Compression::Gzip);
	assert_eq!(plain.document, packed.document);
}

#[test]
fn storage_document_unwraps_to_plain_tree() {
	let file = NbtFile::from_bytes(storage_document(), &DecodeOptions::default()).expect("document decodes");

	let expected = serde_json::json!({
		"data": {
			"contents": {
				"players": [
					{ "id": 1, "name": "alpha", "uuid": [1, -1] },
					{ "id": 2, "name": "beta", "uuid": [2, -2] },
				],
			},
		},
	});
	assert_eq!(file.document.unwrapped(), expected);
}

#[test]
fn one_shot_decode_matches_staged_decode() {
	let staged = NbtFile::from_bytes(storage_document(), &DecodeOptions::default())
		.expect("document decodes")
		.document
		.unwrapped();
	let one_shot = decode_to_plain(gzip(&storage_document()), &DecodeOptions::default()).expect("gzip decodes");
	assert_eq!(staged, one_shot);
}

#[test]
fn tag_stats_count_decoded_nodes() {
	let file = NbtFile::from_bytes(storage_document(), &DecodeOptions::default()).expect("document decodes");
	let stats = file.tag_stats();

	// root + data + contents + 2 list elements
	assert_eq!(stats.count(TagType::Compound), 5);
	assert_eq!(stats.count(TagType::List), 1);
	assert_eq!(stats.count(TagType::Int), 2);
	assert_eq!(stats.count(TagType::String), 2);
	assert_eq!(stats.count(TagType::IntArray), 2);
	assert_eq!(stats.count(TagType::End), 0);
	assert_eq!(stats.node_count, 12);
	assert_eq!(stats.max_depth, 5);
}

#[test]
fn decoded_members_are_reachable_by_name() {
	let file = NbtFile::from_bytes(storage_document(), &DecodeOptions::default()).expect("document decodes");

	let data = match file.document.root.get("data") {
		Some(Tag::Compound(compound)) => compound,
		other => panic!("unexpected member: {other:?}"),
	};
	let contents = match data.get("contents") {
		Some(Tag::Compound(compound)) => compound,
		other => panic!("unexpected member: {other:?}"),
	};
	assert!(matches!(contents.get("players"), Some(Tag::List(_))));
}
