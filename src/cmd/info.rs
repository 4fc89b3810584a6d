use std::path::PathBuf;

use nbtdoc::nbt::{NbtFile, Result, TagType};

use crate::cmd::util::{decode_options, emit_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub compat: bool,
	#[arg(long)]
	pub json: bool,
}

/// Print high-level file and tag statistics.
pub fn run(args: Args) -> Result<()> {
	let Args { path, compat, json } = args;

	let file = NbtFile::open(&path, &decode_options(compat))?;
	let stats = file.tag_stats();

	let mut entries: Vec<_> = TagType::ALL
		.into_iter()
		.map(|tag_type| (tag_type, stats.count(tag_type)))
		.filter(|(_, count)| *count > 0)
		.collect();
	entries.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| (left.0 as u8).cmp(&(right.0 as u8))));

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			compression: file.compression.as_str(),
			root_name: file.document.name.to_string(),
			root_members: file.document.root.len(),
			node_count: stats.node_count,
			max_depth: stats.max_depth,
			tag_counts: entries
				.iter()
				.map(|(tag_type, count)| TagCountJson {
					kind: tag_type.as_str(),
					count: *count,
				})
				.collect(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("compression: {}", file.compression.as_str());
	println!("root_name: {:?}", &*file.document.name);
	println!("root_members: {}", file.document.root.len());
	println!("node_count: {}", stats.node_count);
	println!("max_depth: {}", stats.max_depth);

	println!("tag_counts:");
	for (tag_type, count) in entries {
		println!("  {}: {}", tag_type.as_str(), count);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct TagCountJson {
	kind: &'static str,
	count: u32,
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	compression: &'static str,
	root_name: String,
	root_members: usize,
	node_count: u32,
	max_depth: u32,
	tag_counts: Vec<TagCountJson>,
}
