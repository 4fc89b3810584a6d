use std::path::PathBuf;

use nbtdoc::nbt::{NbtFile, Result, TreePath};

use crate::cmd::util::{decode_options, emit_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Dotted member path with optional `[index]` selectors, for example
	/// `data.contents.players[0].name`.
	pub tree_path: String,
	#[arg(long)]
	pub compat: bool,
}

/// Resolve a tree path against the unwrapped tree and print the subtree.
pub fn run(args: Args) -> Result<()> {
	let Args { path, tree_path, compat } = args;

	let parsed = TreePath::parse(&tree_path)?;
	let file = NbtFile::open(&path, &decode_options(compat))?;
	let tree = file.document.unwrapped();
	let selected = parsed.resolve(&tree)?;
	emit_json(selected);

	Ok(())
}
