use std::path::PathBuf;

use nbtdoc::nbt::{NbtFile, Result};

use crate::cmd::util::{decode_options, emit_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub compat: bool,
}

/// Unwrap a file into a plain tree and print it as JSON.
pub fn run(args: Args) -> Result<()> {
	let Args { path, compat } = args;

	let file = NbtFile::open(&path, &decode_options(compat))?;
	emit_json(&file.document.unwrapped());

	Ok(())
}
