use std::path::PathBuf;

use nbtdoc::nbt::{NbtFile, Result, Tag};

use crate::cmd::util::decode_options;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub compat: bool,
}

/// Output truncation and formatting limits for decoded trees.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of members printed for a single compound.
	pub max_members_per_compound: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for lists.
	pub max_list_items: usize,
	/// Maximum recursive print depth for nested lists/compounds.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_members_per_compound: 80,
			max_string_len: 200,
			max_list_items: 16,
			max_print_depth: 8,
		}
	}
}

/// Decode and print the tagged tree of a file.
pub fn run(args: Args) -> Result<()> {
	let Args { path, compat } = args;

	let file = NbtFile::open(&path, &decode_options(compat))?;

	println!("path: {}", path.display());
	println!("compression: {}", file.compression.as_str());
	println!("root_name: {:?}", &*file.document.name);
	println!("decoded:");
	print_tag(&Tag::Compound(file.document.root.clone()), 2, 0, PrintOptions::default());

	Ok(())
}

fn print_tag(tag: &Tag, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match tag {
		Tag::End => println!("{}end", pad),
		Tag::Byte(v) => println!("{}{v}", pad),
		Tag::Short(v) => println!("{}{v}", pad),
		Tag::Int(v) => println!("{}{v}", pad),
		Tag::Long(v) => println!("{}{v}", pad),
		Tag::Float(v) => println!("{}{v}", pad),
		Tag::Double(v) => println!("{}{v}", pad),
		Tag::ByteArray(items) => println!("{}byteArray[{}]", pad, items.len()),
		Tag::IntArray(items) => println!("{}intArray[{}]", pad, items.len()),
		Tag::LongArray(items) => println!("{}longArray[{}]", pad, items.len()),
		Tag::String(v) => println!("{}\"{}\"", pad, truncate(v, options.max_string_len)),
		Tag::List(list) => {
			if depth >= options.max_print_depth {
				println!("{}[... {} items]", pad, list.items.len());
				return;
			}
			println!("{}[", pad);
			for item in list.items.iter().take(options.max_list_items) {
				print_tag(item, indent + 2, depth + 1, options);
			}
			if list.items.len() > options.max_list_items {
				println!("{}  ... {} more", pad, list.items.len() - options.max_list_items);
			}
			println!("{}]", pad);
		}
		Tag::Compound(compound) => {
			if depth >= options.max_print_depth {
				println!("{}{{ ... {} members }}", pad, compound.len());
				return;
			}
			println!("{}{{", pad);
			for entry in compound.entries.iter().take(options.max_members_per_compound) {
				print!("{}  {} = ", pad, entry.name);
				if matches!(entry.value, Tag::Compound(_) | Tag::List(_)) {
					println!();
					print_tag(&entry.value, indent + 4, depth + 1, options);
				} else {
					print_tag(&entry.value, 0, depth + 1, options);
				}
			}
			if compound.len() > options.max_members_per_compound {
				println!("{}  ... {} more members", pad, compound.len() - options.max_members_per_compound);
			}
			println!("{}}}", pad);
		}
	}
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
