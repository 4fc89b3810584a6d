#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "nbtdoc", about = "Named Binary Tag inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Info(cmd::info::Args),
	Decode(cmd::decode::Args),
	Json(cmd::json::Args),
	Get(cmd::get::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> nbtdoc::nbt::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Json(args) => cmd::json::run(args),
		Commands::Get(args) => cmd::get::run(args),
	}
}
