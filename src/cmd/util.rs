use nbtdoc::nbt::DecodeOptions;

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json(payload: &impl serde::Serialize) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to render json: {err}"),
	}
}

/// Build decode options from the shared `--compat` CLI flag.
pub(crate) fn decode_options(compat: bool) -> DecodeOptions {
	if compat {
		DecodeOptions::compatible_text()
	} else {
		DecodeOptions::default()
	}
}
