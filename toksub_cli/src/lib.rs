use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
	version,
	about = "Substitute ${name} placeholders in text using key=value definitions.",
	long_about = "toksub reads text from a file or stdin, replaces every ${name} placeholder \
	              with the value defined for `name`, and writes the result to stdout.\n\nA \
	              backslash before a delimiter keeps it literal (`\\${name}` stays `${name}`), \
	              undefined placeholders pass through unchanged, and `--enable-defaults` turns \
	              on `${name:fallback}` syntax.\n\nQuick start:\n  toksub -D name=world \
	              greeting.txt\n  echo 'hello ${name}' | toksub -D name=world"
)]
pub struct ToksubCli {
	/// Input file. Reads from stdin when omitted.
	pub file: Option<PathBuf>,

	/// Define a variable as `key=value`. May be repeated.
	#[arg(short = 'D', long = "define", value_name = "KEY=VALUE", value_parser = parse_key_value)]
	pub define: Vec<(String, String)>,

	/// The literal open delimiter.
	#[arg(long, default_value = "${")]
	pub open: String,

	/// The literal close delimiter.
	#[arg(long, default_value = "}")]
	pub close: String,

	/// Enable `${key:default}` fallback syntax.
	#[arg(long, default_value_t = false)]
	pub enable_defaults: bool,

	/// Separator between key and default value.
	#[arg(long, default_value = ":")]
	pub separator: String,

	/// Ignore all definitions and pass every placeholder through unchanged.
	#[arg(long, default_value_t = false)]
	pub no_vars: bool,

	/// Enable verbose scanner tracing on stderr.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,
}

/// Parse a `key=value` definition for clap. The value may contain `=`; only
/// the first one splits.
pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
	let Some((key, value)) = raw.split_once('=') else {
		return Err(format!("expected `key=value`, got `{raw}`"));
	};

	if key.is_empty() {
		return Err(format!("empty key in definition `{raw}`"));
	}

	Ok((key.to_string(), value.to_string()))
}
