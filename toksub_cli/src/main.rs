use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::io::Write;
use std::process;

use clap::Parser;
use toksub_cli::ToksubCli;
use toksub_core::AnyEmptyResult;
use toksub_core::SubstituteOptions;
use toksub_core::TokenScanner;
use toksub_core::ToksubError;
use toksub_core::VariableTokenHandler;

fn main() {
	let args = ToksubCli::parse();

	if args.verbose {
		tracing_subscriber::fmt()
			.with_env_filter(
				tracing_subscriber::EnvFilter::try_from_default_env()
					.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("toksub_core=trace")),
			)
			.with_writer(std::io::stderr)
			.init();
	}

	// Install miette's fancy handler for rich error diagnostics.
	let use_color = std::env::var_os("NO_COLOR").is_none();
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	if let Err(e) = run(&args) {
		// Render crate errors through miette for diagnostic codes and help
		// text.
		match e.downcast::<ToksubError>() {
			Ok(toksub_err) => {
				let report: miette::Report = (*toksub_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("error: {e}");
			}
		}
		process::exit(2);
	}
}

fn run(args: &ToksubCli) -> AnyEmptyResult {
	let text = match &args.file {
		Some(path) => fs::read_to_string(path).map_err(ToksubError::Io)?,
		None => {
			let mut buffer = String::new();
			std::io::stdin()
				.read_to_string(&mut buffer)
				.map_err(ToksubError::Io)?;
			buffer
		}
	};

	let variables: HashMap<String, String> = args.define.iter().cloned().collect();
	let options = SubstituteOptions {
		enable_default_values: args.enable_defaults,
		default_value_separator: args.separator.clone(),
	};

	let handler = VariableTokenHandler::with_options((!args.no_vars).then_some(&variables), options)
		.with_markers(args.open.as_str(), args.close.as_str());
	let scanner = TokenScanner::new(args.open.as_str(), args.close.as_str(), handler)?;
	let output = scanner.parse(&text)?;

	let mut stdout = std::io::stdout();
	stdout.write_all(output.as_bytes())?;
	stdout.flush()?;

	Ok(())
}
